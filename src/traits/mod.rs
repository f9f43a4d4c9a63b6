pub mod behavior;
pub mod scene_sink;

pub use behavior::*;
pub use scene_sink::*;
