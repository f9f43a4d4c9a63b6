mod category;
mod presets;
mod state;
mod validate;

pub use category::Category;
pub use presets::{parse_layout, Preset, PresetError};
pub use state::{BoardState, DEFAULT_BOX_SIZE};
pub use validate::{check_placement, is_won, validate, PlacementConflict};
