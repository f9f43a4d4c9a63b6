pub mod animation;
pub mod board;
pub mod camera;
pub mod cli;
pub mod config;
pub mod game;
pub mod math;
pub mod traits;

pub use animation::{Keyframe, KeyframeSequence, TokenAnimator, Transform};
pub use board::{BoardState, Category, Preset};
pub use camera::{Camera, CameraConfig};
pub use config::GameConfig;
pub use game::{BoardGame, GameError, PlacementResult};
pub use math::{BoardCell, GridMapper, GroundIntersector, Ray};
