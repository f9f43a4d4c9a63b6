mod color;
mod ground;
mod grid;
mod ray;

pub use color::Color;
pub use ground::{
    GroundIntersector, PickingError, DEFAULT_MARCH_DISTANCE, DEFAULT_MARCH_STEP, MAX_MARCH_STEPS,
};
pub use grid::{BoardCell, GridMapper};
pub use ray::Ray;
