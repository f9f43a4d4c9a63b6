use glam::Vec3;
use serde::{Deserialize, Serialize};

/// A square on the board. Rows run along world `z`, columns along world `x`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BoardCell {
    pub row: usize,
    pub col: usize,
}

impl BoardCell {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Index of the `box_size`×`box_size` region containing this cell, as (box row, box col).
    pub const fn box_of(&self, box_size: usize) -> (usize, usize) {
        (self.row / box_size, self.col / box_size)
    }
}

impl std::fmt::Display for BoardCell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Quantizes ground-plane points onto a square board centered at the world origin.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GridMapper {
    pub cell_size: f32,
    pub side: usize,
}

impl GridMapper {
    pub const fn new(cell_size: f32, side: usize) -> Self {
        Self { cell_size, side }
    }

    /// Offset that moves the centered cell index range onto `[0, side)`.
    pub const fn radius(&self) -> i64 {
        (self.side / 2) as i64
    }

    pub fn map_to_grid(&self, point: Vec3) -> Option<BoardCell> {
        // Range-checked as floats so far-off or NaN coordinates never reach the integer cast
        let radius = self.radius() as f32;
        let side = self.side as f32;
        let col = (point.x / self.cell_size).round() + radius;
        let row = (point.z / self.cell_size).round() + radius;
        if (0.0..side).contains(&row) && (0.0..side).contains(&col) {
            Some(BoardCell::new(row as usize, col as usize))
        } else {
            None
        }
    }

    /// Ground-plane center of `cell`; `map_to_grid` maps it back to `cell`.
    pub fn cell_center(&self, cell: BoardCell) -> Vec3 {
        let radius = self.radius() as f32;
        Vec3::new(
            (cell.col as f32 - radius) * self.cell_size,
            0.0,
            (cell.row as f32 - radius) * self.cell_size,
        )
    }
}
