use super::{BoardState, Category};
use crate::math::BoardCell;

/// Why a token may not go on a cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PlacementConflict {
    #[error("cell {0} is not on the board")]
    OutsideBoard(BoardCell),
    #[error("cell is already taken by {by}")]
    Occupied { by: Category },
    #[error("{category} already has a token in this row at {existing}")]
    SameRow { category: Category, existing: BoardCell },
    #[error("{category} already has a token in this column at {existing}")]
    SameColumn { category: Category, existing: BoardCell },
    #[error("{category} already has a token in this box at {existing}")]
    SameBox { category: Category, existing: BoardCell },
}

/// Checks whether `category` may claim `cell`. Never mutates the board.
pub fn check_placement(
    board: &BoardState,
    cell: BoardCell,
    category: Category,
) -> Result<(), PlacementConflict> {
    if !board.contains(cell) {
        return Err(PlacementConflict::OutsideBoard(cell));
    }
    if let Some(by) = board.occupant(cell) {
        return Err(PlacementConflict::Occupied { by });
    }

    let box_size = board.box_size();
    for existing in board.cells(category) {
        if existing.row == cell.row {
            return Err(PlacementConflict::SameRow { category, existing });
        }
        if existing.col == cell.col {
            return Err(PlacementConflict::SameColumn { category, existing });
        }
        if existing.box_of(box_size) == cell.box_of(box_size) {
            return Err(PlacementConflict::SameBox { category, existing });
        }
    }
    Ok(())
}

pub fn validate(board: &BoardState, cell: BoardCell, category: Category) -> bool {
    check_placement(board, cell, category).is_ok()
}

/// True once every category holds exactly `target` tokens.
pub fn is_won(board: &BoardState, target: usize) -> bool {
    Category::all().all(|category| board.count(category) == target)
}
