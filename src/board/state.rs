use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use super::Category;
use crate::math::BoardCell;

pub const DEFAULT_BOX_SIZE: usize = 3;

/// Occupied cells grouped by category.
///
/// Cells are only ever added. Constraint checking lives in [`check_placement`](super::check_placement)
/// and is the caller's job before calling [`BoardState::insert`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoardState {
    box_size: usize,
    cells: BTreeMap<Category, BTreeSet<BoardCell>>,
}

impl BoardState {
    pub fn new(box_size: usize) -> Self {
        Self {
            box_size,
            cells: Category::all().map(|c| (c, BTreeSet::new())).collect(),
        }
    }

    pub fn box_size(&self) -> usize {
        self.box_size
    }

    /// Board side length, `box_size²`.
    pub fn side(&self) -> usize {
        self.box_size * self.box_size
    }

    pub fn contains(&self, cell: BoardCell) -> bool {
        cell.row < self.side() && cell.col < self.side()
    }

    pub fn cells(&self, category: Category) -> impl Iterator<Item = BoardCell> + '_ {
        self.cells.get(&category).into_iter().flatten().copied()
    }

    pub fn count(&self, category: Category) -> usize {
        self.cells.get(&category).map_or(0, BTreeSet::len)
    }

    pub fn total(&self) -> usize {
        self.cells.values().map(BTreeSet::len).sum()
    }

    /// Category whose token sits on `cell`, if any.
    pub fn occupant(&self, cell: BoardCell) -> Option<Category> {
        self.cells
            .iter()
            .find(|(_, set)| set.contains(&cell))
            .map(|(&category, _)| category)
    }

    /// Every occupied cell with its category, in category order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, BoardCell)> + '_ {
        self.cells
            .iter()
            .flat_map(|(&category, set)| set.iter().map(move |&cell| (category, cell)))
    }

    /// Adds `cell` to `category` without checking constraints.
    /// Returns `false` if it was already there.
    pub fn insert(&mut self, cell: BoardCell, category: Category) -> bool {
        self.cells.entry(category).or_default().insert(cell)
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new(DEFAULT_BOX_SIZE)
    }
}

/// One line per row; `1`–`9` name categories in declaration order, `.` is empty.
impl fmt::Display for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.side() {
            for col in 0..self.side() {
                match self.occupant(BoardCell::new(row, col)) {
                    Some(category) => write!(f, "{}", category.index() + 1)?,
                    None => f.write_str(".")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = BoardState::default();
        assert_eq!(board.side(), 9);
        assert_eq!(board.total(), 0);
        assert!(Category::all().all(|c| board.count(c) == 0));
    }

    #[test]
    fn test_insert_and_occupant() {
        let mut board = BoardState::default();
        assert!(board.insert(BoardCell::new(2, 3), Category::Yellow));
        assert!(!board.insert(BoardCell::new(2, 3), Category::Yellow));
        assert_eq!(board.occupant(BoardCell::new(2, 3)), Some(Category::Yellow));
        assert_eq!(board.occupant(BoardCell::new(3, 2)), None);
        assert_eq!(board.count(Category::Yellow), 1);
        assert_eq!(board.total(), 1);
    }

    #[test]
    fn test_contains() {
        let board = BoardState::default();
        assert!(board.contains(BoardCell::new(8, 0)));
        assert!(!board.contains(BoardCell::new(9, 0)));
        assert!(!board.contains(BoardCell::new(0, 9)));
    }

    #[test]
    fn test_display_grid() {
        let mut board = BoardState::new(2);
        board.insert(BoardCell::new(0, 0), Category::Red);
        board.insert(BoardCell::new(3, 2), Category::Yellow);
        assert_eq!(board.to_string(), "1...\n....\n....\n..3.\n");
    }
}
