//! Named starting layouts.
//!
//! Layouts are written as rows of characters: `1`..`9` place the category with that
//! (one-based) declaration index, `.` leaves the cell empty.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

use super::{check_placement, BoardState, Category, PlacementConflict};
use crate::math::BoardCell;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PresetError {
    #[error("unknown preset {0:?}")]
    Unknown(String),
    #[error("layout has {found} rows, expected {expected}")]
    RowCount { found: usize, expected: usize },
    #[error("row {row} has {found} cells, expected {expected}")]
    RowLength {
        row: usize,
        found: usize,
        expected: usize,
    },
    #[error("unexpected {symbol:?} at {cell}")]
    BadSymbol { cell: BoardCell, symbol: char },
    #[error("layout breaks the placement rules at {cell}: {conflict}")]
    Conflict {
        cell: BoardCell,
        conflict: PlacementConflict,
    },
}

#[derive(
    Copy, Clone, Debug, Default, PartialEq, Eq, Display, EnumIter, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "camelCase")]
#[serde(rename_all = "camelCase")]
pub enum Preset {
    Empty,
    Easy,
    #[default]
    Challenging,
    /// Every category one short of complete.
    NearSolved,
    /// A single token missing.
    OneFromWin,
}

const EMPTY: [&str; 9] = [
    ".........",
    ".........",
    ".........",
    ".........",
    ".........",
    ".........",
    ".........",
    ".........",
    ".........",
];

const EASY: [&str; 9] = [
    "47.8293..",
    "3.9..51.7",
    "65231.49.",
    "9237..84.",
    "..4..3..2",
    ".18.46973",
    "1.56.4289",
    "..7..2..1",
    ".96138.5.",
];

const CHALLENGING: [&str; 9] = [
    ".7.8293..",
    "3.....1..",
    "6523..4..",
    "9237..84.",
    ".........",
    ".18..6973",
    "..5..4289",
    "..7.....1",
    "..6138.5.",
];

const NEAR_SOLVED: [&str; 9] = [
    "47.829365",
    "3894651.7",
    "652.17498",
    "9237518.6",
    "764983.12",
    "51824.973",
    "1356.4289",
    ".47592631",
    "2.6138754",
];

const ONE_FROM_WIN: [&str; 9] = [
    "4.1829365",
    "389465127",
    "652317498",
    "923751846",
    "764983512",
    "518246973",
    "135674289",
    "847592631",
    "296138754",
];

impl Preset {
    pub fn all() -> impl Iterator<Item = Preset> {
        Self::iter()
    }

    pub fn named(name: &str) -> Result<Preset, PresetError> {
        name.parse().map_err(|_| PresetError::Unknown(name.to_owned()))
    }

    pub fn rows(self) -> &'static [&'static str] {
        match self {
            Preset::Empty => &EMPTY,
            Preset::Easy => &EASY,
            Preset::Challenging => &CHALLENGING,
            Preset::NearSolved => &NEAR_SOLVED,
            Preset::OneFromWin => &ONE_FROM_WIN,
        }
    }

    pub fn board(self) -> Result<BoardState, PresetError> {
        self.board_sized(super::DEFAULT_BOX_SIZE)
    }

    /// Layout on a board with `box_size`-wide boxes. Only the empty layout fits every size.
    pub fn board_sized(self, box_size: usize) -> Result<BoardState, PresetError> {
        match self {
            Preset::Empty => Ok(BoardState::new(box_size)),
            _ => parse_layout(self.rows(), box_size),
        }
    }
}

/// Builds a board from a character layout, checking every token against the placement rules.
pub fn parse_layout<S: AsRef<str>>(rows: &[S], box_size: usize) -> Result<BoardState, PresetError> {
    let mut board = BoardState::new(box_size);
    let side = board.side();
    if rows.len() != side {
        return Err(PresetError::RowCount {
            found: rows.len(),
            expected: side,
        });
    }

    for (row, line) in rows.iter().enumerate() {
        let line = line.as_ref();
        let found = line.chars().count();
        if found != side {
            return Err(PresetError::RowLength {
                row,
                found,
                expected: side,
            });
        }
        for (col, symbol) in line.chars().enumerate() {
            let cell = BoardCell::new(row, col);
            let category = match symbol {
                '.' => continue,
                _ => symbol
                    .to_digit(10)
                    .and_then(|d| (d as usize).checked_sub(1))
                    .and_then(Category::from_index)
                    .ok_or(PresetError::BadSymbol { cell, symbol })?,
            };
            check_placement(&board, cell, category)
                .map_err(|conflict| PresetError::Conflict { cell, conflict })?;
            board.insert(cell, category);
        }
    }
    Ok(board)
}
