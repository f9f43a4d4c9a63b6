use serde::{Deserialize, Serialize};
use strum::{Display, EnumCount, EnumIter, EnumString, IntoEnumIterator};

use crate::math::Color;

/// The colored token families. Each one plays the role a digit plays in Sudoku.
#[derive(
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    EnumCount,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "camelCase")]
#[serde(rename_all = "camelCase")]
pub enum Category {
    Red,
    Orange,
    Yellow,
    LightGreen,
    DarkGreen,
    LightBlue,
    DarkBlue,
    LightPurple,
    DarkPurple,
}

impl Category {
    /// First declared category; the one selected when the game starts.
    pub const FIRST: Category = Category::Red;

    pub fn all() -> impl Iterator<Item = Category> {
        Self::iter()
    }

    /// Position in declaration order.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Category> {
        Self::iter().nth(index)
    }

    pub const fn color(self) -> Color {
        match self {
            Category::Red => Color::rgba(0.584314, 0.109804, 0.0745098, 1.0),
            Category::Orange => Color::rgba(0.666667, 0.278431, 0.0235294, 1.0),
            Category::Yellow => Color::rgba(0.627451, 0.588235, 0.0117647, 1.0),
            Category::LightGreen => Color::rgba(0.239216, 0.435294, 0.00392157, 1.0),
            Category::DarkGreen => Color::rgba(0.0313726, 0.243137, 0.0156863, 1.0),
            Category::LightBlue => Color::rgba(0.509804, 0.611765, 0.709804, 1.0),
            Category::DarkBlue => Color::rgba(0.121569, 0.345098, 0.596078, 1.0),
            Category::LightPurple => Color::rgba(0.45098, 0.380392, 0.560784, 1.0),
            Category::DarkPurple => Color::rgba(0.2, 0.0823529, 0.317647, 1.0),
        }
    }
}

impl Default for Category {
    fn default() -> Self {
        Self::FIRST
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_names_are_camel_case() {
        assert_eq!(Category::LightGreen.to_string(), "lightGreen");
        assert_eq!(Category::from_str("darkPurple"), Ok(Category::DarkPurple));
        assert!(Category::from_str("magenta").is_err());
    }

    #[test]
    fn test_index_round_trip() {
        assert_eq!(Category::COUNT, 9);
        for category in Category::all() {
            assert_eq!(Category::from_index(category.index()), Some(category));
        }
        assert_eq!(Category::from_index(9), None);
    }

    #[test]
    fn test_palette_hex() {
        assert_eq!(Category::Red.color().to_hex(), "#951c13");
        assert_eq!(Category::DarkBlue.color().to_hex(), "#1f5898");
    }

    #[test]
    fn test_default_is_first() {
        assert_eq!(Category::default(), Category::Red);
        assert_eq!(Category::all().next(), Some(Category::FIRST));
    }
}
