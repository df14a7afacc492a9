use serde::{Deserialize, Serialize};
use std::fmt;

/// A target cell on the board, addressed by `(row, col)`.
///
/// Moves order lexicographically by row, then column. The search relies on
/// this ordering for its default tie-break. "No legal move" is represented by
/// `Option<Move>::None` rather than an out-of-range coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Move {
    row: i32,
    col: i32,
}

impl Move {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    pub fn row(&self) -> i32 {
        self.row
    }

    pub fn col(&self) -> i32 {
        self.col
    }

    /// Returns the cell reached by applying the offset `(dr, dc)`.
    pub fn offset(&self, dr: i32, dc: i32) -> Self {
        Self::new(self.row + dr, self.col + dc)
    }

    /// Whether the cell lies inside a `width x height` board.
    pub fn is_within(&self, width: u32, height: u32) -> bool {
        self.row >= 0 && self.col >= 0 && (self.row as u32) < height && (self.col as u32) < width
    }
}

impl From<(i32, i32)> for Move {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
