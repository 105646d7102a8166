//! Board square type.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of rows on the board.
pub const ROWS: usize = 8;
/// Number of columns on the board.
pub const COLS: usize = 8;

/// A square on the board, represented as (row, col).
///
/// Row 0 is White's back rank; Red starts on rows 5-7 and advances toward
/// row 0. The derived `Ord` compares row-major, which fixes the iteration
/// order of destination maps and makes search tie-breaking reproducible.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(pub usize, pub usize); // (row, col)

impl Square {
    /// Create a new square with bounds checking
    #[must_use]
    pub fn new(row: usize, col: usize) -> Option<Self> {
        if row < ROWS && col < COLS {
            Some(Square(row, col))
        } else {
            None
        }
    }

    /// Get the row (0-7, where 0 = White's back rank)
    #[inline]
    #[must_use]
    pub const fn row(self) -> usize {
        self.0
    }

    /// Get the column (0-7)
    #[inline]
    #[must_use]
    pub const fn col(self) -> usize {
        self.1
    }

    /// Dark squares are the playable half of the board
    #[inline]
    #[must_use]
    pub const fn is_dark(self) -> bool {
        self.1 % 2 == (self.0 + 1) % 2
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.0, self.1)
    }
}
