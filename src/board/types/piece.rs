//! Piece and color types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::square::{Square, ROWS};

/// Checkers colors.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    Red,
    White,
}

impl Color {
    /// Returns the opposite color
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Color {
        match self {
            Color::Red => Color::White,
            Color::White => Color::Red,
        }
    }

    /// Row a piece of this color is crowned on (the row farthest from its
    /// starting side: 0 for Red, 7 for White)
    #[inline]
    #[must_use]
    pub const fn promotion_row(self) -> usize {
        match self {
            Color::Red => 0,
            Color::White => ROWS - 1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Red => write!(f, "Red"),
            Color::White => write!(f, "White"),
        }
    }
}

/// A single checker, owned by value by the grid cell it sits on.
///
/// The square stored here always matches the grid cell holding the piece;
/// [`crate::board::Board`] keeps the two in step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Piece {
    square: Square,
    color: Color,
    king: bool,
}

impl Piece {
    #[must_use]
    pub(crate) const fn new(square: Square, color: Color) -> Self {
        Piece {
            square,
            color,
            king: false,
        }
    }

    /// The square this piece sits on
    #[inline]
    #[must_use]
    pub const fn square(self) -> Square {
        self.square
    }

    #[inline]
    #[must_use]
    pub const fn color(self) -> Color {
        self.color
    }

    /// Whether this piece has been crowned
    #[inline]
    #[must_use]
    pub const fn is_king(self) -> bool {
        self.king
    }

    /// Relocate the piece's coordinates. No grid side effect.
    #[inline]
    pub(crate) fn advance(&mut self, to: Square) {
        self.square = to;
    }

    /// Crown the piece. Idempotent.
    #[inline]
    pub(crate) fn crown(&mut self) {
        self.king = true;
    }

    /// Character for board diagrams: r/w for men, R/W for kings
    #[must_use]
    pub(crate) const fn symbol(self) -> char {
        match (self.color, self.king) {
            (Color::Red, false) => 'r',
            (Color::Red, true) => 'R',
            (Color::White, false) => 'w',
            (Color::White, true) => 'W',
        }
    }
}
