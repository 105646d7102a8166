//! Core checkers types.
//!
//! - `Color` and `Piece` - the two sides and their checkers
//! - `Square` - (row, col) board coordinate

mod piece;
mod square;

pub use piece::{Color, Piece};
pub use square::{Square, COLS, ROWS};
