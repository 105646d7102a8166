//! Checkers board representation and game logic.
//!
//! The grid holds pieces by value and every mutation keeps the piece and
//! king counters in step, so boards clone into fully independent snapshots
//! for the search strategies.
//!
//! # Example
//! ```
//! use checkers_engine::board::{Board, Color};
//!
//! let board = Board::new();
//! assert_eq!(board.pieces_of(Color::Red).len(), 12);
//! assert!(board.winner().is_none());
//! ```

mod error;
mod eval;
mod movegen;
mod search;
mod state;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use error::{ParseHeuristicError, ParseStrategyError};
pub use eval::Heuristic;
pub use movegen::MoveMap;
pub use state::Board;
pub use types::{Color, Piece, Square, COLS, ROWS};

// Public API - search strategies
pub use search::{
    alpha_beta_negamax, avgmax, minimax, random_move, select_move, successors, Strategy,
};
