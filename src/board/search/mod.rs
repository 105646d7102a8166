//! Adversarial search strategies.
//!
//! This module implements:
//! - Full-width minimax
//! - Alpha-beta negamax (single-perspective, see [`alpha_beta_negamax`])
//! - Average-max, which plays toward the mean reply instead of the worst
//! - Uniform random move selection
//!
//! Every strategy consumes a board snapshot and returns a successor board
//! rather than a move delta; the driver replaces its live board with the
//! result. Successors are built on independent deep copies, so sibling
//! branches never alias.

mod avgmax;
mod minimax;
mod negamax;

use std::fmt;
use std::str::FromStr;

use log::{debug, warn};
use rand::seq::SliceRandom;
use rand::Rng;

pub use avgmax::avgmax;
pub use minimax::minimax;
pub use negamax::alpha_beta_negamax;

use super::error::ParseStrategyError;
use super::eval::Heuristic;
use super::state::Board;
use super::types::Color;

/// Every successor board reachable by the given color in one move.
///
/// Candidates are ordered by piece scan (row-major) and then by destination
/// (row-major within each piece's move map), which fixes search tie-breaking.
#[must_use]
pub fn successors(board: &Board, color: Color) -> Vec<Board> {
    let mut boards = Vec::new();
    for piece in board.pieces_of(color) {
        for (destination, skips) in board.valid_moves(piece) {
            let mut next = board.clone();
            next.apply_move(piece.square(), destination);
            next.remove(&skips);
            boards.push(next);
        }
    }
    boards
}

/// Uniform-random choice among the legal successors, ignoring evaluation
#[must_use]
pub fn random_move<R: Rng>(board: &Board, color: Color, rng: &mut R) -> Option<Board> {
    successors(board, color).choose(rng).cloned()
}

/// Strategy table from the driver: which algorithm and heuristic each
/// selectable AI maps to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    /// Minimax over the `standard` heuristic
    Standard,
    /// Minimax over the `combined` heuristic
    Custom,
    /// Average-max over the configured heuristic
    AvgMax,
    /// Alpha-beta negamax over the configured heuristic. The algorithm only
    /// ever expands White's candidates (see [`alpha_beta_negamax`]), so a Red
    /// driver using it adopts a board where White moved.
    Negamax,
    /// Uniform random
    Random,
}

impl FromStr for Strategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "standard" => Ok(Strategy::Standard),
            "custom" => Ok(Strategy::Custom),
            "avgmax" => Ok(Strategy::AvgMax),
            "negamax" => Ok(Strategy::Negamax),
            "random" => Ok(Strategy::Random),
            _ => Err(ParseStrategyError {
                name: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Standard => write!(f, "standard"),
            Strategy::Custom => write!(f, "custom"),
            Strategy::AvgMax => write!(f, "avgmax"),
            Strategy::Negamax => write!(f, "negamax"),
            Strategy::Random => write!(f, "random"),
        }
    }
}

/// Pick a successor board for `color` with the given strategy.
///
/// Returns `None` only when `color` has no legal move. `Standard` and
/// `Custom` carry their own heuristic; the others use `heuristic`.
pub fn select_move<R: Rng>(
    board: &Board,
    color: Color,
    strategy: Strategy,
    depth: u32,
    heuristic: Heuristic,
    rng: &mut R,
) -> Option<Board> {
    let max_player = color == Color::White;
    let (score, best) = match strategy {
        Strategy::Standard => minimax(board, depth, max_player, Heuristic::Standard),
        Strategy::Custom => minimax(board, depth, max_player, Heuristic::Combined),
        Strategy::AvgMax => {
            let (score, best, _) = avgmax(board, depth, max_player, heuristic, rng);
            (score, best)
        }
        Strategy::Negamax => {
            if color == Color::Red {
                warn!("negamax always expands White's moves, {color} adopts a White move");
            }
            alpha_beta_negamax(board, depth, f64::NEG_INFINITY, f64::INFINITY, heuristic)
        }
        Strategy::Random => return random_move(board, color, rng),
    };
    debug!("{strategy} picked a move for {color} scoring {score:.3}");
    best
}
