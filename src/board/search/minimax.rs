//! Classic full-width minimax.

use crate::board::{Board, Color, Heuristic};

use super::successors;

/// Minimax to a fixed ply depth, White maximizing and Red minimizing.
///
/// Terminal nodes (`depth == 0` or a decided game) return the position's own
/// evaluation and a copy of the position. Internal nodes return the best
/// reachable score and the successor achieving it; a later candidate that
/// ties the running best replaces the incumbent. The successor is `None`
/// only when the side to move has no legal reply.
#[allow(clippy::float_cmp)]
#[must_use]
pub fn minimax(
    board: &Board,
    depth: u32,
    max_player: bool,
    heuristic: Heuristic,
) -> (f64, Option<Board>) {
    if depth == 0 || board.winner().is_some() {
        return (board.evaluate(heuristic), Some(board.clone()));
    }

    if max_player {
        let mut best_score = f64::NEG_INFINITY;
        let mut best_move = None;
        for candidate in successors(board, Color::White) {
            let (score, _) = minimax(&candidate, depth - 1, false, heuristic);
            best_score = best_score.max(score);
            if best_score == score {
                best_move = Some(candidate);
            }
        }
        (best_score, best_move)
    } else {
        let mut best_score = f64::INFINITY;
        let mut best_move = None;
        for candidate in successors(board, Color::Red) {
            let (score, _) = minimax(&candidate, depth - 1, true, heuristic);
            best_score = best_score.min(score);
            if best_score == score {
                best_move = Some(candidate);
            }
        }
        (best_score, best_move)
    }
}
