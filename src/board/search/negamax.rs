//! Alpha-beta negamax.

use crate::board::{Board, Color, Heuristic};

use super::successors;

/// Alpha-beta negamax played from White's point of view.
///
/// Two idiosyncrasies are deliberate and must not be "corrected" to the
/// textbook algorithm, because search output depends on them:
///
/// - every ply expands White's candidate moves, so Red's actual replies are
///   never simulated, and
/// - the recursive window is `(-beta, -max(alpha, best))` instead of the
///   conventional `(-beta, -alpha)` swap.
///
/// The move loop is cut off once the running best reaches `beta`.
#[must_use]
pub fn alpha_beta_negamax(
    board: &Board,
    depth: u32,
    alpha: f64,
    beta: f64,
    heuristic: Heuristic,
) -> (f64, Option<Board>) {
    if depth == 0 || board.winner().is_some() {
        return (board.evaluate(heuristic), Some(board.clone()));
    }

    let mut best_score = f64::NEG_INFINITY;
    let mut best_move = None;

    for candidate in successors(board, Color::White) {
        let (score, _) = alpha_beta_negamax(
            &candidate,
            depth - 1,
            -beta,
            -(alpha.max(best_score)),
            heuristic,
        );
        let current = -score;

        if current > best_score {
            best_score = current;
            best_move = Some(candidate);

            if best_score >= beta {
                break;
            }
        }
    }

    (best_score, best_move)
}
