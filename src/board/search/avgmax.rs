//! Average-max search.

use rand::Rng;

use crate::board::{Board, Color, Heuristic};

use super::successors;

/// Minimax variant that treats the opponent as average rather than optimal.
///
/// Maximizing plies behave exactly as minimax. A minimizing ply scores as
/// the arithmetic mean of all its children and picks, as its move, the child
/// whose own score sits closest to that mean; a tie on distance is broken by
/// a coin flip between the incumbent and the new candidate. The child score
/// list of the node is returned alongside for analysis (empty at maximizing
/// and terminal nodes).
#[allow(clippy::float_cmp, clippy::cast_precision_loss)]
#[must_use]
pub fn avgmax<R: Rng>(
    board: &Board,
    depth: u32,
    max_player: bool,
    heuristic: Heuristic,
    rng: &mut R,
) -> (f64, Option<Board>, Vec<f64>) {
    if depth == 0 || board.winner().is_some() {
        return (board.evaluate(heuristic), Some(board.clone()), Vec::new());
    }

    if max_player {
        let mut best_score = f64::NEG_INFINITY;
        let mut best_move = None;
        for candidate in successors(board, Color::White) {
            let (score, _, _) = avgmax(&candidate, depth - 1, false, heuristic, rng);
            best_score = best_score.max(score);
            if best_score == score {
                best_move = Some(candidate);
            }
        }
        (best_score, best_move, Vec::new())
    } else {
        let candidates = successors(board, Color::Red);
        if candidates.is_empty() {
            return (f64::INFINITY, None, Vec::new());
        }

        let scores: Vec<f64> = candidates
            .iter()
            .map(|candidate| avgmax(candidate, depth - 1, true, heuristic, rng).0)
            .collect();
        let average = scores.iter().sum::<f64>() / scores.len() as f64;

        let mut best_move: Option<&Board> = None;
        let mut best_distance = f64::INFINITY;
        for (candidate, &score) in candidates.iter().zip(&scores) {
            let distance = (score - average).abs();
            if distance < best_distance {
                best_distance = distance;
                best_move = Some(candidate);
            } else if distance == best_distance && rng.gen_bool(0.5) {
                best_move = Some(candidate);
            }
        }

        (average, best_move.cloned(), scores)
    }
}
