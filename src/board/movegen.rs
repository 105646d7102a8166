//! Capture-chain move enumeration.
//!
//! Destinations are discovered by walking each diagonal away from the piece
//! inside a three-row window. A jump over an enemy piece re-opens the window
//! from the landing square and recurses down both sub-diagonals, so chained
//! captures of any length are found in one enumeration pass. Each walk is a
//! pure function returning its own map; parent calls merge child maps by
//! destination key instead of sharing a mutable accumulator.

use std::collections::BTreeMap;

use super::state::Board;
use super::types::{Color, Piece, Square, COLS, ROWS};

/// Destination square mapped to the skip-sequence needed to reach it: the
/// captured pieces in the order they are jumped, newest first. An empty
/// sequence is a quiet move.
///
/// A `BTreeMap` keyed by [`Square`] iterates row-major, so callers that walk
/// the map (search candidate generation in particular) see a deterministic
/// order.
pub type MoveMap = BTreeMap<Square, Vec<Piece>>;

impl Board {
    /// All legal destinations for one piece, with their skip-sequences.
    ///
    /// Men scan only their forward diagonals (Red toward row 0, White toward
    /// row 7); kings scan both directions. Capture priority is per
    /// sub-diagonal, not global: a quiet move on one diagonal is still
    /// offered when the other diagonal holds a capture.
    #[must_use]
    pub fn valid_moves(&self, piece: Piece) -> MoveMap {
        let mut moves = MoveMap::new();
        let row = piece.square().row() as isize;
        let col = piece.square().col() as isize;
        let color = piece.color();

        if color == Color::Red || piece.is_king() {
            let stop = (row - 3).max(-1);
            moves.extend(self.walk(row - 1, stop, -1, color, col - 1, -1, &[]));
            moves.extend(self.walk(row - 1, stop, -1, color, col + 1, 1, &[]));
        }
        if color == Color::White || piece.is_king() {
            let stop = (row + 3).min(ROWS as isize);
            moves.extend(self.walk(row + 1, stop, 1, color, col - 1, -1, &[]));
            moves.extend(self.walk(row + 1, stop, 1, color, col + 1, 1, &[]));
        }

        moves
    }

    /// Walk one sub-diagonal from `start` until `stop` (exclusive), stepping
    /// `row_step` rows and `col_step` columns per cell.
    ///
    /// `skipped` carries the captures accumulated earlier on this path; when
    /// it is non-empty the walk is mid-chain and an empty landing without a
    /// fresh capture terminates the path unrecorded. A fresh capture recurses
    /// from the landing square down both sub-diagonals with the window
    /// extended three rows in the direction of travel.
    #[allow(clippy::too_many_arguments)]
    fn walk(
        &self,
        start: isize,
        stop: isize,
        row_step: isize,
        color: Color,
        start_col: isize,
        col_step: isize,
        skipped: &[Piece],
    ) -> MoveMap {
        let mut moves = MoveMap::new();
        let mut jumped: Option<Piece> = None;
        let mut col = start_col;
        let mut row = start;

        // The window is exclusive of `stop` and may be empty, e.g. when a
        // capture lands on the back row.
        while (row_step > 0 && row < stop) || (row_step < 0 && row > stop) {
            if col < 0 || col >= COLS as isize {
                break;
            }
            let square = Square(row as usize, col as usize);

            match self.piece_at(square) {
                None => {
                    match jumped {
                        // Mid-chain landing with no new capture: the chain
                        // either continued elsewhere or ends, nothing to
                        // record here.
                        None if !skipped.is_empty() => {}
                        // Quiet move, one step only.
                        None => {
                            moves.insert(square, Vec::new());
                        }
                        Some(piece) => {
                            let mut captured = Vec::with_capacity(skipped.len() + 1);
                            captured.push(piece);
                            captured.extend_from_slice(skipped);

                            let next_stop = if row_step == -1 {
                                (row - 3).max(0)
                            } else {
                                (row + 3).min(ROWS as isize)
                            };
                            let left =
                                self.walk(row + row_step, next_stop, row_step, color, col - 1, -1, &captured);
                            let right =
                                self.walk(row + row_step, next_stop, row_step, color, col + 1, 1, &captured);

                            moves.insert(square, captured);
                            moves.extend(left);
                            moves.extend(right);
                        }
                    }
                    break;
                }
                Some(piece) if piece.color() == color => break,
                Some(piece) => jumped = Some(piece),
            }

            row += row_step;
            col += col_step;
        }

        moves
    }
}
