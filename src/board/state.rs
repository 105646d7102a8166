//! Board state: setup, mutation, and win detection.

use std::fmt;

use super::types::{Color, Piece, Square, COLS, ROWS};

/// A full checkers position.
///
/// The grid owns its pieces by value, so `Clone` is a deep copy and search
/// can branch on independent copies without aliasing. The piece and king
/// counters are kept in step with the grid by every mutation.
#[derive(Clone, Debug, PartialEq)]
pub struct Board {
    grid: [[Option<Piece>; COLS]; ROWS],
    red_left: u32,
    white_left: u32,
    red_kings: u32,
    white_kings: u32,
}

impl Board {
    /// Starting position: 12 pieces per side on the dark squares, White on
    /// rows 0-2, Red on rows 5-7.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        for row in 0..ROWS {
            for col in 0..COLS {
                let square = Square(row, col);
                if !square.is_dark() {
                    continue;
                }
                if row < 3 {
                    board.place(square, Color::White, false);
                } else if row > 4 {
                    board.place(square, Color::Red, false);
                }
            }
        }
        board
    }

    /// Board with no pieces on it, for setting up positions piece by piece.
    #[must_use]
    pub fn empty() -> Self {
        Board {
            grid: [[None; COLS]; ROWS],
            red_left: 0,
            white_left: 0,
            red_kings: 0,
            white_kings: 0,
        }
    }

    /// Put a new piece on an empty square, updating the counters.
    pub fn place(&mut self, square: Square, color: Color, king: bool) {
        debug_assert!(
            self.grid[square.row()][square.col()].is_none(),
            "square {square} already occupied"
        );
        let mut piece = Piece::new(square, color);
        if king {
            piece.crown();
        }
        self.grid[square.row()][square.col()] = Some(piece);
        match color {
            Color::Red => {
                self.red_left += 1;
                if king {
                    self.red_kings += 1;
                }
            }
            Color::White => {
                self.white_left += 1;
                if king {
                    self.white_kings += 1;
                }
            }
        }
    }

    /// Piece on the given square, if any
    #[inline]
    #[must_use]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.grid[square.row()][square.col()]
    }

    /// Live pieces of one color, in row-major scan order. Search candidate
    /// ordering follows this scan.
    #[must_use]
    pub fn pieces_of(&self, color: Color) -> Vec<Piece> {
        let mut pieces = Vec::new();
        for row in &self.grid {
            for cell in row.iter().flatten() {
                if cell.color() == color {
                    pieces.push(*cell);
                }
            }
        }
        pieces
    }

    /// Relocate the piece on `from` to the empty square `to`, crowning it
    /// if it reaches its color's promotion row. Crowning bumps the matching
    /// king counter exactly once; a king revisiting the back row does not
    /// count again.
    ///
    /// The caller guarantees `to` is a destination reported by
    /// [`valid_moves`](Board::valid_moves); no validation is performed here.
    pub fn apply_move(&mut self, from: Square, to: Square) {
        debug_assert!(
            self.grid[to.row()][to.col()].is_none(),
            "destination {to} occupied"
        );
        let Some(mut piece) = self.grid[from.row()][from.col()].take() else {
            debug_assert!(false, "no piece on {from}");
            return;
        };
        piece.advance(to);
        if to.row() == piece.color().promotion_row() && !piece.is_king() {
            piece.crown();
            match piece.color() {
                Color::Red => self.red_kings += 1,
                Color::White => self.white_kings += 1,
            }
        }
        self.grid[to.row()][to.col()] = Some(piece);
    }

    /// Take captured pieces off the board. Must be called with the exact
    /// skip-sequence reported by [`valid_moves`](Board::valid_moves) for the
    /// chosen destination.
    pub fn remove(&mut self, pieces: &[Piece]) {
        for piece in pieces {
            let square = piece.square();
            self.grid[square.row()][square.col()] = None;
            match piece.color() {
                Color::Red => {
                    self.red_left = self.red_left.saturating_sub(1);
                    if piece.is_king() {
                        self.red_kings = self.red_kings.saturating_sub(1);
                    }
                }
                Color::White => {
                    self.white_left = self.white_left.saturating_sub(1);
                    if piece.is_king() {
                        self.white_kings = self.white_kings.saturating_sub(1);
                    }
                }
            }
        }
    }

    /// Side that has captured every opposing piece, if any. Red exhaustion
    /// is checked first, so a double exhaustion counts for White.
    #[must_use]
    pub const fn winner(&self) -> Option<Color> {
        if self.red_left == 0 {
            Some(Color::White)
        } else if self.white_left == 0 {
            Some(Color::Red)
        } else {
            None
        }
    }

    /// Red pieces still on the board
    #[inline]
    #[must_use]
    pub const fn red_left(&self) -> u32 {
        self.red_left
    }

    /// White pieces still on the board
    #[inline]
    #[must_use]
    pub const fn white_left(&self) -> u32 {
        self.white_left
    }

    /// Red kings still on the board
    #[inline]
    #[must_use]
    pub const fn red_kings(&self) -> u32 {
        self.red_kings
    }

    /// White kings still on the board
    #[inline]
    #[must_use]
    pub const fn white_kings(&self) -> u32 {
        self.white_kings
    }

    /// Recount pieces and kings from the grid, as
    /// (red, white, `red_kings`, `white_kings`). Test support for checking
    /// the counter invariant.
    #[cfg(test)]
    pub(crate) fn census(&self) -> (u32, u32, u32, u32) {
        let mut counts = (0, 0, 0, 0);
        for row in &self.grid {
            for piece in row.iter().flatten() {
                match piece.color() {
                    Color::Red => {
                        counts.0 += 1;
                        if piece.is_king() {
                            counts.2 += 1;
                        }
                    }
                    Color::White => {
                        counts.1 += 1;
                        if piece.is_king() {
                            counts.3 += 1;
                        }
                    }
                }
            }
        }
        counts
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.grid {
            for (col, cell) in row.iter().enumerate() {
                if col > 0 {
                    write!(f, " ")?;
                }
                match cell {
                    Some(piece) => write!(f, "{}", piece.symbol())?,
                    None => write!(f, ".")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
