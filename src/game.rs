//! Turn-keeping driver.
//!
//! [`Game`] owns the live board and the side to move; [`run_match`] plays
//! two configured strategies against each other until one side runs out of
//! pieces or moves, or the ply cap is reached.

use log::{debug, info};
use rand::Rng;

use crate::board::{
    select_move, Board, Color, Heuristic, MoveMap, Piece, Square, Strategy,
};

/// Live game state. Red moves first.
pub struct Game {
    board: Board,
    turn: Color,
}

impl Game {
    #[must_use]
    pub fn new() -> Self {
        Game {
            board: Board::new(),
            turn: Color::Red,
        }
    }

    /// The live board
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Side to move
    #[must_use]
    pub fn turn(&self) -> Color {
        self.turn
    }

    #[must_use]
    pub fn winner(&self) -> Option<Color> {
        self.board.winner()
    }

    /// Legal destinations for a selected piece, for rendering and for
    /// choosing the skip-sequence to pass to [`Game::play`]
    #[must_use]
    pub fn valid_moves(&self, piece: Piece) -> MoveMap {
        self.board.valid_moves(piece)
    }

    /// Apply a chosen move with the skip-sequence reported by
    /// [`Game::valid_moves`] for that destination, then pass the turn.
    pub fn play(&mut self, from: Square, to: Square, skips: &[Piece]) {
        self.board.apply_move(from, to);
        self.board.remove(skips);
        self.next_turn();
    }

    /// Replace the live board with a search result and pass the turn.
    pub fn ai_move(&mut self, board: Board) {
        self.board = board;
        self.next_turn();
    }

    fn next_turn(&mut self) {
        self.turn = self.turn.opponent();
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}

/// Settings for a self-play match.
#[derive(Clone, Copy, Debug)]
pub struct MatchConfig {
    /// Strategy playing White
    pub white: Strategy,
    /// Strategy playing Red
    pub red: Strategy,
    /// Heuristic for the strategies that take one
    pub heuristic: Heuristic,
    /// Search depth in plies
    pub depth: u32,
    /// Abort threshold for games that never resolve
    pub max_plies: u32,
}

impl Default for MatchConfig {
    fn default() -> Self {
        MatchConfig {
            white: Strategy::Standard,
            red: Strategy::Random,
            heuristic: Heuristic::Standard,
            depth: 4,
            max_plies: 200,
        }
    }
}

/// Play a full match and return the winner, or `None` if the ply cap was
/// reached first. A side with pieces but no legal move forfeits.
pub fn run_match<R: Rng>(config: &MatchConfig, rng: &mut R) -> Option<Color> {
    let mut game = Game::new();

    for ply in 0..config.max_plies {
        if let Some(winner) = game.winner() {
            info!("{winner} wins after {ply} plies");
            return Some(winner);
        }

        let side = game.turn();
        let strategy = if side == Color::White {
            config.white
        } else {
            config.red
        };

        let Some(next) = select_move(
            game.board(),
            side,
            strategy,
            config.depth,
            config.heuristic,
            rng,
        ) else {
            let winner = side.opponent();
            info!("{side} has no legal move, {winner} wins after {ply} plies");
            return Some(winner);
        };

        debug!("ply {ply}: {side} ({strategy}) plays\n{next}");
        game.ai_move(next);
    }

    info!("no result after {} plies", config.max_plies);
    game.winner()
}
