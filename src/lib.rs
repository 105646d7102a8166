pub mod board;
pub mod game;

pub use board::{Board, Color, Heuristic, MoveMap, Piece, Square};
pub use game::Game;
