//! Unit tests for board state, move generation, evaluation, and search.

mod search;

use crate::board::{Board, Color, Square};

#[test]
fn initial_setup_places_twelve_per_side() {
    let board = Board::new();
    assert_eq!(board.red_left(), 12);
    assert_eq!(board.white_left(), 12);
    assert_eq!(board.red_kings(), 0);
    assert_eq!(board.white_kings(), 0);
    assert_eq!(board.census(), (12, 12, 0, 0));
}

#[test]
fn initial_setup_uses_dark_squares_only() {
    let board = Board::new();
    for color in [Color::Red, Color::White] {
        for piece in board.pieces_of(color) {
            assert!(piece.square().is_dark(), "{} is not dark", piece.square());
        }
    }
    assert!(board.piece_at(Square(0, 1)).is_some());
    assert_eq!(board.piece_at(Square(0, 1)).unwrap().color(), Color::White);
    assert_eq!(board.piece_at(Square(5, 0)).unwrap().color(), Color::Red);
    // middle rows start empty
    for col in 0..8 {
        assert!(board.piece_at(Square(3, col)).is_none());
        assert!(board.piece_at(Square(4, col)).is_none());
    }
}

#[test]
fn quiet_move_relocates_the_piece() {
    let mut board = Board::new();
    board.apply_move(Square(5, 0), Square(4, 1));
    assert!(board.piece_at(Square(5, 0)).is_none());
    let piece = board.piece_at(Square(4, 1)).expect("moved piece");
    assert_eq!(piece.square(), Square(4, 1));
    assert_eq!(board.red_left(), 12);
}

#[test]
fn reaching_the_back_row_crowns_once() {
    let mut board = Board::empty();
    board.place(Square(1, 2), Color::Red, false);
    board.apply_move(Square(1, 2), Square(0, 3));
    assert!(board.piece_at(Square(0, 3)).unwrap().is_king());
    assert_eq!(board.red_kings(), 1);

    // a king revisiting the back row is not counted again
    board.apply_move(Square(0, 3), Square(1, 4));
    board.apply_move(Square(1, 4), Square(0, 5));
    assert_eq!(board.red_kings(), 1);
}

#[test]
fn white_promotes_on_row_seven() {
    let mut board = Board::empty();
    board.place(Square(6, 1), Color::White, false);
    board.apply_move(Square(6, 1), Square(7, 0));
    assert!(board.piece_at(Square(7, 0)).unwrap().is_king());
    assert_eq!(board.white_kings(), 1);
}

#[test]
fn remove_updates_counts_and_king_counts() {
    let mut board = Board::empty();
    board.place(Square(4, 3), Color::White, true);
    board.place(Square(5, 0), Color::Red, false);

    let king = board.piece_at(Square(4, 3)).unwrap();
    board.remove(&[king]);
    assert!(board.piece_at(Square(4, 3)).is_none());
    assert_eq!(board.white_left(), 0);
    assert_eq!(board.white_kings(), 0);
    assert_eq!(board.red_left(), 1);
}

#[test]
fn winner_checks_red_exhaustion_first() {
    assert_eq!(Board::empty().winner(), Some(Color::White));

    let mut red_only = Board::empty();
    red_only.place(Square(5, 0), Color::Red, false);
    assert_eq!(red_only.winner(), Some(Color::Red));

    let mut white_only = Board::empty();
    white_only.place(Square(0, 1), Color::White, false);
    assert_eq!(white_only.winner(), Some(Color::White));

    assert_eq!(Board::new().winner(), None);
}

#[test]
fn mutating_a_clone_leaves_the_original_untouched() {
    let original = Board::new();
    let mut copy = original.clone();

    copy.apply_move(Square(5, 0), Square(4, 1));
    let victim = copy.piece_at(Square(4, 1)).unwrap();
    copy.remove(&[victim]);

    assert_eq!(original, Board::new());
    assert!(original.piece_at(Square(5, 0)).is_some());
    assert_eq!(original.red_left(), 12);
    assert_eq!(copy.red_left(), 11);
}

#[test]
fn display_renders_eight_rows() {
    let rendered = Board::new().to_string();
    assert_eq!(rendered.lines().count(), 8);
    assert!(rendered.contains('w'));
    assert!(rendered.contains('r'));
}
