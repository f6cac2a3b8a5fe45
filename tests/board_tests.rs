//! Board tests - occupancy, placement and line clearing

use tetromino::core::{Board, Piece};
use tetromino::types::{Color, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert_eq!(board.width(), BOARD_WIDTH);
    assert_eq!(board.height(), BOARD_HEIGHT);

    for y in 0..BOARD_HEIGHT as i8 {
        for x in 0..BOARD_WIDTH as i8 {
            assert!(!board.is_occupied(x, y), "Cell ({}, {}) should be empty", x, y);
            assert_eq!(board.get(x, y), Some(None));
        }
    }
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::new();

    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(BOARD_WIDTH as i8, 0), None);
    assert_eq!(board.get(0, BOARD_HEIGHT as i8), None);
}

#[test]
fn test_board_set_and_get() {
    let mut board = Board::new();

    assert!(board.set(5, 10, Some(Color::Gray)));
    assert_eq!(board.get(5, 10), Some(Some(Color::Gray)));

    assert!(board.set(5, 10, None));
    assert_eq!(board.get(5, 10), Some(None));

    assert!(!board.set(-1, 0, Some(Color::Gray)));
    assert!(!board.set(0, BOARD_HEIGHT as i8, Some(Color::Gray)));
}

#[test]
fn test_board_is_occupied_treats_outside_as_blocked() {
    let mut board = Board::new();

    assert!(!board.is_occupied(5, 10));
    board.set(5, 10, Some(Color::Red));
    assert!(board.is_occupied(5, 10));

    assert!(board.is_occupied(-1, 0));
    assert!(board.is_occupied(BOARD_WIDTH as i8, 0));
    assert!(board.is_occupied(0, BOARD_HEIGHT as i8));
}

#[test]
fn test_board_is_row_full() {
    let mut board = Board::new();
    assert!(!board.is_row_full(5));

    board.fill_row(5, Color::Blue);
    assert!(board.is_row_full(5));

    for x in 0..BOARD_WIDTH - 1 {
        board.set(x as i8, 6, Some(Color::Green));
    }
    assert!(!board.is_row_full(6));
    assert!(!board.is_row_full(BOARD_HEIGHT as usize));
}

#[test]
fn test_board_clear_row() {
    let mut board = Board::new();
    board.fill_row(5, Color::Gray);
    board.set(0, 3, Some(Color::Purple));
    board.set(1, 4, Some(Color::Orange));

    board.clear_row(5);

    // Everything above shifted down by one
    assert_eq!(board.get(1, 5), Some(Some(Color::Orange)));
    assert_eq!(board.get(0, 4), Some(Some(Color::Purple)));
    assert_eq!(board.get(0, 3), Some(None));
}

#[test]
fn test_clear_single_bottom_row() {
    let mut board = Board::new();

    // Arbitrary content above a full bottom row
    board.fill_row(19, Color::Blue);
    for x in [0, 2, 3, 7] {
        board.set(x, 18, Some(Color::Red));
    }
    board.set(4, 10, Some(Color::Yellow));
    board.set(9, 0, Some(Color::Green));
    let row_above: Vec<_> = board.row(18).to_vec();

    assert_eq!(board.clear_completed_lines(), 1);
    assert_eq!(board.row(19), row_above.as_slice());
    assert!(board.row(0).iter().all(|cell| cell.is_none()));
    assert_eq!(board.get(9, 1), Some(Some(Color::Green)));
    assert_eq!(board.get(4, 11), Some(Some(Color::Yellow)));
}

#[test]
fn test_clear_non_adjacent_rows() {
    let mut board = Board::new();
    board.fill_row(19, Color::Blue);
    board.fill_row(17, Color::Blue);
    board.set(0, 18, Some(Color::Red));
    board.set(1, 16, Some(Color::Gray));

    assert_eq!(board.clear_completed_lines(), 2);
    assert_eq!(board.get(0, 19), Some(Some(Color::Red)));
    assert_eq!(board.get(1, 18), Some(Some(Color::Gray)));
    assert_eq!(board.filled_count(), 2);
}

#[test]
fn test_clear_four_stacked_rows() {
    let mut board = Board::new();
    for y in 16..20 {
        board.fill_row(y, Color::Purple);
    }
    board.set(3, 15, Some(Color::Red));

    assert_eq!(board.clear_completed_lines(), 4);
    assert_eq!(board.get(3, 19), Some(Some(Color::Red)));
    assert_eq!(board.filled_count(), 1);
}

#[test]
fn test_clear_nothing_when_no_full_rows() {
    let mut board = Board::new();
    board.set(0, 19, Some(Color::Red));
    let before = board.clone();

    assert_eq!(board.clear_completed_lines(), 0);
    assert_eq!(board, before);
}

#[test]
fn test_place_writes_piece_color() {
    let mut board = Board::new();
    let piece = Piece::new(PieceKind::T, 0, 3, 10);
    board.place(&piece);

    // T rotation 0: one cell in template row 1, three in row 2
    assert_eq!(board.get(5, 11), Some(Some(Color::Gray)));
    assert_eq!(board.get(4, 12), Some(Some(Color::Gray)));
    assert_eq!(board.get(5, 12), Some(Some(Color::Gray)));
    assert_eq!(board.get(6, 12), Some(Some(Color::Gray)));
    assert_eq!(board.filled_count(), 4);
}

#[test]
fn test_place_partially_above_board() {
    let mut board = Board::new();
    let piece = Piece::new(PieceKind::S, 1, 0, -3);
    board.place(&piece);

    // S rotation 1 spans template rows 1-3; only row 3 is on the board.
    assert_eq!(board.filled_count(), 1);
    assert_eq!(board.get(3, 0), Some(Some(Color::Red)));
}

#[test]
fn test_board_clear() {
    let mut board = Board::new();
    board.fill_row(19, Color::Blue);
    board.clear();
    assert_eq!(board, Board::default());
}
