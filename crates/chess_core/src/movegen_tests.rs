use super::*;
use crate::types::{Piece, PieceKind};

#[test]
fn test_startpos_pseudo_moves() {
    let mut board = Board::new();
    board.setup_standard_position();
    // 16 pawn moves + 4 knight moves per side
    assert_eq!(generate_all_moves(&board, Color::White).len(), 20);
    assert_eq!(generate_all_moves(&board, Color::Black).len(), 20);
}

#[test]
fn test_empty_board_has_no_moves() {
    let board = Board::new();
    assert!(generate_all_moves(&board, Color::White).is_empty());
}

#[test]
fn test_scan_order_is_stable() {
    let mut board = Board::new();
    board.place(0, 0, Some(Piece::new(Color::White, PieceKind::Knight)));
    board.place(4, 4, Some(Piece::new(Color::White, PieceKind::Knight)));

    let first = generate_all_moves(&board, Color::White);
    let second = generate_all_moves(&board, Color::White);
    assert_eq!(first, second);
    // Row-major scan: the corner knight's moves come first.
    assert_eq!(first[0].from_row, 0);
    assert_eq!(first[0].from_col, 0);
}

#[test]
fn test_only_requested_color_moves() {
    let mut board = Board::new();
    board.place(3, 3, Some(Piece::new(Color::White, PieceKind::Rook)));
    board.place(5, 5, Some(Piece::new(Color::Black, PieceKind::Rook)));

    let white = generate_all_moves(&board, Color::White);
    assert!(white.iter().all(|m| m.from_row == 3 && m.from_col == 3));
}
