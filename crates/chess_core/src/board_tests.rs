use super::*;

#[test]
fn test_standard_setup_placement() {
    let mut board = Board::new();
    board.setup_standard_position();

    for col in 0..SIZE {
        let white_pawn = board.piece_at(6, col).unwrap();
        assert_eq!(white_pawn.color, Color::White);
        assert_eq!(white_pawn.kind, PieceKind::Pawn);
        let black_pawn = board.piece_at(1, col).unwrap();
        assert_eq!(black_pawn.color, Color::Black);
        assert_eq!(black_pawn.kind, PieceKind::Pawn);
    }

    assert_eq!(board.piece_at(7, 4).unwrap().kind, PieceKind::King);
    assert_eq!(board.piece_at(0, 4).unwrap().kind, PieceKind::King);
    assert_eq!(board.piece_at(7, 3).unwrap().kind, PieceKind::Queen);
    assert_eq!(board.piece_at(0, 0).unwrap().kind, PieceKind::Rook);
    assert!(board.piece_at(4, 4).is_none());
    assert!(board.en_passant_target().is_none());
}

#[test]
fn test_standard_setup_is_idempotent() {
    let mut board = Board::new();
    board.setup_standard_position();
    board.place(4, 4, Some(Piece::new(Color::White, PieceKind::Queen)));
    board.set_en_passant_target(2, 3);

    board.setup_standard_position();
    let mut reference = Board::new();
    reference.setup_standard_position();
    assert_eq!(board, reference);
}

#[test]
fn test_en_passant_target_roundtrip() {
    let mut board = Board::new();
    assert!(board.en_passant_target().is_none());
    board.set_en_passant_target(2, 5);
    assert_eq!(board.en_passant_target(), Some((2, 5)));
    board.clear_en_passant_target();
    assert!(board.en_passant_target().is_none());
}

#[test]
fn test_clone_is_independent() {
    let mut board = Board::new();
    board.setup_standard_position();

    let mut copy = board.clone();
    copy.place(6, 0, None);
    copy.place(5, 0, Some(Piece::new(Color::White, PieceKind::Pawn)));
    copy.set_en_passant_target(3, 3);

    // The original never sees mutations made through the clone.
    assert!(board.piece_at(6, 0).is_some());
    assert!(board.piece_at(5, 0).is_none());
    assert!(board.en_passant_target().is_none());
}

#[test]
fn test_clone_does_not_share_has_moved() {
    let mut board = Board::new();
    board.place(7, 4, Some(Piece::new(Color::White, PieceKind::King)));

    let mut copy = board.clone();
    let mut king = copy.piece_at(7, 4).unwrap();
    king.has_moved = true;
    copy.place(7, 4, Some(king));

    assert!(!board.piece_at(7, 4).unwrap().has_moved);
}
