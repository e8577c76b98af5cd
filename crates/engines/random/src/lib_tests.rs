use super::*;
use chess_core::{Board, Color, Piece, PieceKind};

#[test]
fn random_engine_returns_legal_move() {
    let mut engine = RandomBot::new();
    let game = Game::new();

    let result = engine.choose_move(&game);

    let best = result.best_move.expect("startpos has legal moves");
    assert!(game.legal_moves().contains(&best));
}

#[test]
fn random_engine_handles_checkmate() {
    // Fool's mate: White to move with no legal moves.
    let mut game = Game::new();
    for (from, to) in [((6, 5), (5, 5)), ((1, 4), (3, 4)), ((6, 6), (4, 6)), ((0, 3), (4, 7))] {
        game.apply_move(chess_core::Move::new(
            from.0,
            from.1,
            to.0,
            to.1,
            chess_core::MoveType::Normal,
        ))
        .unwrap();
    }
    assert!(game.is_checkmate(Color::White));

    let mut engine = RandomBot::new();
    let result = engine.choose_move(&game);
    assert!(result.best_move.is_none());
}

#[test]
fn random_engine_handles_stalemate() {
    let mut board = Board::new();
    board.place(0, 0, Some(Piece::new(Color::Black, PieceKind::King)));
    board.place(1, 2, Some(Piece::new(Color::White, PieceKind::Queen)));
    board.place(2, 1, Some(Piece::new(Color::White, PieceKind::King)));
    let game = Game::from_board(board, Color::Black);

    let mut engine = RandomBot::new();
    let result = engine.choose_move(&game);
    assert!(result.best_move.is_none());
}
