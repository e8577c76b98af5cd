use chess_core::{Board, Color, PieceKind, SIZE};

pub fn piece_value(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Pawn => 10,
        PieceKind::Knight => 30,
        PieceKind::Bishop => 30,
        PieceKind::Rook => 50,
        PieceKind::Queen => 90,
        PieceKind::King => 900,
    }
}

/// Static material evaluation, White-positive.
pub fn evaluate(board: &Board) -> i32 {
    let mut score = 0;
    for row in 0..SIZE {
        for col in 0..SIZE {
            if let Some(piece) = board.piece_at(row, col) {
                let value = piece_value(piece.kind);
                score += match piece.color {
                    Color::White => value,
                    Color::Black => -value,
                };
            }
        }
    }
    score
}
