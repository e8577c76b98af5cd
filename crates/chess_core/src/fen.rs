use crate::board::{Board, SIZE};
use crate::types::{Color, PieceKind};

/// Serialize the position for external consumers: FEN piece placement
/// (row 0 first, run-length encoded empties, uppercase White letters)
/// followed by the active color. Castling rights, en passant, and move
/// clocks are not tracked by this encoding and are emitted as literal
/// placeholders. Emit-only; the engine never parses it back.
pub fn position_fen(board: &Board, active: Color) -> String {
    let mut out = String::new();
    for row in 0..SIZE {
        let mut empty = 0;
        for col in 0..SIZE {
            match board.piece_at(row, col) {
                None => empty += 1,
                Some(piece) => {
                    if empty > 0 {
                        out.push_str(&empty.to_string());
                        empty = 0;
                    }
                    let code = match piece.kind {
                        PieceKind::King => 'k',
                        PieceKind::Queen => 'q',
                        PieceKind::Rook => 'r',
                        PieceKind::Bishop => 'b',
                        PieceKind::Knight => 'n',
                        PieceKind::Pawn => 'p',
                    };
                    out.push(match piece.color {
                        Color::White => code.to_ascii_uppercase(),
                        Color::Black => code,
                    });
                }
            }
        }
        if empty > 0 {
            out.push_str(&empty.to_string());
        }
        if row < SIZE - 1 {
            out.push('/');
        }
    }
    out.push(' ');
    out.push(match active {
        Color::White => 'w',
        Color::Black => 'b',
    });
    out.push_str(" - - 0 1");
    out
}

#[cfg(test)]
#[path = "fen_tests.rs"]
mod fen_tests;
