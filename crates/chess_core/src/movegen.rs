use crate::board::{Board, SIZE};
use crate::piece::pseudo_legal_moves;
use crate::types::{Color, Move};

/// Generate every pseudo-legal move for `color` by scanning the board
/// row-major and concatenating each piece's moves. Purely functional;
/// the emission order is stable (scan order, then per-piece direction
/// order), which legality filtering and tests rely on.
pub fn generate_all_moves(board: &Board, color: Color) -> Vec<Move> {
    let mut out = Vec::with_capacity(64);
    for row in 0..SIZE {
        for col in 0..SIZE {
            if let Some(piece) = board.piece_at(row, col) {
                if piece.color == color {
                    pseudo_legal_moves(piece, row, col, board, &mut out);
                }
            }
        }
    }
    out
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
