//! Pseudo-legal move shapes for each piece variant.
//!
//! "Pseudo-legal" means consistent with the piece's movement geometry and
//! board occupancy only; whether the mover's own king is left in check is
//! decided later by `Game`. The variant set is closed, so dispatch is an
//! exhaustive match on `PieceKind`.

use crate::board::{Board, SIZE};
use crate::types::*;

const DIAGONALS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
const ORTHOGONALS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (-1, 2),
    (-2, 1),
    (1, -2),
    (2, -1),
    (-1, -2),
    (-2, -1),
];
const PROMOTION_KINDS: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
];

/// Append all pseudo-legal moves for `piece` standing on `(row, col)`.
pub fn pseudo_legal_moves(piece: Piece, row: i8, col: i8, board: &Board, out: &mut Vec<Move>) {
    match piece.kind {
        PieceKind::Pawn => gen_pawn(piece, row, col, board, out),
        PieceKind::Knight => gen_jumps(piece, row, col, board, &KNIGHT_JUMPS, out),
        PieceKind::Bishop => gen_slider(piece, row, col, board, &DIAGONALS, out),
        PieceKind::Rook => gen_slider(piece, row, col, board, &ORTHOGONALS, out),
        PieceKind::Queen => {
            gen_slider(piece, row, col, board, &DIAGONALS, out);
            gen_slider(piece, row, col, board, &ORTHOGONALS, out);
        }
        PieceKind::King => gen_king(piece, row, col, board, out),
    }
}

/// Sliding pieces walk each direction ray and stop at the first occupied
/// square, capturing it if it holds an enemy.
fn gen_slider(
    piece: Piece,
    row: i8,
    col: i8,
    board: &Board,
    dirs: &[(i8, i8)],
    out: &mut Vec<Move>,
) {
    for &(dr, dc) in dirs {
        let mut r = row + dr;
        let mut c = col + dc;
        while in_bounds(r, c) {
            match board.piece_at(r, c) {
                None => out.push(Move::new(row, col, r, c, MoveType::Normal)),
                Some(other) if other.color != piece.color => {
                    out.push(Move::new(row, col, r, c, MoveType::Capture));
                    break;
                }
                _ => break,
            }
            r += dr;
            c += dc;
        }
    }
}

fn gen_jumps(
    piece: Piece,
    row: i8,
    col: i8,
    board: &Board,
    deltas: &[(i8, i8)],
    out: &mut Vec<Move>,
) {
    for &(dr, dc) in deltas {
        let r = row + dr;
        let c = col + dc;
        if !in_bounds(r, c) {
            continue;
        }
        match board.piece_at(r, c) {
            None => out.push(Move::new(row, col, r, c, MoveType::Normal)),
            Some(other) if other.color != piece.color => {
                out.push(Move::new(row, col, r, c, MoveType::Capture));
            }
            _ => {}
        }
    }
}

fn gen_king(piece: Piece, row: i8, col: i8, board: &Board, out: &mut Vec<Move>) {
    for dr in -1..=1 {
        for dc in -1..=1 {
            if dr == 0 && dc == 0 {
                continue;
            }
            let r = row + dr;
            let c = col + dc;
            if !in_bounds(r, c) {
                continue;
            }
            match board.piece_at(r, c) {
                None => out.push(Move::new(row, col, r, c, MoveType::Normal)),
                Some(other) if other.color != piece.color => {
                    out.push(Move::new(row, col, r, c, MoveType::Capture));
                }
                _ => {}
            }
        }
    }

    // Castling candidates: only piece identity and occupancy here.
    // Check safety along the king's path is Game's job.
    if !piece.has_moved {
        if can_castle(piece, row, 7, 5..=6, board) {
            out.push(Move::new(row, col, row, col + 2, MoveType::Castling));
        }
        if can_castle(piece, row, 0, 1..=3, board) {
            out.push(Move::new(row, col, row, col - 2, MoveType::Castling));
        }
    }
}

fn can_castle(
    king: Piece,
    row: i8,
    rook_col: i8,
    between: std::ops::RangeInclusive<i8>,
    board: &Board,
) -> bool {
    let rook = match board.piece_at(row, rook_col) {
        Some(p) => p,
        None => return false,
    };
    if rook.kind != PieceKind::Rook || rook.color != king.color || rook.has_moved {
        return false;
    }
    between.into_iter().all(|c| board.piece_at(row, c).is_none())
}

fn gen_pawn(piece: Piece, row: i8, col: i8, board: &Board, out: &mut Vec<Move>) {
    let (dir, start_row) = match piece.color {
        Color::White => (-1, 6),
        Color::Black => (1, 1),
    };

    // Forward pushes. A pawn landing on the far rank promotes, one move
    // per promotion variant.
    let fr = row + dir;
    if in_bounds(fr, col) && board.piece_at(fr, col).is_none() {
        if fr == 0 || fr == SIZE - 1 {
            for kind in PROMOTION_KINDS {
                out.push(Move::promotion(row, col, fr, col, kind));
            }
        } else {
            out.push(Move::new(row, col, fr, col, MoveType::Normal));

            // Double step from the start rank only, both squares empty.
            if row == start_row {
                let fr2 = row + 2 * dir;
                if in_bounds(fr2, col) && board.piece_at(fr2, col).is_none() {
                    out.push(Move::new(row, col, fr2, col, MoveType::Normal));
                }
            }
        }
    }

    // Diagonal captures, promoting on the far rank.
    for dc in [-1, 1] {
        let r = row + dir;
        let c = col + dc;
        if !in_bounds(r, c) {
            continue;
        }
        if let Some(target) = board.piece_at(r, c) {
            if target.color != piece.color {
                if r == 0 || r == SIZE - 1 {
                    for kind in PROMOTION_KINDS {
                        out.push(Move::promotion(row, col, r, c, kind));
                    }
                } else {
                    out.push(Move::new(row, col, r, c, MoveType::Capture));
                }
            }
        }
    }

    // En passant onto the recorded target square, guarded by the presence
    // of the enemy pawn that just passed it.
    if let Some((ep_row, ep_col)) = board.en_passant_target() {
        for dc in [-1, 1] {
            if row + dir == ep_row && col + dc == ep_col && in_bounds(row, col + dc) {
                if let Some(adjacent) = board.piece_at(row, col + dc) {
                    if adjacent.kind == PieceKind::Pawn && adjacent.color != piece.color {
                        out.push(Move::new(row, col, ep_row, ep_col, MoveType::EnPassant));
                    }
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "piece_tests.rs"]
mod piece_tests;
