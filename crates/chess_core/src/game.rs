//! Legality filtering and state transition.
//!
//! `Game` wraps one `Board` plus the side to move, narrows pseudo-legal
//! moves down to legal ones by simulating each candidate on a board clone,
//! and applies validated moves to the live board.

use crate::board::{Board, SIZE};
use crate::error::IllegalMove;
use crate::movegen::generate_all_moves;
use crate::types::*;

#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    side_to_move: Color,
}

impl Game {
    /// A fresh game from the standard starting position, White to move.
    pub fn new() -> Self {
        let mut board = Board::new();
        board.setup_standard_position();
        Self {
            board,
            side_to_move: Color::White,
        }
    }

    /// Wrap an arbitrary position. Used by tests and by search clones.
    pub fn from_board(board: Board, side_to_move: Color) -> Self {
        Self {
            board,
            side_to_move,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable board access for position setup. Bypasses all legality.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    pub fn legal_moves(&self) -> Vec<Move> {
        self.legal_moves_for_color(self.side_to_move)
    }

    /// Pseudo-legal moves for `color`, minus anything that would leave
    /// that side's own king in check, with the extra castling rules
    /// (not out of, through, or into an attacked square). Generation
    /// order is preserved.
    pub fn legal_moves_for_color(&self, color: Color) -> Vec<Move> {
        let pseudo = generate_all_moves(&self.board, color);
        let mut legal = Vec::with_capacity(pseudo.len());

        for mv in pseudo {
            if mv.kind == MoveType::Castling {
                if is_king_in_check(&self.board, color) {
                    continue;
                }
                if self.castling_path_attacked(mv, color) {
                    continue;
                }
            }

            let mut copy = self.board.clone();
            apply_move_to_board(&mut copy, mv);
            if !is_king_in_check(&copy, color) {
                legal.push(mv);
            }
        }
        legal
    }

    /// Walk the king one square at a time toward its castling destination
    /// (the rook stays put; only the king's path matters for the
    /// passed-through-check rule) and report whether any step is attacked.
    fn castling_path_attacked(&self, mv: Move, color: Color) -> bool {
        let step: i8 = if mv.to_col > mv.from_col { 1 } else { -1 };
        let steps = (mv.to_col - mv.from_col).abs();
        for i in 1..=steps {
            let col = mv.from_col + i * step;
            let mut copy = self.board.clone();
            let king = copy.piece_at(mv.from_row, mv.from_col);
            copy.place(mv.from_row, mv.from_col, None);
            copy.place(mv.from_row, col, king);
            if is_king_in_check(&copy, color) {
                return true;
            }
        }
        false
    }

    /// Validate `mv` against the current legal move list and apply it to
    /// the live board. Validation strictly precedes mutation; on error
    /// the game is untouched.
    pub fn apply_move(&mut self, mv: Move) -> Result<(), IllegalMove> {
        if mv.kind == MoveType::Promotion && mv.promotion.is_none() {
            return Err(IllegalMove::MissingPromotion(mv));
        }

        let legal = self.legal_moves_for_color(self.side_to_move);
        let matched = legal.into_iter().find(|lm| moves_match(lm, &mv));
        let matched = match matched {
            Some(m) => m,
            None => return Err(IllegalMove::NotLegal(mv)),
        };

        apply_move_to_board(&mut self.board, matched);
        self.side_to_move = self.side_to_move.other();
        Ok(())
    }

    pub fn in_check(&self, color: Color) -> bool {
        is_king_in_check(&self.board, color)
    }

    pub fn is_checkmate(&self, color: Color) -> bool {
        self.legal_moves_for_color(color).is_empty() && self.in_check(color)
    }

    pub fn is_stalemate(&self, color: Color) -> bool {
        self.legal_moves_for_color(color).is_empty() && !self.in_check(color)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

/// Intake matching: same squares and move type; the promotion piece is
/// compared only for promotion moves, so a spurious promotion payload on
/// any other move type is ignored rather than rejected.
fn moves_match(legal: &Move, candidate: &Move) -> bool {
    if legal.from_row != candidate.from_row
        || legal.from_col != candidate.from_col
        || legal.to_row != candidate.to_row
        || legal.to_col != candidate.to_col
        || legal.kind != candidate.kind
    {
        return false;
    }
    if candidate.kind == MoveType::Promotion {
        return legal.promotion == candidate.promotion;
    }
    true
}

/// True iff any opposing pseudo-legal move lands on `color`'s king square.
///
/// A board with no king of `color` reports "not in check"; checkmate and
/// stalemate queries on such degenerate positions both come out false.
pub fn is_king_in_check(board: &Board, color: Color) -> bool {
    let (king_row, king_col) = match find_king(board, color) {
        Some(square) => square,
        None => return false,
    };
    generate_all_moves(board, color.other())
        .iter()
        .any(|m| m.to_row == king_row && m.to_col == king_col)
}

fn find_king(board: &Board, color: Color) -> Option<(i8, i8)> {
    for row in 0..SIZE {
        for col in 0..SIZE {
            if let Some(piece) = board.piece_at(row, col) {
                if piece.kind == PieceKind::King && piece.color == color {
                    return Some((row, col));
                }
            }
        }
    }
    None
}

/// Full board surgery for one move: en-passant victim removal, origin
/// cleared, promotion materialized, castling rook relocated, and the
/// en-passant target recomputed. Shared by legality simulation (on board
/// clones) and `apply_move` (on the live board).
fn apply_move_to_board(board: &mut Board, mv: Move) {
    // The en-passant victim sits on the moving pawn's origin row at the
    // destination column.
    if mv.kind == MoveType::EnPassant {
        board.place(mv.from_row, mv.to_col, None);
    }

    let mut moving = board.piece_at(mv.from_row, mv.from_col);
    board.place(mv.from_row, mv.from_col, None);
    if let Some(piece) = moving.as_mut() {
        if mv.kind == MoveType::Promotion {
            if let Some(kind) = mv.promotion {
                piece.kind = kind;
            }
        }
        piece.has_moved = true;
    }
    board.place(mv.to_row, mv.to_col, moving);

    if mv.kind == MoveType::Castling {
        let (rook_from, rook_to) = if mv.to_col > mv.from_col {
            (SIZE - 1, mv.to_col - 1)
        } else {
            (0, mv.to_col + 1)
        };
        let mut rook = board.piece_at(mv.from_row, rook_from);
        if let Some(piece) = rook.as_mut() {
            piece.has_moved = true;
        }
        board.place(mv.from_row, rook_from, None);
        board.place(mv.from_row, rook_to, rook);
    }

    // A double pawn push records the passed-over square; anything else
    // expires the target.
    board.clear_en_passant_target();
    if let Some(piece) = moving {
        if piece.kind == PieceKind::Pawn && (mv.to_row - mv.from_row).abs() == 2 {
            board.set_en_passant_target((mv.from_row + mv.to_row) / 2, mv.from_col);
        }
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
