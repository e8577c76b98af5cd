use crate::types::*;

pub const SIZE: i8 = 8;

/// 8x8 board stored as a flat 64-slot array indexed `row * 8 + col`,
/// plus the en-passant target square left behind by the last double pawn
/// push. `Piece` is `Copy`, so the derived `Clone` is a flat O(64) copy
/// and two boards never alias a piece; search simulation relies on this.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    squares: [Option<Piece>; 64],
    en_passant: Option<(i8, i8)>,
}

impl Board {
    pub fn new() -> Self {
        Self {
            squares: [None; 64],
            en_passant: None,
        }
    }

    fn idx(row: i8, col: i8) -> usize {
        debug_assert!(in_bounds(row, col));
        (row as usize) * 8 + (col as usize)
    }

    pub fn piece_at(&self, row: i8, col: i8) -> Option<Piece> {
        self.squares[Self::idx(row, col)]
    }

    /// Direct write used by setup and move application. No legality checks.
    pub fn place(&mut self, row: i8, col: i8, piece: Option<Piece>) {
        self.squares[Self::idx(row, col)] = piece;
    }

    /// Clear the board and place the standard 32-piece starting array.
    /// White pawns on row 6 and back rank on row 7, Black mirrored on
    /// rows 1 and 0. Idempotent.
    pub fn setup_standard_position(&mut self) {
        self.squares = [None; 64];
        self.en_passant = None;

        for col in 0..SIZE {
            self.place(6, col, Some(Piece::new(Color::White, PieceKind::Pawn)));
            self.place(1, col, Some(Piece::new(Color::Black, PieceKind::Pawn)));
        }

        let back = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (col, &kind) in back.iter().enumerate() {
            self.place(7, col as i8, Some(Piece::new(Color::White, kind)));
            self.place(0, col as i8, Some(Piece::new(Color::Black, kind)));
        }
    }

    pub fn en_passant_target(&self) -> Option<(i8, i8)> {
        self.en_passant
    }

    pub fn set_en_passant_target(&mut self, row: i8, col: i8) {
        self.en_passant = Some((row, col));
    }

    pub fn clear_en_passant_target(&mut self) {
        self.en_passant = None;
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
