use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn other(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

/// A piece on the board. `has_moved` feeds castling eligibility only;
/// pawn double-step eligibility is driven by the pawn's rank, not this flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
    pub has_moved: bool,
}

impl Piece {
    pub fn new(color: Color, kind: PieceKind) -> Self {
        Self {
            color,
            kind,
            has_moved: false,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveType {
    Normal,
    Capture,
    Castling,
    EnPassant,
    Promotion,
}

/// A move by coordinates. Carries no board state, so it can be replayed
/// against any board claiming the same squares. Equality is structural
/// over all fields, including the promotion piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub from_row: i8,
    pub from_col: i8,
    pub to_row: i8,
    pub to_col: i8,
    pub kind: MoveType,
    pub promotion: Option<PieceKind>,
}

impl Move {
    pub fn new(from_row: i8, from_col: i8, to_row: i8, to_col: i8, kind: MoveType) -> Self {
        Self {
            from_row,
            from_col,
            to_row,
            to_col,
            kind,
            promotion: None,
        }
    }

    pub fn promotion(
        from_row: i8,
        from_col: i8,
        to_row: i8,
        to_col: i8,
        promotion: PieceKind,
    ) -> Self {
        Self {
            from_row,
            from_col,
            to_row,
            to_col,
            kind: MoveType::Promotion,
            promotion: Some(promotion),
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{},{} -> {},{} ({:?})",
            self.from_row, self.from_col, self.to_row, self.to_col, self.kind
        )
    }
}

/// Board coordinates are (row, col) in [0,8): row 7 is White's back rank,
/// row 0 is Black's. White pawns move toward row 0.
pub fn in_bounds(row: i8, col: i8) -> bool {
    (0..8).contains(&row) && (0..8).contains(&col)
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
