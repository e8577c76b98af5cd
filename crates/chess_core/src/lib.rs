pub mod board;
pub mod error;
pub mod fen;
pub mod game;
pub mod movegen;
pub mod piece;
pub mod types;

// Re-export core game logic (not engine-specific)
pub use board::*;
pub use error::IllegalMove;
pub use fen::position_fen;
pub use game::*;
pub use movegen::*;
pub use piece::pseudo_legal_moves;
pub use types::*;

// =============================================================================
// Engine trait — implemented by all chess engines (minimax, random, etc.)
// =============================================================================

/// Result of a search operation
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The best move found (None if the side has no legal move)
    pub best_move: Option<Move>,
    /// Evaluation of the chosen line, White-positive material units
    pub score: i32,
    /// Search depth used
    pub depth: u8,
    /// Number of nodes searched (for stats)
    pub nodes: u64,
}

/// Trait that all chess engines must implement.
///
/// Engines read the game through its legal-move API and never mutate the
/// authoritative game; simulation happens on clones.
pub trait Engine: Send {
    /// Pick a move for the side to move. `best_move: None` means the
    /// side has no legal move, which the caller must treat as "no move
    /// available" rather than an error.
    fn choose_move(&mut self, game: &Game) -> SearchResult;

    /// Engine name for identification
    fn name(&self) -> &str;

    /// Reset internal state for a new game
    fn new_game(&mut self) {}
}
