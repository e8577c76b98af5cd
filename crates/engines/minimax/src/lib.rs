//! Minimax Chess Engine
//!
//! Fixed-depth adversarial search with alpha-beta pruning over cloned
//! games, scored by static material evaluation. The bot only ever plays
//! moves it obtained from the game's legal-move list, so it can never
//! raise a legality error itself.

mod eval;
mod search;

use chess_core::{Color, Engine, Game, SearchResult};
use tracing::debug;

/// Minimax search bot bound to one color.
///
/// The bot must be asked to move on its own turn; it simulates on clones
/// and never mutates the game it is given. Search is deterministic: the
/// same position and depth always produce the same move.
#[derive(Debug, Clone)]
pub struct MinimaxBot {
    color: Color,
    depth: u8,
    nodes: u64,
}

impl MinimaxBot {
    pub fn new(color: Color, depth: u8) -> Self {
        Self {
            color,
            depth,
            nodes: 0,
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }
}

impl Engine for MinimaxBot {
    fn choose_move(&mut self, game: &Game) -> SearchResult {
        self.nodes = 0;
        let outcome = search::find_best_move(game, self.color, self.depth, &mut self.nodes);
        debug!(
            depth = self.depth,
            nodes = self.nodes,
            score = outcome.score,
            best_move = ?outcome.best_move,
            "minimax search finished"
        );
        SearchResult {
            best_move: outcome.best_move,
            score: outcome.score,
            depth: self.depth,
            nodes: self.nodes,
        }
    }

    fn name(&self) -> &str {
        "Minimax v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}

// Re-export for direct use if needed
pub use eval::{evaluate, piece_value};
