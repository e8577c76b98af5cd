//! Random Move Chess Engine
//!
//! A simple engine that selects moves uniformly at random from all legal
//! moves. Useful for:
//! - Testing infrastructure and the legal-move API
//! - Baseline comparisons (any real engine should easily beat this)
//! - Stress testing move generation

use chess_core::{Engine, Game, SearchResult};
use rand::seq::SliceRandom;
use rand::thread_rng;

#[cfg(test)]
mod lib_tests;

/// A chess engine that plays random legal moves.
#[derive(Debug, Clone, Default)]
pub struct RandomBot {
    nodes: u64,
}

impl RandomBot {
    pub fn new() -> Self {
        Self { nodes: 0 }
    }
}

impl Engine for RandomBot {
    fn choose_move(&mut self, game: &Game) -> SearchResult {
        let moves = game.legal_moves();
        self.nodes = 1;

        SearchResult {
            best_move: moves.choose(&mut thread_rng()).copied(),
            score: 0,
            depth: 1,
            nodes: self.nodes,
        }
    }

    fn name(&self) -> &str {
        "Random v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}
