//! Depth-limited minimax with alpha-beta pruning.
//!
//! White is always the maximizing side and Black the minimizing side; the
//! leaf heuristic is White-positive material. Every explored node operates
//! on a cloned `Game`, so the search never touches the caller's state, and
//! sibling clones are dropped as soon as they are scored.

use chess_core::{Color, Game, Move};

use crate::eval::evaluate;

/// Forced-mate value returned when the side to move has no legal moves
/// and is in check; the sign favors the side not on move.
const MATE_SCORE: i32 = 10_000;

pub struct SearchOutcome {
    pub best_move: Option<Move>,
    pub score: i32,
}

/// Pick the best move for `color` from the current position, searching
/// `depth` plies. Ties go to the first optimal move in generation order;
/// `best_move` is `None` when `color` has no legal move.
pub fn find_best_move(game: &Game, color: Color, depth: u8, nodes: &mut u64) -> SearchOutcome {
    let legal = game.legal_moves_for_color(color);
    if legal.is_empty() {
        return SearchOutcome {
            best_move: None,
            score: 0,
        };
    }

    let maximizing = color == Color::White;
    let mut best_move = None;
    let mut best_value = if maximizing { i32::MIN } else { i32::MAX };

    for mv in legal {
        let sim = simulate(game, mv);
        let value = minimax(
            &sim,
            depth.saturating_sub(1),
            i32::MIN,
            i32::MAX,
            !maximizing,
            nodes,
        );
        let better = if maximizing {
            value > best_value
        } else {
            value < best_value
        };
        if better {
            best_value = value;
            best_move = Some(mv);
        }
    }

    SearchOutcome {
        best_move,
        score: best_value,
    }
}

fn minimax(
    game: &Game,
    depth: u8,
    mut alpha: i32,
    mut beta: i32,
    maximizing: bool,
    nodes: &mut u64,
) -> i32 {
    *nodes += 1;
    if depth == 0 {
        return evaluate(game.board());
    }

    let color = if maximizing {
        Color::White
    } else {
        Color::Black
    };
    let moves = game.legal_moves_for_color(color);
    if moves.is_empty() {
        if game.in_check(color) {
            return if maximizing { -MATE_SCORE } else { MATE_SCORE };
        }
        return 0; // stalemate is a dead draw, not a small penalty
    }

    if maximizing {
        let mut max_eval = i32::MIN;
        for mv in moves {
            let eval = minimax(&simulate(game, mv), depth - 1, alpha, beta, false, nodes);
            max_eval = max_eval.max(eval);
            alpha = alpha.max(eval);
            if beta <= alpha {
                break;
            }
        }
        max_eval
    } else {
        let mut min_eval = i32::MAX;
        for mv in moves {
            let eval = minimax(&simulate(game, mv), depth - 1, alpha, beta, true, nodes);
            min_eval = min_eval.min(eval);
            beta = beta.min(eval);
            if beta <= alpha {
                break;
            }
        }
        min_eval
    }
}

fn simulate(game: &Game, mv: Move) -> Game {
    let mut sim = game.clone();
    sim.apply_move(mv)
        .expect("searched moves come from the legal move list");
    sim
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
