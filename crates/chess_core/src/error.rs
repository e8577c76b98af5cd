use crate::types::Move;
use thiserror::Error;

/// The sole recoverable, caller-facing error of the engine. Raised
/// synchronously by `Game::apply_move` before any board mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IllegalMove {
    /// The move does not structurally match any currently-legal move
    /// for the side to move.
    #[error("illegal move: {0}")]
    NotLegal(Move),
    /// A promotion move arrived without a promotion piece.
    #[error("promotion move must specify a promotion piece: {0}")]
    MissingPromotion(Move),
}
