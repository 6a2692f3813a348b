//! Error types.
//!
//! Only contract violations are errors. A card refusing a target is an
//! expected outcome and is reported as `None` from `Card::get_move`.

use thiserror::Error;

use super::entity::PieceId;
use crate::cards::CardId;

/// Errors raised by game-state mutations and move resolution.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    /// The piece is not (or no longer) active in the game.
    ///
    /// Raised when a stale move is replayed or applied twice.
    #[error("{0} is not in the game")]
    PieceNotFound(PieceId),

    /// The move names a card that is not registered.
    #[error("{0} is not registered")]
    UnknownCard(CardId),

    /// A card with the same id was already registered.
    #[error("{0} is already registered")]
    DuplicateCard(CardId),

    /// The card no longer accepts the target the move was built for.
    #[error("{card} cannot target {target}")]
    IllegalMove { card: CardId, target: PieceId },

    /// Configuration values out of range.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// A stored game whose bookkeeping is inconsistent.
    #[error("invalid game state: {0}")]
    InvalidState(String),

    /// Every piece id has been allocated.
    #[error("piece ids exhausted")]
    PieceIdsExhausted,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            GameError::PieceNotFound(PieceId(3)).to_string(),
            "Piece(3) is not in the game"
        );
        assert_eq!(
            GameError::IllegalMove {
                card: CardId::from_title("Banish"),
                target: PieceId(1),
            }
            .to_string(),
            "Card(banish) cannot target Piece(1)"
        );
    }
}
