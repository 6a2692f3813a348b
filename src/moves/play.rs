//! Card-on-piece moves.
//!
//! A `PlayCardOnPiece` is the validated, not-yet-committed description of
//! a card played against a piece. It is an immutable value: "updating" a
//! move (e.g. `with_ends_turn`) returns a modified copy.
//!
//! Moves are only built by `Card::basic_move`, which cards call after their
//! targeting check passes. Holding a move therefore means the target was
//! legal when the move was built. It may have gone stale since, which is
//! why committing re-checks it.

use serde::{Deserialize, Serialize};

use super::notation::Notation;
use crate::cards::CardId;
use crate::core::PieceId;

/// A card played on a piece.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayCardOnPiece {
    card: CardId,
    card_title: String,
    target: PieceId,
    notation: Notation,
    ends_turn: bool,
}

impl PlayCardOnPiece {
    pub(crate) fn new(
        card: CardId,
        card_title: impl Into<String>,
        target: PieceId,
        notation: Notation,
    ) -> Self {
        Self {
            card,
            card_title: card_title.into(),
            target,
            notation,
            ends_turn: false,
        }
    }

    /// Copy of this move with `ends_turn` replaced.
    #[must_use]
    pub fn with_ends_turn(&self, ends_turn: bool) -> Self {
        Self {
            ends_turn,
            ..self.clone()
        }
    }

    /// Card being played.
    #[must_use]
    pub fn card(&self) -> &CardId {
        &self.card
    }

    /// Title of the card being played.
    #[must_use]
    pub fn card_title(&self) -> &str {
        &self.card_title
    }

    /// Targeted piece.
    #[must_use]
    pub fn target(&self) -> PieceId {
        self.target
    }

    #[must_use]
    pub fn notation(&self) -> &Notation {
        &self.notation
    }

    /// Whether committing this move advances the turn.
    #[must_use]
    pub fn ends_turn(&self) -> bool {
        self.ends_turn
    }
}

impl std::fmt::Display for PlayCardOnPiece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.notation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PlayCardOnPiece {
        PlayCardOnPiece::new(
            CardId::from_title("Banish"),
            "Banish",
            PieceId(4),
            Notation::new("🫥", "White Rook"),
        )
    }

    #[test]
    fn test_basic_move_does_not_end_turn() {
        let mv = sample();

        assert_eq!(mv.card(), &CardId::from_title("Banish"));
        assert_eq!(mv.card_title(), "Banish");
        assert_eq!(mv.target(), PieceId(4));
        assert!(!mv.ends_turn());
    }

    #[test]
    fn test_with_ends_turn_copies() {
        let basic = sample();
        let ending = basic.with_ends_turn(true);

        assert!(ending.ends_turn());
        assert!(!basic.ends_turn());
        assert_eq!(ending.notation(), basic.notation());
        assert_eq!(ending.target(), basic.target());
        assert_ne!(ending, basic);
    }

    #[test]
    fn test_display_is_notation() {
        assert_eq!(sample().to_string(), "🫥 White Rook");
    }

    #[test]
    fn test_serialization() {
        let mv = sample().with_ends_turn(true);
        let json = serde_json::to_string(&mv).unwrap();
        let deserialized: PlayCardOnPiece = serde_json::from_str(&json).unwrap();
        assert_eq!(mv, deserialized);
    }
}
