//! Move notation: a short human-readable summary of a card play.

use serde::{Deserialize, Serialize};

/// Notation for a card played on a piece.
///
/// `action` is the card's symbol, `target` the piece's description.
///
/// ```
/// use chess_cards::moves::Notation;
///
/// let notation = Notation::new("🫥", "Black Knight");
/// assert_eq!(notation.to_string(), "🫥 Black Knight");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Notation {
    pub action: String,
    pub target: String,
}

impl Notation {
    #[must_use]
    pub fn new(action: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            target: target.into(),
        }
    }
}

impl std::fmt::Display for Notation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.action, self.target)
    }
}
