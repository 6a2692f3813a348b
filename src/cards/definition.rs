//! Card identity and metadata.
//!
//! Cards are stateless: everything here is fixed when the card is
//! defined and read by the host (UI, asset lookup) through `Card`'s
//! accessors or a `CardMetadata` snapshot.

use serde::{Deserialize, Serialize};

/// Unique identifier for a card definition.
///
/// Derived from the card title, so the same card always has the same id
/// across runs and hosts can use it to locate assets.
///
/// ```
/// use chess_cards::cards::CardId;
///
/// assert_eq!(CardId::from_title("Banish").as_str(), "banish");
/// assert_eq!(CardId::from_title("Royal Decree!").as_str(), "royal_decree");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(String);

impl CardId {
    /// Build an id from a card title.
    ///
    /// Lowercases ASCII letters and collapses runs of anything else into a
    /// single `_`, trimming leading and trailing separators.
    #[must_use]
    pub fn from_title(title: &str) -> Self {
        let mut id = String::with_capacity(title.len());
        let mut pending_sep = false;
        for c in title.chars() {
            if c.is_ascii_alphanumeric() {
                if pending_sep && !id.is_empty() {
                    id.push('_');
                }
                pending_sep = false;
                id.push(c.to_ascii_lowercase());
            } else {
                pending_sep = true;
            }
        }
        Self(id)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Card category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardType {
    /// Played for a one-off effect.
    Action,
    /// Stays in effect while in play.
    Passive,
    /// Puts a piece on the board.
    Piece,
}

/// When a card's effect resolves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LifecycleHint {
    /// Resolves immediately on play.
    Instant,
    /// Resolves at a later point chosen by the host.
    Delayed,
    /// Keeps applying until removed.
    Persistent,
}

/// Rarity tier, lowest first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rarity {
    #[default]
    Common,
    Uncommon,
    Rare,
    Brilliant,
}

/// Read-only snapshot of a card's metadata.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardMetadata {
    pub id: CardId,
    pub symbol: String,
    pub card_type: CardType,
    pub title: String,
    pub lifecycle_hint: LifecycleHint,
    /// Rules/flavor text with markup; rendering is up to the host.
    pub rich_description: String,
    pub rarity: Rarity,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_id_from_title() {
        assert_eq!(CardId::from_title("Banish").as_str(), "banish");
        assert_eq!(CardId::from_title("  Swap  Places ").as_str(), "swap_places");
        assert_eq!(CardId::from_title("Knight's Tour").as_str(), "knight_s_tour");
        assert_eq!(CardId::from_title("").as_str(), "");
    }

    #[test]
    fn test_card_id_display() {
        assert_eq!(format!("{}", CardId::from_title("Banish")), "Card(banish)");
    }

    #[test]
    fn test_rarity_order() {
        assert!(Rarity::Common < Rarity::Uncommon);
        assert!(Rarity::Rare < Rarity::Brilliant);
        assert_eq!(Rarity::default(), Rarity::Common);
    }
}
