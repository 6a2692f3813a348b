//! Card registry for definition lookup.
//!
//! The `CardRegistry` stores every card behavior known to the game,
//! populated at load time and read-only afterwards. Moves name their card
//! by `CardId`; the registry resolves that id back to behavior on commit.

use std::sync::Arc;

use rustc_hash::FxHashMap;

use super::banish::Banish;
use super::card::Card;
use super::definition::{CardId, CardType};
use crate::core::GameError;

/// Registry of cards.
///
/// ## Example
///
/// ```
/// use chess_cards::cards::{Banish, Card, CardRegistry};
///
/// let registry = CardRegistry::with_builtin_cards();
///
/// let found = registry.get(&Banish.id()).unwrap();
/// assert_eq!(found.title(), "Banish");
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardRegistry {
    cards: FxHashMap<CardId, Arc<dyn Card>>,
}

impl CardRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding every card this crate ships.
    #[must_use]
    pub fn with_builtin_cards() -> Self {
        let mut registry = Self::new();
        registry.cards.insert(Banish.id(), Arc::new(Banish));
        registry
    }

    /// Register a card.
    ///
    /// Fails if a card with the same id is already registered.
    pub fn register(&mut self, card: impl Card + 'static) -> Result<CardId, GameError> {
        self.register_arc(Arc::new(card))
    }

    /// Register a shared card.
    pub fn register_arc(&mut self, card: Arc<dyn Card>) -> Result<CardId, GameError> {
        let id = card.id();
        if self.cards.contains_key(&id) {
            return Err(GameError::DuplicateCard(id));
        }
        self.cards.insert(id.clone(), card);
        Ok(id)
    }

    /// Get a card by ID.
    #[must_use]
    pub fn get(&self, id: &CardId) -> Option<&Arc<dyn Card>> {
        self.cards.get(id)
    }

    /// Get a card by title.
    #[must_use]
    pub fn by_title(&self, title: &str) -> Option<&Arc<dyn Card>> {
        self.get(&CardId::from_title(title))
    }

    /// Check if a card ID is registered.
    #[must_use]
    pub fn contains(&self, id: &CardId) -> bool {
        self.cards.contains_key(id)
    }

    /// Get the number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all cards.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn Card>> {
        self.cards.values()
    }

    /// Find cards by type.
    pub fn find_by_type(&self, card_type: CardType) -> impl Iterator<Item = &Arc<dyn Card>> {
        self.cards.values().filter(move |c| c.card_type() == card_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::LifecycleHint;
    use crate::core::{ChessGame, Piece};
    use crate::moves::PlayCardOnPiece;

    #[derive(Debug)]
    struct Inert;

    impl Card for Inert {
        fn symbol(&self) -> &str {
            "·"
        }
        fn card_type(&self) -> CardType {
            CardType::Passive
        }
        fn title(&self) -> &str {
            "Inert"
        }
        fn lifecycle_hint(&self) -> LifecycleHint {
            LifecycleHint::Persistent
        }
        fn rich_description(&self) -> &str {
            "Does nothing."
        }
        fn get_move(&self, _game: &ChessGame, _piece: &Piece) -> Option<PlayCardOnPiece> {
            None
        }
        fn apply(&self, game: &ChessGame, _piece: &Piece) -> Result<ChessGame, GameError> {
            Ok(game.clone())
        }
    }

    #[test]
    fn test_builtin_cards() {
        let registry = CardRegistry::with_builtin_cards();

        assert_eq!(registry.len(), 1);
        assert!(registry.contains(&CardId::from_title("Banish")));
        assert_eq!(registry.by_title("Banish").map(|c| c.symbol()), Some("🫥"));
    }

    #[test]
    fn test_register_and_get() {
        let mut registry = CardRegistry::new();
        assert!(registry.is_empty());

        let id = registry.register(Inert).unwrap();

        assert_eq!(id, CardId::from_title("Inert"));
        assert_eq!(registry.get(&id).map(|c| c.title()), Some("Inert"));
        assert!(registry.get(&CardId::from_title("Missing")).is_none());
    }

    #[test]
    fn test_register_duplicate_fails() {
        let mut registry = CardRegistry::with_builtin_cards();

        assert_eq!(
            registry.register(Banish),
            Err(GameError::DuplicateCard(Banish.id()))
        );
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_find_by_type() {
        let mut registry = CardRegistry::with_builtin_cards();
        registry.register(Inert).unwrap();

        let actions: Vec<_> = registry.find_by_type(CardType::Action).collect();
        assert_eq!(actions.len(), 1);
        assert_eq!(actions[0].title(), "Banish");

        assert_eq!(registry.find_by_type(CardType::Piece).count(), 0);
        assert_eq!(registry.iter().count(), 2);
    }
}
