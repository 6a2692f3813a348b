//! # chess-cards
//!
//! The card-effect contract for a chess-variant card game.
//!
//! A card is a stateless definition (metadata + behavior). Playing it on a
//! piece happens in two steps:
//!
//! 1. **Propose**: `Card::get_move` checks the target and returns a
//!    `PlayCardOnPiece`, or `None` if the target is illegal. Pure.
//! 2. **Apply**: `Card::apply` performs the state change on commit.
//!
//! ## Design Principles
//!
//! 1. **Value Semantics**: `ChessGame` mutations return a new game. Backed by
//!    `im-rs`, so the old state stays around for audit and undo at O(1) cost.
//!
//! 2. **Refusal Is Not an Error**: an illegal target is `None`. Errors are
//!    reserved for contract violations such as applying a stale move.
//!
//! 3. **Cards Are Traits**: each card implements `Card`; there is no card
//!    hierarchy.
//!
//! ## Modules
//!
//! - `core`: Piece ids, sides, pieces, configuration, errors, game state
//! - `cards`: Card metadata, the `Card` trait, registry, `Banish`
//! - `moves`: Notation, pending moves, committed move records
//! - `rules`: `CardResolver` for proposing and committing plays
//!
//! ## Example
//!
//! ```
//! use chess_cards::{Banish, Card, CardRegistry, CardResolver, ChessGame, PieceKind, Side};
//!
//! let game = ChessGame::default();
//! let (game, king) = game.add_piece(Side::BLACK, PieceKind::King).unwrap();
//! let (game, rook) = game.add_piece(Side::BLACK, PieceKind::Rook).unwrap();
//!
//! let resolver = CardResolver::new(CardRegistry::with_builtin_cards());
//! assert_eq!(resolver.propose(&Banish.id(), &game, king).unwrap(), None);
//!
//! let mv = resolver.propose(&Banish.id(), &game, rook).unwrap().unwrap();
//! let game = resolver.commit(&game, &mv).unwrap();
//!
//! assert!(!game.contains(rook));
//! assert_eq!(game.turn_number(), 2);
//! ```

pub mod core;
pub mod cards;
pub mod moves;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    ChessGame, GameConfig, GameError, Piece, PieceId, PieceKind, Removal, Side,
};

pub use crate::cards::{
    Banish, Card, CardId, CardMetadata, CardRegistry, CardType, LifecycleHint, Rarity,
};

pub use crate::moves::{MoveRecord, Notation, PlayCardOnPiece};

pub use crate::rules::CardResolver;
