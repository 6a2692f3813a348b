//! Card system: metadata, the card contract, registry, and built-in cards.
//!
//! ## Key Types
//!
//! - `CardId`: Identifier derived from the card title
//! - `CardType`, `LifecycleHint`, `Rarity`: Metadata tags
//! - `Card`: The contract every card implements (`get_move` + `apply`)
//! - `CardRegistry`: Card lookup by id or title
//! - `Banish`: Removes a non-king-like piece

pub mod banish;
pub mod card;
pub mod definition;
pub mod registry;

pub use banish::Banish;
pub use card::Card;
pub use definition::{CardId, CardMetadata, CardType, LifecycleHint, Rarity};
pub use registry::CardRegistry;
