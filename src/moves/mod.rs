//! Moves: proposed card plays and their committed records.
//!
//! ## Key Types
//!
//! - `Notation`: card symbol + target description
//! - `PlayCardOnPiece`: a validated, pending card play
//! - `MoveRecord`: a committed play in the game's history

mod notation;
mod play;
mod record;

pub use notation::Notation;
pub use play::PlayCardOnPiece;
pub use record::MoveRecord;
