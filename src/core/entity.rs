//! Piece identification.
//!
//! Every piece on the board has a unique `PieceId`, allocated by the
//! `ChessGame` that owns it. Ids are never reused within a game, so a
//! removed piece's id stays dangling: any later lookup fails instead of
//! silently finding a different piece.
//!
//! ## Usage
//!
//! ```
//! use chess_cards::core::PieceId;
//!
//! let knight = PieceId::new(7);
//! assert_eq!(knight.raw(), 7);
//! assert_eq!(format!("{}", knight), "Piece(7)");
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier for a piece within one game.
///
/// Ordered so that iteration over a game's pieces is deterministic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PieceId(pub u32);

impl PieceId {
    /// Create a piece ID from a raw value.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// The id following this one, or `None` at `u32::MAX`.
    #[must_use]
    pub(crate) fn next(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl From<u32> for PieceId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for PieceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Piece({})", self.0)
    }
}
