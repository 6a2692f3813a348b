//! Pieces - entities on the board.
//!
//! A `Piece` is owned by its `ChessGame` and referenced elsewhere by
//! `PieceId` only. Cards read pieces; they never hold on to them.
//!
//! ## King-like pieces
//!
//! Kings are king-like by default. Variants with other royal pieces can
//! flag any piece king-like with `Piece::royal`. Cards that remove pieces
//! are expected to refuse king-like targets.

use serde::{Deserialize, Serialize};

use super::entity::PieceId;
use super::side::Side;

/// Classification of a piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

impl PieceKind {
    /// Display name of the kind.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            PieceKind::King => "King",
            PieceKind::Queen => "Queen",
            PieceKind::Rook => "Rook",
            PieceKind::Bishop => "Bishop",
            PieceKind::Knight => "Knight",
            PieceKind::Pawn => "Pawn",
        }
    }
}

impl std::fmt::Display for PieceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A piece on the board.
///
/// ## Example
///
/// ```
/// use chess_cards::core::{Piece, PieceId, PieceKind, Side};
///
/// let knight = Piece::new(PieceId::new(4), Side::WHITE, PieceKind::Knight);
/// assert_eq!(knight.description, "White Knight");
/// assert!(!knight.is_king_like());
///
/// let king = Piece::new(PieceId::new(5), Side::BLACK, PieceKind::King);
/// assert!(king.is_king_like());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    /// Unique identity within the owning game.
    pub id: PieceId,

    /// Side the piece belongs to.
    pub side: Side,

    /// Piece classification.
    pub kind: PieceKind,

    /// Protected from removal effects.
    pub king_like: bool,

    /// Human-readable description, used in move notation.
    pub description: String,
}

impl Piece {
    /// Create a piece with the default description (`"<side> <kind>"`).
    #[must_use]
    pub fn new(id: PieceId, side: Side, kind: PieceKind) -> Self {
        Self {
            id,
            side,
            kind,
            king_like: kind == PieceKind::King,
            description: format!("{} {}", side, kind),
        }
    }

    /// Replace the description (builder pattern).
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Flag this piece as king-like regardless of its kind.
    #[must_use]
    pub fn royal(mut self) -> Self {
        self.king_like = true;
        self
    }

    /// Check if the piece is protected from removal effects.
    #[must_use]
    pub fn is_king_like(&self) -> bool {
        self.king_like
    }
}
