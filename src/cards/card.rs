//! The card-effect contract.
//!
//! Every playable card implements `Card`. A play goes through two steps:
//!
//! 1. `get_move` checks whether the card may target a piece and, if so,
//!    describes the play as a `PlayCardOnPiece`. It is pure, so hosts may
//!    call it speculatively (legality highlighting) as often as they like.
//! 2. `apply` performs the state change once the host commits the move.
//!    It must run at most once per committed move.
//!
//! A refused target is `None`, not an error.

use crate::core::{ChessGame, GameError, Piece};
use crate::moves::{Notation, PlayCardOnPiece};

use super::definition::{CardId, CardMetadata, CardType, LifecycleHint, Rarity};

/// A card that targets a single piece.
///
/// ## Implementing
///
/// Supply the metadata accessors, a targeting predicate in `get_move`
/// (finish with `basic_move`), and the mutation in `apply`.
///
/// ```
/// use chess_cards::cards::{Card, CardType, LifecycleHint};
/// use chess_cards::core::{ChessGame, GameError, Piece, PieceKind, Side};
/// use chess_cards::moves::{Notation, PlayCardOnPiece};
///
/// #[derive(Debug)]
/// struct Capture;
///
/// impl Card for Capture {
///     fn symbol(&self) -> &str { "x" }
///     fn card_type(&self) -> CardType { CardType::Action }
///     fn title(&self) -> &str { "Capture Pawn" }
///     fn lifecycle_hint(&self) -> LifecycleHint { LifecycleHint::Instant }
///     fn rich_description(&self) -> &str { "Capture a pawn." }
///
///     fn get_move(&self, _game: &ChessGame, piece: &Piece) -> Option<PlayCardOnPiece> {
///         (piece.kind == PieceKind::Pawn)
///             .then(|| self.basic_move(piece, Notation::new(self.symbol(), &piece.description)))
///     }
///
///     fn apply(&self, game: &ChessGame, piece: &Piece) -> Result<ChessGame, GameError> {
///         game.remove_piece(piece.id, "captured")
///     }
/// }
///
/// let (game, pawn) = ChessGame::default().add_piece(Side::BLACK, PieceKind::Pawn).unwrap();
/// let piece = game.piece(pawn).unwrap();
/// let mv = Capture.get_move(&game, piece).unwrap();
/// assert!(!mv.ends_turn());
/// assert_eq!(mv.notation().to_string(), "x Black Pawn");
/// ```
pub trait Card: std::fmt::Debug + Send + Sync {
    // === Metadata ===

    /// Glyph shown for the card and used as the notation action.
    fn symbol(&self) -> &str;

    /// Category of the card.
    fn card_type(&self) -> CardType;

    /// Display name; the default `id` is derived from it.
    fn title(&self) -> &str;

    /// When the effect resolves.
    fn lifecycle_hint(&self) -> LifecycleHint;

    /// Rules/flavor text with markup.
    fn rich_description(&self) -> &str;

    /// Rarity tier, `Common` unless overridden.
    fn rarity(&self) -> Rarity {
        Rarity::Common
    }

    /// Card id, derived from the title by default.
    fn id(&self) -> CardId {
        CardId::from_title(self.title())
    }

    /// Snapshot of all metadata.
    fn metadata(&self) -> CardMetadata {
        CardMetadata {
            id: self.id(),
            symbol: self.symbol().to_string(),
            card_type: self.card_type(),
            title: self.title().to_string(),
            lifecycle_hint: self.lifecycle_hint(),
            rich_description: self.rich_description().to_string(),
            rarity: self.rarity(),
        }
    }

    // === Behavior ===

    /// Describe playing this card on `piece`, or `None` if the piece is not
    /// a legal target. Must not have side effects.
    fn get_move(&self, game: &ChessGame, piece: &Piece) -> Option<PlayCardOnPiece>;

    /// Apply a committed play of this card on `piece`.
    ///
    /// `piece` must still be active in `game`; otherwise this fails with
    /// `GameError::PieceNotFound`.
    fn apply(&self, game: &ChessGame, piece: &Piece) -> Result<ChessGame, GameError>;

    /// The plain move for playing this card on `piece`: does not end the
    /// turn. Call only after the targeting check has passed.
    fn basic_move(&self, piece: &Piece, notation: Notation) -> PlayCardOnPiece {
        PlayCardOnPiece::new(self.id(), self.title(), piece.id, notation)
    }
}
