//! Banish: remove any piece that is not king-like.

use tracing::debug;

use crate::core::{ChessGame, GameError, Piece};
use crate::moves::{Notation, PlayCardOnPiece};

use super::card::Card;
use super::definition::{CardType, LifecycleHint, Rarity};

/// Removal reason recorded for banished pieces.
pub const REASON: &str = "banished";

/// Banish a piece. Instant, turn-ending; king-like pieces are immune.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Banish;

impl Card for Banish {
    fn symbol(&self) -> &str {
        "🫥"
    }

    fn card_type(&self) -> CardType {
        CardType::Action
    }

    fn title(&self) -> &str {
        "Banish"
    }

    fn lifecycle_hint(&self) -> LifecycleHint {
        LifecycleHint::Instant
    }

    fn rich_description(&self) -> &str {
        "[i]Here's a quote about banishment.[/i]\n\n[b]Banish[/b] a piece."
    }

    fn rarity(&self) -> Rarity {
        Rarity::Brilliant
    }

    fn get_move(&self, _game: &ChessGame, piece: &Piece) -> Option<PlayCardOnPiece> {
        if piece.is_king_like() {
            debug!(piece = %piece.id, "banish refused: king-like target");
            return None;
        }

        let notation = Notation::new(self.symbol(), &piece.description);
        Some(self.basic_move(piece, notation).with_ends_turn(true))
    }

    fn apply(&self, game: &ChessGame, piece: &Piece) -> Result<ChessGame, GameError> {
        game.remove_piece(piece.id, REASON)
    }
}
