//! Single-card resolution.
//!
//! `CardResolver` drives one card play through its states:
//!
//! ```text
//! Proposed -> Rejected (None)
//!          -> Validated (Some(move)) -> Applied
//! ```
//!
//! Proposing is pure. Committing applies the card, records the move, and
//! advances the turn when the move ends it. Ordering between plays, hands,
//! and draws belong to the host's turn manager.

use std::sync::Arc;

use tracing::{debug, info};

use crate::cards::{Card, CardId, CardRegistry};
use crate::core::{ChessGame, GameError, PieceId};
use crate::moves::{MoveRecord, PlayCardOnPiece};

/// Resolves card plays against a registry of known cards.
#[derive(Clone, Debug, Default)]
pub struct CardResolver {
    registry: CardRegistry,
}

impl CardResolver {
    #[must_use]
    pub fn new(registry: CardRegistry) -> Self {
        Self { registry }
    }

    #[must_use]
    pub fn registry(&self) -> &CardRegistry {
        &self.registry
    }

    fn card(&self, id: &CardId) -> Result<&Arc<dyn Card>, GameError> {
        self.registry
            .get(id)
            .ok_or_else(|| GameError::UnknownCard(id.clone()))
    }

    /// Propose playing `card` on `target`.
    ///
    /// `Ok(None)` means the card refuses the target. Errors only when the
    /// card or piece does not exist.
    pub fn propose(
        &self,
        card: &CardId,
        game: &ChessGame,
        target: PieceId,
    ) -> Result<Option<PlayCardOnPiece>, GameError> {
        let card = self.card(card)?;
        let piece = game.piece(target).ok_or(GameError::PieceNotFound(target))?;

        let mv = card.get_move(game, piece);
        debug!(card = %card.id(), piece = %target, legal = mv.is_some(), "proposed");
        Ok(mv)
    }

    /// Every active piece `card` may target, in id order.
    pub fn legal_targets(&self, card: &CardId, game: &ChessGame) -> Result<Vec<PieceId>, GameError> {
        let card = self.card(card)?;
        Ok(game
            .pieces()
            .filter(|piece| card.get_move(game, piece).is_some())
            .map(|piece| piece.id)
            .collect())
    }

    /// Commit a validated move.
    ///
    /// The move is re-validated first: a target that was removed fails with
    /// `PieceNotFound`, a target the card now refuses (or that would yield
    /// a different move) fails with `IllegalMove`. `game` itself is never
    /// modified.
    pub fn commit(&self, game: &ChessGame, mv: &PlayCardOnPiece) -> Result<ChessGame, GameError> {
        let card = self.card(mv.card())?;
        let target = mv.target();
        let piece = game.piece(target).ok_or(GameError::PieceNotFound(target))?;

        let illegal = || GameError::IllegalMove {
            card: mv.card().clone(),
            target,
        };
        let current = card.get_move(game, piece).ok_or_else(&illegal)?;
        if current != *mv {
            return Err(illegal());
        }

        let side = game.active_side();
        let turn = game.turn_number();
        let next = card
            .apply(game, piece)?
            .record(MoveRecord::new(side, mv.clone(), turn));

        info!(card = %mv.card(), piece = %target, notation = %mv.notation(), %side, turn, "committed move");

        if !mv.ends_turn() {
            return Ok(next);
        }

        let next = next.advance_turn();
        info!(turn = next.turn_number(), side = %next.active_side(), "turn advanced");
        Ok(next)
    }
}
