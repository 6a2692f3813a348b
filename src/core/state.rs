//! Game state.
//!
//! ## ChessGame
//!
//! The aggregate root: active pieces, the removal log, committed move
//! history, turn number and side to move.
//!
//! ## Value semantics
//!
//! Mutating operations take `&self` and return a new `ChessGame`. Backed by
//! `im` persistent data structures, so the copy is O(1) and the previous
//! state stays intact for audit, undo, or speculative evaluation.

use im::{OrdMap, Vector};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::config::GameConfig;
use super::entity::PieceId;
use super::error::GameError;
use super::piece::{Piece, PieceKind};
use super::side::Side;
use crate::moves::MoveRecord;

/// A piece taken out of the game, tagged with why.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Removal {
    /// Snapshot of the piece at removal time.
    pub piece: Piece,

    /// Free-form reason code (e.g. `"banished"`).
    pub reason: String,

    /// Turn number when the piece was removed.
    pub turn: u32,
}

/// Full game state.
///
/// ## Example
///
/// ```
/// use chess_cards::core::{ChessGame, PieceKind, Side};
///
/// let (game, knight) = ChessGame::default().add_piece(Side::WHITE, PieceKind::Knight).unwrap();
///
/// let after = game.remove_piece(knight, "captured").unwrap();
/// assert!(game.contains(knight));
/// assert!(!after.contains(knight));
/// assert_eq!(after.removals()[0].reason, "captured");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GameSnapshot")]
pub struct ChessGame {
    config: GameConfig,

    /// Active pieces by id.
    pieces: OrdMap<PieceId, Piece>,

    /// Pieces removed so far, in removal order.
    removals: Vector<Removal>,

    /// Committed moves, in commit order.
    history: Vector<MoveRecord>,

    /// Turn number (starts at 1).
    turn_number: u32,

    /// Side to move.
    active_side: Side,

    /// Next piece id to allocate.
    next_piece_id: PieceId,
}

/// Unchecked wire form of `ChessGame`.
#[derive(Deserialize)]
struct GameSnapshot {
    config: GameConfig,
    pieces: OrdMap<PieceId, Piece>,
    removals: Vector<Removal>,
    history: Vector<MoveRecord>,
    turn_number: u32,
    active_side: Side,
    next_piece_id: PieceId,
}

impl TryFrom<GameSnapshot> for ChessGame {
    type Error = GameError;

    /// Rejects snapshots that would hand out an id twice or give the move
    /// to a side outside the config.
    fn try_from(snapshot: GameSnapshot) -> Result<Self, Self::Error> {
        if snapshot.active_side.index() >= snapshot.config.side_count() {
            return Err(GameError::InvalidState(format!(
                "active side {} out of range for {} sides",
                snapshot.active_side.index(),
                snapshot.config.side_count()
            )));
        }
        if let Some((id, piece)) = snapshot.pieces.iter().find(|(id, piece)| piece.id != **id) {
            return Err(GameError::InvalidState(format!(
                "{} stored under {}",
                piece.id, id
            )));
        }
        let highest = snapshot
            .pieces
            .keys()
            .copied()
            .chain(snapshot.removals.iter().map(|r| r.piece.id))
            .max();
        if let Some(highest) = highest {
            if highest >= snapshot.next_piece_id {
                return Err(GameError::InvalidState(format!(
                    "next id {} already allocated to {}",
                    snapshot.next_piece_id, highest
                )));
            }
        }

        Ok(Self {
            config: snapshot.config,
            pieces: snapshot.pieces,
            removals: snapshot.removals,
            history: snapshot.history,
            turn_number: snapshot.turn_number,
            active_side: snapshot.active_side,
            next_piece_id: snapshot.next_piece_id,
        })
    }
}

impl ChessGame {
    /// Create an empty game.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self {
            active_side: config.first_side(),
            config,
            pieces: OrdMap::new(),
            removals: Vector::new(),
            history: Vector::new(),
            turn_number: 1,
            next_piece_id: PieceId::new(0),
        }
    }

    /// Get the configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    // === Pieces ===

    /// Add a piece with the default description.
    ///
    /// Returns the new game and the allocated id.
    pub fn add_piece(&self, side: Side, kind: PieceKind) -> Result<(Self, PieceId), GameError> {
        self.add_piece_with(|id| Piece::new(id, side, kind))
    }

    /// Add a piece built from the allocated id.
    ///
    /// The builder's returned `id` is overwritten with the allocated one.
    /// Fails with `PieceIdsExhausted` once the id space is used up.
    pub fn add_piece_with(
        &self,
        build: impl FnOnce(PieceId) -> Piece,
    ) -> Result<(Self, PieceId), GameError> {
        let id = self.next_piece_id;
        let following = id.next().ok_or(GameError::PieceIdsExhausted)?;
        let mut piece = build(id);
        piece.id = id;

        let mut next = self.clone();
        next.pieces.insert(id, piece);
        next.next_piece_id = following;
        Ok((next, id))
    }

    /// Get an active piece.
    #[must_use]
    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.get(&id)
    }

    /// Check if a piece is active.
    #[must_use]
    pub fn contains(&self, id: PieceId) -> bool {
        self.pieces.contains_key(&id)
    }

    /// Iterate over active pieces in id order.
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> {
        self.pieces.values()
    }

    /// Iterate over active piece ids in id order.
    pub fn piece_ids(&self) -> impl Iterator<Item = PieceId> + '_ {
        self.pieces.keys().copied()
    }

    /// Number of active pieces.
    #[must_use]
    pub fn piece_count(&self) -> usize {
        self.pieces.len()
    }

    /// Remove an active piece, tagging the removal with `reason`.
    ///
    /// Touches nothing else: turn number and side to move are unchanged.
    /// Fails with `PieceNotFound` if the piece is not active, so replaying
    /// a stale move cannot silently succeed.
    pub fn remove_piece(&self, id: PieceId, reason: impl Into<String>) -> Result<Self, GameError> {
        let mut next = self.clone();
        let piece = next.pieces.remove(&id).ok_or(GameError::PieceNotFound(id))?;
        let reason = reason.into();

        debug!(piece = %id, description = %piece.description, reason = %reason, "removing piece");

        next.removals.push_back(Removal {
            piece,
            reason,
            turn: self.turn_number,
        });
        Ok(next)
    }

    /// Pieces removed so far, in removal order.
    #[must_use]
    pub fn removals(&self) -> &Vector<Removal> {
        &self.removals
    }

    /// Find the removal record of a piece.
    #[must_use]
    pub fn removal_of(&self, id: PieceId) -> Option<&Removal> {
        self.removals.iter().find(|r| r.piece.id == id)
    }

    // === Turns ===

    /// Turn number (starts at 1).
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// Side to move.
    #[must_use]
    pub fn active_side(&self) -> Side {
        self.active_side
    }

    /// Advance to the next turn, passing the move to the next side.
    #[must_use]
    pub fn advance_turn(&self) -> Self {
        let mut next = self.clone();
        next.turn_number += 1;
        next.active_side = self.active_side.next(self.config.side_count());
        next
    }

    // === History ===

    /// Committed moves, in commit order.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    /// Record a committed move.
    #[must_use]
    pub fn record(&self, record: MoveRecord) -> Self {
        let mut next = self.clone();
        next.history.push_back(record);
        next
    }
}

impl Default for ChessGame {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
