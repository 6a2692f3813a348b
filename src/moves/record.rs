//! Committed move records.
//!
//! Used for:
//! - Move history on `ChessGame`
//! - Replay/debugging

use serde::{Deserialize, Serialize};

use super::play::PlayCardOnPiece;
use crate::core::Side;

/// A committed move with the context it was played in.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The side that played the move.
    pub side: Side,

    /// The move played.
    pub play: PlayCardOnPiece,

    /// Turn number when the move was committed.
    pub turn: u32,
}

impl MoveRecord {
    /// Create a new move record.
    #[must_use]
    pub fn new(side: Side, play: PlayCardOnPiece, turn: u32) -> Self {
        Self { side, play, turn }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardId;
    use crate::core::PieceId;
    use crate::moves::Notation;

    #[test]
    fn test_move_record() {
        let play = PlayCardOnPiece::new(
            CardId::from_title("Banish"),
            "Banish",
            PieceId(2),
            Notation::new("🫥", "Black Pawn"),
        );
        let record = MoveRecord::new(Side::BLACK, play.clone(), 3);

        assert_eq!(record.side, Side::BLACK);
        assert_eq!(record.play, play);
        assert_eq!(record.turn, 3);

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: MoveRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, deserialized);
    }
}
