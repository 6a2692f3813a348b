//! Side identification.
//!
//! ## Side
//!
//! Type-safe identifier for a side of the board, supporting 1-255 sides.
//! The classic game has two: `Side::WHITE` and `Side::BLACK`.

use serde::{Deserialize, Serialize};

use super::config::MAX_SIDES;

/// Side identifier supporting 1-255 sides.
///
/// Side indices are 0-based: the first side to move is usually `Side(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Side(pub u8);

impl Side {
    /// First side in a two-sided game.
    pub const WHITE: Side = Side(0);

    /// Second side in a two-sided game.
    pub const BLACK: Side = Side(1);

    /// Create a new side.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw side index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The side that moves after this one in a game of `side_count` sides.
    ///
    /// `side_count` is clamped to 1..=255, so this never divides by zero
    /// or wraps past `u8`.
    ///
    /// ```
    /// use chess_cards::core::Side;
    ///
    /// assert_eq!(Side::WHITE.next(2), Side::BLACK);
    /// assert_eq!(Side::BLACK.next(2), Side::WHITE);
    /// assert_eq!(Side::new(2).next(4), Side::new(3));
    /// ```
    #[must_use]
    pub fn next(self, side_count: usize) -> Self {
        let side_count = side_count.clamp(1, MAX_SIDES);
        Self(((self.index() + 1) % side_count) as u8)
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            Side::WHITE => write!(f, "White"),
            Side::BLACK => write!(f, "Black"),
            Side(n) => write!(f, "Side {}", n),
        }
    }
}
