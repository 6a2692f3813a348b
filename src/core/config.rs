//! Game configuration.
//!
//! Games provide a `GameConfig` when creating a `ChessGame`. The defaults
//! describe a classic two-sided game where White moves first.
//!
//! Fields are private so a config is always valid: `new` asserts the
//! limits, `try_new` and deserialization report them as errors.

use serde::{Deserialize, Serialize};

use super::error::GameError;
use super::side::Side;

/// Most sides a game can have; `Side` is a `u8`.
pub const MAX_SIDES: usize = 255;

/// Complete game configuration.
///
/// ## Example
///
/// ```
/// use chess_cards::core::{GameConfig, Side};
///
/// let config = GameConfig::new(4).with_first_side(Side::new(2));
/// assert_eq!(config.side_count(), 4);
/// assert_eq!(config.first_side(), Side::new(2));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGameConfig")]
pub struct GameConfig {
    /// Number of sides (1-255).
    side_count: usize,

    /// Side to move on turn 1.
    first_side: Side,
}

/// Unchecked wire form of `GameConfig`.
#[derive(Deserialize)]
struct RawGameConfig {
    side_count: usize,
    first_side: Side,
}

impl TryFrom<RawGameConfig> for GameConfig {
    type Error = GameError;

    fn try_from(raw: RawGameConfig) -> Result<Self, Self::Error> {
        Self::try_new(raw.side_count, raw.first_side)
    }
}

impl GameConfig {
    /// Create a new game configuration.
    pub fn new(side_count: usize) -> Self {
        assert!(side_count > 0, "Must have at least 1 side");
        assert!(side_count <= MAX_SIDES, "At most 255 sides supported");

        Self {
            side_count,
            first_side: Side::new(0),
        }
    }

    /// Create a configuration, reporting out-of-range values as errors.
    pub fn try_new(side_count: usize, first_side: Side) -> Result<Self, GameError> {
        if side_count == 0 || side_count > MAX_SIDES {
            return Err(GameError::InvalidConfig(format!(
                "side count {} outside 1..={}",
                side_count, MAX_SIDES
            )));
        }
        if first_side.index() >= side_count {
            return Err(GameError::InvalidConfig(format!(
                "first side {} out of range for {} sides",
                first_side.index(),
                side_count
            )));
        }
        Ok(Self {
            side_count,
            first_side,
        })
    }

    /// Set the side that moves first.
    #[must_use]
    pub fn with_first_side(mut self, side: Side) -> Self {
        assert!(side.index() < self.side_count, "First side out of range");
        self.first_side = side;
        self
    }

    /// Number of sides.
    #[must_use]
    pub fn side_count(&self) -> usize {
        self.side_count
    }

    /// Side to move on turn 1.
    #[must_use]
    pub fn first_side(&self) -> Side {
        self.first_side
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(2)
    }
}
