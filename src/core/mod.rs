//! Core game types: piece identities, sides, pieces, configuration, state.
//!
//! This module holds the minimal board model the card contract operates on.
//! It is not a chess rules engine: there are no squares or movement rules,
//! only the pieces a card may target and the turn bookkeeping around them.

pub mod entity;
pub mod side;
pub mod piece;
pub mod config;
pub mod error;
pub mod state;

pub use entity::PieceId;
pub use side::Side;
pub use piece::{Piece, PieceKind};
pub use config::GameConfig;
pub use error::GameError;
pub use state::{ChessGame, Removal};
