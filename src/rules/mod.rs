//! Card resolution.
//!
//! `CardResolver` validates and commits card plays:
//! - Proposing a play on a target (pure)
//! - Enumerating legal targets for highlighting
//! - Committing a validated move (apply, record, advance turn)
//!
//! Turn order across plays is the host's concern.

pub mod engine;

pub use engine::CardResolver;
