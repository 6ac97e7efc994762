//! The battle engine.
//!
//! Owns the full match state and its lifecycle: round counter, both sides'
//! hands and fields, health totals, the current selection, and the shared
//! turn phase machine
//! `selecting -> committed -> resolving -> round end -> (next round | game over)`.
//!
//! Everything here is synchronous. Display pacing between phases belongs to
//! the presentation layer, which calls [`BattleEngine::resolve`] and
//! [`BattleEngine::advance_or_finish`] whenever its own timers say so; for
//! tests the operations chain back-to-back.

pub mod battle;
pub mod config;
pub mod error;
pub mod phase;
pub mod result;
pub mod side;

pub use battle::BattleEngine;
pub use config::EngineConfig;
pub use error::EngineError;
pub use phase::Phase;
pub use result::{BattleResult, MatchOutcome, RoundRecord};
pub use side::Side;
