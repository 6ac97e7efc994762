//! Engine error types.
//!
//! Out-of-phase or malformed operations are rejected without mutating
//! state. Fatal invariant violations (empty catalog, empty opponent hand at
//! commit) are not errors; they panic.

use thiserror::Error;

use crate::catalog::InstanceId;
use crate::engine::phase::Phase;

/// A rejected engine operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    /// The operation is not legal in the current phase.
    #[error("cannot {operation} during {phase}")]
    InvalidPhase {
        /// The operation that was attempted.
        operation: &'static str,
        /// The phase the engine was in.
        phase: Phase,
    },

    /// `commit_battle` was called with no card selected.
    #[error("no card selected")]
    NoSelection,

    /// The referenced instance is not in the player's hand.
    #[error("card {0} is not in hand")]
    CardNotInHand(InstanceId),
}
