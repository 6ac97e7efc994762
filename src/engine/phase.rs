//! The shared turn phase machine.

use serde::{Deserialize, Serialize};

/// Current step of the turn structure.
///
/// Exactly one phase is active for the whole match; the two sides do not
/// hold independent phases.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Phase {
    /// Waiting for the player to pick a card from hand.
    Selecting,
    /// Both field cards are placed; the exchange is locked in.
    Committed,
    /// Damage computation in progress.
    Resolving,
    /// The exchange is resolved; awaiting round-end evaluation.
    RoundEnd,
    /// Terminal. Only a full reset leaves this phase.
    GameOver,
}

impl Phase {
    /// Whether the match still accepts battle operations.
    #[must_use]
    pub fn is_active(self) -> bool {
        self != Phase::GameOver
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Phase::Selecting => "selecting",
            Phase::Committed => "committed",
            Phase::Resolving => "resolving",
            Phase::RoundEnd => "roundEnd",
            Phase::GameOver => "gameOver",
        };
        f.write_str(name)
    }
}
