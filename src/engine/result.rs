//! Battle outcomes: per-round results and the final match outcome.

use serde::{Deserialize, Serialize};

use crate::catalog::CardInstance;

/// Final outcome of a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchOutcome {
    /// The player knocked the opponent out, or led on hp after the final
    /// round. Simultaneous knockout also falls here by rule order.
    Player,
    /// The opponent won.
    Opponent,
    /// Exactly equal hp after the final round.
    Draw,
}

impl std::fmt::Display for MatchOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            MatchOutcome::Player => "player",
            MatchOutcome::Opponent => "opponent",
            MatchOutcome::Draw => "draw",
        };
        f.write_str(name)
    }
}

/// Result of one resolved exchange.
///
/// The committed cards ride along so the presentation layer can still show
/// the exchange after both field slots are cleared.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BattleResult {
    /// Card the player committed.
    pub player_card: CardInstance,

    /// Card the opponent committed.
    pub opponent_card: CardInstance,

    /// Damage dealt to the opponent, after the player's multiplier.
    pub damage_to_opponent: i64,

    /// Damage dealt to the player, after the opponent's multiplier.
    pub damage_to_player: i64,

    /// Whether the player's attack got the effectiveness bonus.
    pub player_boosted: bool,

    /// Whether the opponent's attack got the effectiveness bonus.
    pub opponent_boosted: bool,
}

impl BattleResult {
    /// Human-readable one-line summary from the player's point of view.
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "You dealt {} damage and took {} damage!",
            self.damage_to_opponent, self.damage_to_player
        )
    }
}

/// History entry: one resolved round.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// Round number the exchange happened in (1-based).
    pub round: u32,

    /// The resolved exchange.
    pub result: BattleResult,
}
