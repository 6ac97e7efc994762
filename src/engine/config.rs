//! Engine configuration.
//!
//! Fixed defaults from the base game, overridable at construction.

use serde::{Deserialize, Serialize};

use crate::element::BONUS_MULTIPLIER;

/// Match configuration.
///
/// ## Example
///
/// ```
/// use card_clash::EngineConfig;
///
/// let config = EngineConfig::default()
///     .with_max_rounds(3)
///     .with_max_hp(200);
///
/// assert_eq!(config.max_rounds, 3);
/// assert_eq!(config.starting_hand_size, 5);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Rounds before the match falls back to an hp comparison.
    pub max_rounds: u32,

    /// Cards dealt to each side at match start.
    pub starting_hand_size: usize,

    /// Starting (and maximum) hp per side.
    pub max_hp: i64,

    /// Damage bonus on a strong elemental matchup.
    pub bonus_multiplier: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_rounds: 5,
            starting_hand_size: 5,
            max_hp: 500,
            bonus_multiplier: BONUS_MULTIPLIER,
        }
    }
}

impl EngineConfig {
    /// Override the round limit.
    #[must_use]
    pub fn with_max_rounds(mut self, max_rounds: u32) -> Self {
        assert!(max_rounds >= 1, "Match needs at least one round");
        self.max_rounds = max_rounds;
        self
    }

    /// Override the starting hand size.
    #[must_use]
    pub fn with_starting_hand_size(mut self, size: usize) -> Self {
        assert!(size >= 1, "Hands need at least one card");
        self.starting_hand_size = size;
        self
    }

    /// Override the per-side hp total.
    #[must_use]
    pub fn with_max_hp(mut self, max_hp: i64) -> Self {
        assert!(max_hp > 0, "Max hp must be positive");
        self.max_hp = max_hp;
        self
    }

    /// Override the effectiveness bonus.
    #[must_use]
    pub fn with_bonus_multiplier(mut self, bonus: f64) -> Self {
        assert!(bonus >= 1.0, "Bonus multiplier cannot be a penalty");
        self.bonus_multiplier = bonus;
        self
    }
}
