//! Elemental types and the effectiveness multiplier.
//!
//! The chart is asymmetric and bonus-only: an attacker whose element lists
//! the defender's element deals `1.5x` damage, every other matchup is `1.0x`.
//! There is no resistance below `1.0`.
//!
//! The chart is static data for the process lifetime. Lookups are pure
//! functions with no failure modes: an unknown element name simply has an
//! empty strong-against set and produces a `1.0` multiplier.

use serde::{Deserialize, Serialize};

/// Damage bonus applied on a strong elemental matchup.
pub const BONUS_MULTIPLIER: f64 = 1.5;

/// Elemental type of a card.
///
/// Cards that declare no element default to [`Element::Normal`], which is
/// strong against nothing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    #[default]
    Normal,
    Fire,
    Water,
    Grass,
    Electric,
    Ice,
    Fighting,
    Poison,
    Ground,
    Flying,
    Psychic,
    Bug,
    Rock,
    Ghost,
    Dragon,
    Steel,
    Dark,
    Fairy,
}

impl Element {
    /// Parse an element from its name, case-insensitively.
    ///
    /// Returns `None` for names outside the chart.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.to_ascii_lowercase();
        Some(match lower.as_str() {
            "normal" => Self::Normal,
            "fire" => Self::Fire,
            "water" => Self::Water,
            "grass" => Self::Grass,
            "electric" => Self::Electric,
            "ice" => Self::Ice,
            "fighting" => Self::Fighting,
            "poison" => Self::Poison,
            "ground" => Self::Ground,
            "flying" => Self::Flying,
            "psychic" => Self::Psychic,
            "bug" => Self::Bug,
            "rock" => Self::Rock,
            "ghost" => Self::Ghost,
            "dragon" => Self::Dragon,
            "steel" => Self::Steel,
            "dark" => Self::Dark,
            "fairy" => Self::Fairy,
            _ => return None,
        })
    }

    /// The element's lowercase name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Fire => "fire",
            Self::Water => "water",
            Self::Grass => "grass",
            Self::Electric => "electric",
            Self::Ice => "ice",
            Self::Fighting => "fighting",
            Self::Poison => "poison",
            Self::Ground => "ground",
            Self::Flying => "flying",
            Self::Psychic => "psychic",
            Self::Bug => "bug",
            Self::Rock => "rock",
            Self::Ghost => "ghost",
            Self::Dragon => "dragon",
            Self::Steel => "steel",
            Self::Dark => "dark",
            Self::Fairy => "fairy",
        }
    }

    /// Elements this element deals bonus damage to.
    ///
    /// Key is the attacker; the listed elements are the defenders it is
    /// strong against. Normal is strong against nothing.
    #[must_use]
    pub fn strong_against(self) -> &'static [Element] {
        use Element::*;
        match self {
            Fire => &[Grass, Ice, Bug, Steel],
            Water => &[Fire, Ground, Rock],
            Grass => &[Water, Ground, Rock],
            Electric => &[Water, Flying],
            Ice => &[Grass, Ground, Flying, Dragon],
            Fighting => &[Normal, Ice, Rock, Dark, Steel],
            Poison => &[Grass, Fairy],
            Ground => &[Fire, Electric, Poison, Rock, Steel],
            Flying => &[Grass, Fighting, Bug],
            Psychic => &[Fighting, Poison],
            Bug => &[Grass, Psychic, Dark],
            Rock => &[Fire, Ice, Flying, Bug],
            Ghost => &[Psychic, Ghost],
            Dragon => &[Dragon],
            Steel => &[Ice, Rock, Fairy],
            Dark => &[Psychic, Ghost],
            Fairy => &[Fighting, Dragon, Dark],
            Normal => &[],
        }
    }

    /// Check whether an attack of this element is boosted against `defender`.
    #[must_use]
    pub fn is_strong_against(self, defender: Element) -> bool {
        self.strong_against().contains(&defender)
    }
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Damage multiplier for an attacker/defender element pair.
///
/// `1.5` when the attacker is strong against the defender, `1.0` otherwise.
#[must_use]
pub fn multiplier(attacker: Element, defender: Element) -> f64 {
    if attacker.is_strong_against(defender) {
        BONUS_MULTIPLIER
    } else {
        1.0
    }
}

/// Name-based multiplier lookup for callers holding raw strings.
///
/// `None` defaults to `"normal"`. Names are matched case-insensitively, and
/// an unrecognized name on either side never produces a bonus.
#[must_use]
pub fn multiplier_for_names(attacker: Option<&str>, defender: Option<&str>) -> f64 {
    let attacker = Element::from_name(attacker.unwrap_or("normal"));
    let defender = Element::from_name(defender.unwrap_or("normal"));
    match (attacker, defender) {
        (Some(a), Some(d)) => multiplier(a, d),
        _ => 1.0,
    }
}
