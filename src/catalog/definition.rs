//! Card definitions - static card data.
//!
//! `CardDefinition` holds the immutable properties of a card: its printed
//! health and attack, elemental type, flavor text, and artwork reference.
//! A definition describes the card as it exists in the catalog, not a copy
//! in play; drawn copies are `CardInstance` values.

use serde::{Deserialize, Serialize};

use crate::element::Element;

/// Unique identifier for a card definition.
///
/// Identifies the catalog entry (e.g., "Charizard"), not a specific drawn
/// copy in a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Static card definition.
///
/// ## Example
///
/// ```
/// use card_clash::{CardDefinition, CardId, Element};
///
/// let card = CardDefinition::new(CardId::new(6), "Charizard", 78, 84)
///     .with_element(Element::Fire)
///     .with_description("Flame Pokemon");
///
/// assert_eq!(card.attack, 84);
/// assert_eq!(card.element, Element::Fire);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardDefinition {
    /// Unique identifier for this card definition.
    pub id: CardId,

    /// Card name.
    pub name: String,

    /// Printed health value.
    pub hp: i64,

    /// Printed attack value.
    pub attack: i64,

    /// Elemental type. Cards that declare none are `Normal`.
    #[serde(default)]
    pub element: Element,

    /// Flavor text.
    #[serde(default)]
    pub description: String,

    /// Artwork reference (URL or asset key). The engine never dereferences it.
    #[serde(default)]
    pub image_ref: String,
}

impl CardDefinition {
    /// Create a new card definition with no element (defaults to Normal).
    #[must_use]
    pub fn new(id: CardId, name: impl Into<String>, hp: i64, attack: i64) -> Self {
        Self {
            id,
            name: name.into(),
            hp,
            attack,
            element: Element::Normal,
            description: String::new(),
            image_ref: String::new(),
        }
    }

    /// Set the elemental type (builder pattern).
    #[must_use]
    pub fn with_element(mut self, element: Element) -> Self {
        self.element = element;
        self
    }

    /// Set the flavor text.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the artwork reference.
    #[must_use]
    pub fn with_image(mut self, image_ref: impl Into<String>) -> Self {
        self.image_ref = image_ref.into();
        self
    }
}
