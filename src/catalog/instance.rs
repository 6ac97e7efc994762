//! Card instances - drawn copies of catalog entries.
//!
//! A `CardInstance` is a catalog definition plus an identifier assigned at
//! draw time. Instance identity, never hand position, is the key used for
//! selection, field placement and removal.

use serde::{Deserialize, Serialize};

use super::definition::{CardDefinition, CardId};
use crate::element::Element;

/// Unique identifier for a drawn card instance.
///
/// Allocated monotonically by the dealer; distinct across the entire match
/// even when the same catalog card is drawn twice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct InstanceId(pub u64);

impl InstanceId {
    /// Create a new instance ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for InstanceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Instance({})", self.0)
    }
}

/// A drawn card in a match.
///
/// Carries its definition by value: draws are with replacement, so the
/// instance is the single source of truth for the copy's stats once it
/// leaves the catalog.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardInstance {
    /// Unique identity of this copy.
    pub id: InstanceId,

    /// The catalog definition this copy was drawn from.
    pub card: CardDefinition,
}

impl CardInstance {
    /// Create an instance from a definition.
    #[must_use]
    pub fn new(id: InstanceId, card: CardDefinition) -> Self {
        Self { id, card }
    }

    /// Catalog identity of the underlying definition.
    #[must_use]
    pub fn card_id(&self) -> CardId {
        self.card.id
    }

    /// Attack value of this copy.
    #[must_use]
    pub fn attack(&self) -> i64 {
        self.card.attack
    }

    /// Elemental type of this copy.
    #[must_use]
    pub fn element(&self) -> Element {
        self.card.element
    }

    /// Card name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.card.name
    }
}
