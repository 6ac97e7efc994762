//! The card catalog: definition lookup.
//!
//! `CardCatalog` stores every card definition available to be drawn.
//! It is loaded once and never mutated afterwards; the dealer and the
//! engine only read from it.

use rustc_hash::FxHashMap;

use super::builtin;
use super::definition::{CardDefinition, CardId};
use crate::element::Element;

/// Immutable pool of card definitions.
///
/// Registration order is preserved so uniform draws by index are
/// deterministic under a fixed RNG seed.
///
/// ## Example
///
/// ```
/// use card_clash::{CardCatalog, CardDefinition, CardId, Element};
///
/// let mut catalog = CardCatalog::new();
/// catalog.register(
///     CardDefinition::new(CardId::new(1), "Bulbasaur", 45, 49)
///         .with_element(Element::Grass),
/// );
///
/// assert_eq!(catalog.get(CardId::new(1)).unwrap().name, "Bulbasaur");
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardCatalog {
    cards: FxHashMap<CardId, CardDefinition>,
    order: Vec<CardId>,
}

impl CardCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in fifty-card pool.
    #[must_use]
    pub fn standard() -> Self {
        builtin::standard_catalog()
    }

    /// Register a card definition.
    ///
    /// Panics if a card with the same ID already exists.
    pub fn register(&mut self, card: CardDefinition) {
        if self.cards.contains_key(&card.id) {
            panic!("Card with ID {} already registered", card.id);
        }
        self.order.push(card.id);
        self.cards.insert(card.id, card);
    }

    /// Get a card definition by ID.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&CardDefinition> {
        self.cards.get(&id)
    }

    /// Get a definition by its registration index.
    ///
    /// Used by the dealer for uniform draws.
    #[must_use]
    pub fn get_by_index(&self, index: usize) -> Option<&CardDefinition> {
        self.order.get(index).and_then(|id| self.cards.get(id))
    }

    /// Check if a card ID is registered.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.cards.contains_key(&id)
    }

    /// Get the number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterate over all definitions in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &CardDefinition> {
        self.order.iter().filter_map(|id| self.cards.get(id))
    }

    /// Find cards by element.
    pub fn find_by_element(&self, element: Element) -> impl Iterator<Item = &CardDefinition> {
        self.iter().filter(move |c| c.element == element)
    }

    /// Find cards matching a predicate.
    pub fn find<F>(&self, predicate: F) -> impl Iterator<Item = &CardDefinition>
    where
        F: Fn(&CardDefinition) -> bool,
    {
        self.iter().filter(move |c| predicate(c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(id: u32, name: &str) -> CardDefinition {
        CardDefinition::new(CardId::new(id), name, 50, 50)
    }

    #[test]
    fn test_register_and_get() {
        let mut catalog = CardCatalog::new();
        catalog.register(card(1, "Test Card"));

        let found = catalog.get(CardId::new(1));
        assert!(found.is_some());
        assert_eq!(found.unwrap().name, "Test Card");

        assert!(catalog.get(CardId::new(99)).is_none());
    }

    #[test]
    #[should_panic(expected = "already registered")]
    fn test_duplicate_id_panics() {
        let mut catalog = CardCatalog::new();
        catalog.register(card(1, "Card A"));
        catalog.register(card(1, "Card B"));
    }

    #[test]
    fn test_index_follows_registration_order() {
        let mut catalog = CardCatalog::new();
        catalog.register(card(5, "First"));
        catalog.register(card(2, "Second"));
        catalog.register(card(9, "Third"));

        assert_eq!(catalog.get_by_index(0).unwrap().name, "First");
        assert_eq!(catalog.get_by_index(1).unwrap().name, "Second");
        assert_eq!(catalog.get_by_index(2).unwrap().name, "Third");
        assert!(catalog.get_by_index(3).is_none());
    }

    #[test]
    fn test_iteration_order() {
        let mut catalog = CardCatalog::new();
        catalog.register(card(3, "A"));
        catalog.register(card(1, "B"));

        let names: Vec<_> = catalog.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B"]);
    }

    #[test]
    fn test_find_by_element() {
        let mut catalog = CardCatalog::new();
        catalog.register(card(1, "Plain"));
        catalog.register(
            CardDefinition::new(CardId::new(2), "Flame", 50, 50).with_element(Element::Fire),
        );

        let fire: Vec<_> = catalog.find_by_element(Element::Fire).collect();
        assert_eq!(fire.len(), 1);
        assert_eq!(fire[0].name, "Flame");
    }

    #[test]
    fn test_standard_pool() {
        let catalog = CardCatalog::standard();
        assert_eq!(catalog.len(), 50);

        let charizard = catalog.get(CardId::new(6)).unwrap();
        assert_eq!(charizard.name, "Charizard");
        assert_eq!(charizard.element, Element::Fire);
        assert_eq!(charizard.attack, 84);
    }
}
