//! Per-side match state: hand, field slot, and health.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::catalog::{CardInstance, InstanceId};

/// One side of the match (the player or the scripted opponent).
///
/// A card lives in exactly one place at a time: the hand, the field slot,
/// or nowhere once discarded after resolution. Hand order is draw order.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Side {
    hand: SmallVec<[CardInstance; 8]>,
    field: Option<CardInstance>,
    hp: i64,
    max_hp: i64,
}

impl Side {
    /// Create a side at full health with an empty hand.
    #[must_use]
    pub fn new(max_hp: i64) -> Self {
        Self {
            hand: SmallVec::new(),
            field: None,
            hp: max_hp,
            max_hp,
        }
    }

    /// Current health, always within `0..=max_hp`.
    #[must_use]
    pub fn hp(&self) -> i64 {
        self.hp
    }

    /// Health ceiling.
    #[must_use]
    pub fn max_hp(&self) -> i64 {
        self.max_hp
    }

    /// Cards in hand, in draw order.
    #[must_use]
    pub fn hand(&self) -> &[CardInstance] {
        &self.hand
    }

    /// The committed field card, if any.
    #[must_use]
    pub fn field(&self) -> Option<&CardInstance> {
        self.field.as_ref()
    }

    /// Whether `id` is currently in this side's hand.
    #[must_use]
    pub fn hand_contains(&self, id: InstanceId) -> bool {
        self.hand.iter().any(|c| c.id == id)
    }

    /// Append a drawn card to the hand.
    pub fn add_to_hand(&mut self, card: CardInstance) {
        self.hand.push(card);
    }

    /// Remove a card from the hand by identity.
    pub fn take_from_hand(&mut self, id: InstanceId) -> Option<CardInstance> {
        let position = self.hand.iter().position(|c| c.id == id)?;
        Some(self.hand.remove(position))
    }

    /// Remove a card from the hand by position (the opponent's random pick).
    ///
    /// Panics if `index` is out of bounds.
    pub fn take_from_hand_at(&mut self, index: usize) -> CardInstance {
        self.hand.remove(index)
    }

    /// Place a card on the field slot.
    ///
    /// Panics if the slot is occupied; a side never fields two cards.
    pub fn place_on_field(&mut self, card: CardInstance) {
        assert!(self.field.is_none(), "Field slot already occupied");
        self.field = Some(card);
    }

    /// Clear the field slot, discarding the card.
    pub fn take_field(&mut self) -> Option<CardInstance> {
        self.field.take()
    }

    /// Apply damage, clamping at zero.
    pub fn apply_damage(&mut self, amount: i64) {
        self.hp = (self.hp - amount).max(0);
    }

    /// Restore to full health with empty hand and field.
    pub fn reset(&mut self) {
        self.hand.clear();
        self.field = None;
        self.hp = self.max_hp;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CardDefinition, CardId};

    fn instance(id: u64) -> CardInstance {
        CardInstance::new(
            InstanceId::new(id),
            CardDefinition::new(CardId::new(1), "Test", 50, 50),
        )
    }

    #[test]
    fn test_new_side() {
        let side = Side::new(500);
        assert_eq!(side.hp(), 500);
        assert_eq!(side.max_hp(), 500);
        assert!(side.hand().is_empty());
        assert!(side.field().is_none());
    }

    #[test]
    fn test_hand_order_is_insertion_order() {
        let mut side = Side::new(500);
        side.add_to_hand(instance(1));
        side.add_to_hand(instance(2));
        side.add_to_hand(instance(3));

        let ids: Vec<_> = side.hand().iter().map(|c| c.id.raw()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_take_from_hand_by_identity() {
        let mut side = Side::new(500);
        side.add_to_hand(instance(1));
        side.add_to_hand(instance(2));

        let taken = side.take_from_hand(InstanceId::new(1)).unwrap();
        assert_eq!(taken.id, InstanceId::new(1));
        assert_eq!(side.hand().len(), 1);
        assert!(!side.hand_contains(InstanceId::new(1)));

        assert!(side.take_from_hand(InstanceId::new(99)).is_none());
    }

    #[test]
    fn test_field_placement() {
        let mut side = Side::new(500);
        side.place_on_field(instance(1));
        assert_eq!(side.field().unwrap().id, InstanceId::new(1));

        let discarded = side.take_field().unwrap();
        assert_eq!(discarded.id, InstanceId::new(1));
        assert!(side.field().is_none());
    }

    #[test]
    #[should_panic(expected = "already occupied")]
    fn test_double_field_placement_panics() {
        let mut side = Side::new(500);
        side.place_on_field(instance(1));
        side.place_on_field(instance(2));
    }

    #[test]
    fn test_damage_clamps_at_zero() {
        let mut side = Side::new(100);
        side.apply_damage(40);
        assert_eq!(side.hp(), 60);

        side.apply_damage(1000);
        assert_eq!(side.hp(), 0);
    }

    #[test]
    fn test_reset() {
        let mut side = Side::new(100);
        side.add_to_hand(instance(1));
        side.place_on_field(instance(2));
        side.apply_damage(50);

        side.reset();
        assert_eq!(side.hp(), 100);
        assert!(side.hand().is_empty());
        assert!(side.field().is_none());
    }
}
