//! The deck/draw service.
//!
//! Draws are uniform over the catalog **with replacement**: the same catalog
//! card may show up several times in a match, even duplicated in one hand.
//! Every draw allocates a fresh `InstanceId` from a monotonic counter, so
//! instance identifiers never collide within a match.

use smallvec::SmallVec;

use crate::catalog::{CardCatalog, CardInstance, InstanceId};
use crate::rng::GameRng;

/// Produces uniquely-identified card instances drawn from a catalog.
///
/// The catalog is fixed at construction and never mutated by draws.
///
/// ## Example
///
/// ```
/// use card_clash::{CardCatalog, Dealer, GameRng};
///
/// let mut dealer = Dealer::new(CardCatalog::standard(), GameRng::new(42));
/// let hand = dealer.draw_many(5);
/// assert_eq!(hand.len(), 5);
/// ```
#[derive(Clone, Debug)]
pub struct Dealer {
    catalog: CardCatalog,
    rng: GameRng,
    next_instance: u64,
}

impl Dealer {
    /// Create a dealer over a catalog.
    ///
    /// Panics if the catalog is empty; an empty pool is a configuration
    /// error, not a condition draws can recover from.
    #[must_use]
    pub fn new(catalog: CardCatalog, rng: GameRng) -> Self {
        assert!(!catalog.is_empty(), "Card catalog must not be empty");
        Self {
            catalog,
            rng,
            next_instance: 0,
        }
    }

    /// The catalog this dealer draws from.
    #[must_use]
    pub fn catalog(&self) -> &CardCatalog {
        &self.catalog
    }

    /// How many instances have been dealt so far.
    #[must_use]
    pub fn dealt_count(&self) -> u64 {
        self.next_instance
    }

    /// Draw one card instance, uniform over the catalog.
    pub fn draw_one(&mut self) -> CardInstance {
        let index = self.rng.gen_index(self.catalog.len());
        let definition = self
            .catalog
            .get_by_index(index)
            .expect("draw index within catalog bounds")
            .clone();

        let id = InstanceId::new(self.next_instance);
        self.next_instance += 1;
        CardInstance::new(id, definition)
    }

    /// Draw `count` card instances in order.
    pub fn draw_many(&mut self, count: usize) -> SmallVec<[CardInstance; 8]> {
        (0..count).map(|_| self.draw_one()).collect()
    }

    /// Pick a uniform index into `len` choices.
    ///
    /// Used by the engine for the opponent's card pick so the whole match
    /// consumes a single RNG stream.
    pub(crate) fn pick_index(&mut self, len: usize) -> usize {
        self.rng.gen_index(len)
    }
}
