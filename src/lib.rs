//! # card-clash
//!
//! A round-based card battle engine. One human player faces a scripted
//! opponent over a fixed number of rounds: each round both sides commit a
//! card from hand, the engine computes a damage exchange with an elemental
//! type-effectiveness bonus, and the match ends on a knockout or, after the
//! final round, an hp comparison.
//!
//! ## Design Principles
//!
//! 1. **Synchronous core**: the engine owns all match state and every
//!    operation completes immediately. Display pacing (clash animations,
//!    result delays) lives entirely in the caller.
//!
//! 2. **Deterministic**: all randomness flows through a seedable RNG.
//!    The same seed plays out the same match, action for action.
//!
//! 3. **Explicit rejection**: out-of-phase operations return
//!    [`EngineError`] without touching state, so integration mistakes are
//!    visible in tests instead of silently ignored.
//!
//! ## Modules
//!
//! - `catalog`: card definitions, the immutable catalog, drawn instances
//! - `element`: elemental types and the effectiveness multiplier
//! - `rng`: seedable deterministic RNG
//! - `dealer`: random draws with unique instance identifiers
//! - `engine`: the phase state machine and battle resolution
//!
//! ## Example
//!
//! ```
//! use card_clash::{BattleEngine, EngineConfig, CardCatalog, Phase};
//!
//! let mut engine = BattleEngine::new(CardCatalog::standard(), EngineConfig::default(), 42);
//! assert_eq!(engine.phase(), Phase::Selecting);
//! assert_eq!(engine.player_hand().len(), 5);
//!
//! let pick = engine.player_hand()[0].id;
//! engine.select_card(pick).unwrap();
//! engine.commit_battle().unwrap();
//! engine.resolve().unwrap();
//! engine.advance_or_finish().unwrap();
//! assert_eq!(engine.round(), 2);
//! ```

pub mod catalog;
pub mod dealer;
pub mod element;
pub mod engine;
pub mod rng;

// Re-export commonly used types
pub use crate::catalog::{CardCatalog, CardDefinition, CardId, CardInstance, InstanceId};
pub use crate::dealer::Dealer;
pub use crate::element::{multiplier, multiplier_for_names, Element, BONUS_MULTIPLIER};
pub use crate::engine::{
    BattleEngine, BattleResult, EngineConfig, EngineError, MatchOutcome, Phase, RoundRecord, Side,
};
pub use crate::rng::GameRng;
