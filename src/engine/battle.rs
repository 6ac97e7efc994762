//! Battle resolution: the match state machine.

use im::Vector;

use crate::catalog::{CardCatalog, CardInstance, InstanceId};
use crate::dealer::Dealer;
use crate::engine::config::EngineConfig;
use crate::engine::error::EngineError;
use crate::engine::phase::Phase;
use crate::engine::result::{BattleResult, MatchOutcome, RoundRecord};
use crate::engine::side::Side;
use crate::rng::GameRng;

/// The battle engine: one match between the player and a scripted opponent.
///
/// The engine exclusively owns and mutates all match state. A presentation
/// layer reads the accessors and invokes the operations; it never reaches
/// into hands, fields or hp directly.
///
/// ## Lifecycle
///
/// ```text
/// select_card -> commit_battle -> resolve -> advance_or_finish
///      ^                                          |
///      +---------------- next round --------------+
/// ```
///
/// `advance_or_finish` either deals one fresh card per side and returns to
/// selection, or ends the match with a [`MatchOutcome`].
///
/// ## Example
///
/// ```
/// use card_clash::{BattleEngine, CardCatalog, EngineConfig};
///
/// let mut engine = BattleEngine::new(CardCatalog::standard(), EngineConfig::default(), 42);
/// let pick = engine.player_hand()[0].id;
///
/// engine.select_card(pick).unwrap();
/// engine.commit_battle().unwrap();
/// let result = engine.resolve().unwrap();
/// assert!(result.damage_to_opponent >= 0);
/// ```
#[derive(Clone, Debug)]
pub struct BattleEngine {
    config: EngineConfig,
    dealer: Dealer,
    phase: Phase,
    round: u32,
    player: Side,
    opponent: Side,
    selected: Option<InstanceId>,
    last_result: Option<BattleResult>,
    outcome: Option<MatchOutcome>,
    history: Vector<RoundRecord>,
}

impl BattleEngine {
    /// Start a fresh match.
    ///
    /// Deals `starting_hand_size` cards to each side and enters
    /// [`Phase::Selecting`] at round 1. Panics if the catalog is empty.
    #[must_use]
    pub fn new(catalog: CardCatalog, config: EngineConfig, seed: u64) -> Self {
        let mut dealer = Dealer::new(catalog, GameRng::new(seed));

        let mut player = Side::new(config.max_hp);
        let mut opponent = Side::new(config.max_hp);
        for card in dealer.draw_many(config.starting_hand_size) {
            player.add_to_hand(card);
        }
        for card in dealer.draw_many(config.starting_hand_size) {
            opponent.add_to_hand(card);
        }

        Self {
            config,
            dealer,
            phase: Phase::Selecting,
            round: 1,
            player,
            opponent,
            selected: None,
            last_result: None,
            outcome: None,
            history: Vector::new(),
        }
    }

    // === Observable state ===

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Current round, `1..=max_rounds` while the match is active.
    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Round limit.
    #[must_use]
    pub fn max_rounds(&self) -> u32 {
        self.config.max_rounds
    }

    /// The configuration this match runs under.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The catalog cards are drawn from.
    #[must_use]
    pub fn catalog(&self) -> &CardCatalog {
        self.dealer.catalog()
    }

    /// The player's hand, in draw order.
    #[must_use]
    pub fn player_hand(&self) -> &[CardInstance] {
        self.player.hand()
    }

    /// The opponent's hand, in draw order.
    #[must_use]
    pub fn opponent_hand(&self) -> &[CardInstance] {
        self.opponent.hand()
    }

    /// The player's committed field card.
    #[must_use]
    pub fn player_field(&self) -> Option<&CardInstance> {
        self.player.field()
    }

    /// The opponent's committed field card.
    #[must_use]
    pub fn opponent_field(&self) -> Option<&CardInstance> {
        self.opponent.field()
    }

    /// The player's hp.
    #[must_use]
    pub fn player_hp(&self) -> i64 {
        self.player.hp()
    }

    /// The opponent's hp.
    #[must_use]
    pub fn opponent_hp(&self) -> i64 {
        self.opponent.hp()
    }

    /// The player's currently selected card, if any.
    #[must_use]
    pub fn selected_card(&self) -> Option<InstanceId> {
        self.selected
    }

    /// Result of the most recently resolved exchange.
    #[must_use]
    pub fn last_result(&self) -> Option<&BattleResult> {
        self.last_result.as_ref()
    }

    /// Final outcome, present only once the match is over.
    #[must_use]
    pub fn outcome(&self) -> Option<MatchOutcome> {
        self.outcome
    }

    /// All resolved rounds, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<RoundRecord> {
        &self.history
    }

    // === Operations ===

    /// Select a card from the player's hand.
    ///
    /// Valid only while selecting; a new selection replaces any prior one.
    /// The opponent is unaffected until commit.
    pub fn select_card(&mut self, id: InstanceId) -> Result<(), EngineError> {
        self.require_phase("select a card", Phase::Selecting)?;
        if !self.player.hand_contains(id) {
            return Err(EngineError::CardNotInHand(id));
        }
        self.selected = Some(id);
        Ok(())
    }

    /// Drop the current selection, if any.
    pub fn clear_selection(&mut self) -> Result<(), EngineError> {
        self.require_phase("clear the selection", Phase::Selecting)?;
        self.selected = None;
        Ok(())
    }

    /// Lock in the exchange.
    ///
    /// Moves the selected card to the player's field, commits a uniformly
    /// random card from the opponent's hand to theirs, and clears the
    /// selection. After this there is no undo; the match is committed to
    /// resolving the exchange.
    ///
    /// Panics if the opponent's hand is empty; hands hold at least one card
    /// whenever the match is active, so that is an invariant violation.
    pub fn commit_battle(&mut self) -> Result<(), EngineError> {
        self.require_phase("commit a battle", Phase::Selecting)?;
        let selected = self.selected.ok_or(EngineError::NoSelection)?;

        let player_card = self
            .player
            .take_from_hand(selected)
            .ok_or(EngineError::CardNotInHand(selected))?;

        assert!(
            !self.opponent.hand().is_empty(),
            "Opponent hand empty at commit"
        );
        let pick = self.dealer.pick_index(self.opponent.hand().len());
        let opponent_card = self.opponent.take_from_hand_at(pick);

        self.player.place_on_field(player_card);
        self.opponent.place_on_field(opponent_card);
        self.selected = None;
        self.phase = Phase::Committed;
        Ok(())
    }

    /// Resolve the committed exchange.
    ///
    /// Both damages are computed from hp values read before either is
    /// applied; the reductions are concurrent, not sequential. Field cards
    /// are discarded and the engine enters [`Phase::RoundEnd`].
    pub fn resolve(&mut self) -> Result<BattleResult, EngineError> {
        self.require_phase("resolve", Phase::Committed)?;
        self.phase = Phase::Resolving;

        let player_card = self.player.take_field().expect("player field committed");
        let opponent_card = self.opponent.take_field().expect("opponent field committed");

        let player_boosted = player_card
            .element()
            .is_strong_against(opponent_card.element());
        let opponent_boosted = opponent_card
            .element()
            .is_strong_against(player_card.element());

        let damage_to_opponent = self.boosted_damage(player_card.attack(), player_boosted);
        let damage_to_player = self.boosted_damage(opponent_card.attack(), opponent_boosted);

        self.player.apply_damage(damage_to_player);
        self.opponent.apply_damage(damage_to_opponent);

        let result = BattleResult {
            player_card,
            opponent_card,
            damage_to_opponent,
            damage_to_player,
            player_boosted,
            opponent_boosted,
        };
        self.last_result = Some(result.clone());
        self.history.push_back(RoundRecord {
            round: self.round,
            result: result.clone(),
        });

        self.phase = Phase::RoundEnd;
        Ok(result)
    }

    /// Round-end evaluation: finish the match or advance to the next round.
    ///
    /// The checks are ordered: opponent knockout first, then player
    /// knockout, then the final-round hp comparison. A simultaneous
    /// knockout is therefore a player win, never a draw.
    ///
    /// Returns `Some(outcome)` when the match ended, `None` when a new
    /// round began (one fresh card dealt to each side).
    pub fn advance_or_finish(&mut self) -> Result<Option<MatchOutcome>, EngineError> {
        self.require_phase("advance the round", Phase::RoundEnd)?;

        let player_hp = self.player.hp();
        let opponent_hp = self.opponent.hp();

        let outcome = if opponent_hp <= 0 {
            Some(MatchOutcome::Player)
        } else if player_hp <= 0 {
            Some(MatchOutcome::Opponent)
        } else if self.round >= self.config.max_rounds {
            // Final round: higher hp wins, exact equality is the only draw
            Some(if player_hp > opponent_hp {
                MatchOutcome::Player
            } else if opponent_hp > player_hp {
                MatchOutcome::Opponent
            } else {
                MatchOutcome::Draw
            })
        } else {
            None
        };

        match outcome {
            Some(result) => {
                self.outcome = Some(result);
                self.phase = Phase::GameOver;
                Ok(Some(result))
            }
            None => {
                self.round += 1;
                let player_card = self.dealer.draw_one();
                let opponent_card = self.dealer.draw_one();
                self.player.add_to_hand(player_card);
                self.opponent.add_to_hand(opponent_card);
                self.phase = Phase::Selecting;
                Ok(None)
            }
        }
    }

    /// Re-initialize the whole match: fresh hands, full hp, round 1.
    ///
    /// The RNG stream continues where it left off, so instance identifiers
    /// stay unique across resets and a seeded engine remains deterministic.
    pub fn reset(&mut self) {
        self.player.reset();
        self.opponent.reset();
        for card in self.dealer.draw_many(self.config.starting_hand_size) {
            self.player.add_to_hand(card);
        }
        for card in self.dealer.draw_many(self.config.starting_hand_size) {
            self.opponent.add_to_hand(card);
        }

        self.phase = Phase::Selecting;
        self.round = 1;
        self.selected = None;
        self.last_result = None;
        self.outcome = None;
        self.history = Vector::new();
    }

    // === Internals ===

    fn require_phase(&self, operation: &'static str, expected: Phase) -> Result<(), EngineError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(EngineError::InvalidPhase {
                operation,
                phase: self.phase,
            })
        }
    }

    /// Floor of attack times the effectiveness multiplier.
    ///
    /// Floor-toward-zero on non-negative values is the contract; the 1.5x
    /// bonus can produce a fractional product on odd attack values.
    fn boosted_damage(&self, attack: i64, boosted: bool) -> i64 {
        let multiplier = if boosted {
            self.config.bonus_multiplier
        } else {
            1.0
        };
        (attack as f64 * multiplier).floor() as i64
    }
}
