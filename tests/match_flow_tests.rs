//! End-to-end match flow through the public API.

use card_clash::{
    BattleEngine, CardCatalog, EngineConfig, EngineError, MatchOutcome, Phase,
};

fn engine(seed: u64) -> BattleEngine {
    BattleEngine::new(CardCatalog::standard(), EngineConfig::default(), seed)
}

/// Play one full round, always committing the first card in hand.
/// Returns the outcome if the match ended.
fn play_round(engine: &mut BattleEngine) -> Option<MatchOutcome> {
    let pick = engine.player_hand()[0].id;
    engine.select_card(pick).unwrap();
    engine.commit_battle().unwrap();
    engine.resolve().unwrap();
    engine.advance_or_finish().unwrap()
}

#[test]
fn starting_hands_have_distinct_instance_ids() {
    let engine = engine(42);

    let mut ids: Vec<_> = engine
        .player_hand()
        .iter()
        .chain(engine.opponent_hand().iter())
        .map(|c| c.id)
        .collect();
    assert_eq!(ids.len(), 10);

    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 10, "instance ids must never collide");
}

#[test]
fn match_ends_within_round_limit() {
    for seed in 0..25u64 {
        let mut engine = engine(seed);
        let mut outcome = None;

        for _ in 0..5 {
            outcome = play_round(&mut engine);
            if outcome.is_some() {
                break;
            }
        }

        assert!(
            outcome.is_some(),
            "seed {seed}: match must end by round {}",
            engine.max_rounds()
        );
        assert_eq!(engine.phase(), Phase::GameOver);
        assert_eq!(engine.outcome(), outcome);
        assert!(engine.round() <= engine.max_rounds());
    }
}

#[test]
fn hand_size_stays_constant_between_rounds() {
    let mut engine = engine(3);

    while play_round(&mut engine).is_none() {
        // One card committed, one card drawn back
        assert_eq!(engine.player_hand().len(), 5);
        assert_eq!(engine.opponent_hand().len(), 5);
        assert_eq!(engine.phase(), Phase::Selecting);
    }
}

#[test]
fn same_seed_replays_identically() {
    let mut a = engine(1234);
    let mut b = engine(1234);

    loop {
        let done_a = play_round(&mut a);
        let done_b = play_round(&mut b);
        assert_eq!(done_a, done_b);
        assert_eq!(a.player_hp(), b.player_hp());
        assert_eq!(a.opponent_hp(), b.opponent_hp());
        assert_eq!(a.last_result(), b.last_result());
        if done_a.is_some() {
            break;
        }
    }
}

#[test]
fn history_covers_every_resolved_round() {
    let mut engine = engine(99);
    let mut rounds_played = 0;

    loop {
        rounds_played += 1;
        let done = play_round(&mut engine);
        if done.is_some() {
            break;
        }
    }

    assert_eq!(engine.history().len(), rounds_played);
    for (index, record) in engine.history().iter().enumerate() {
        assert_eq!(record.round, index as u32 + 1);
        assert!(record.result.damage_to_opponent >= 0);
        assert!(record.result.damage_to_player >= 0);
    }
}

#[test]
fn result_summary_reports_both_damages() {
    let mut engine = engine(5);
    let pick = engine.player_hand()[0].id;
    engine.select_card(pick).unwrap();
    engine.commit_battle().unwrap();
    let result = engine.resolve().unwrap();

    let summary = result.summary();
    assert!(summary.contains(&result.damage_to_opponent.to_string()));
    assert!(summary.contains(&result.damage_to_player.to_string()));
}

#[test]
fn observable_state_serializes_to_json() {
    let mut engine = engine(8);
    let pick = engine.player_hand()[0].id;
    engine.select_card(pick).unwrap();
    engine.commit_battle().unwrap();
    let result = engine.resolve().unwrap();

    let phase = serde_json::to_string(&engine.phase()).unwrap();
    assert_eq!(phase, "\"roundEnd\"");

    let json = serde_json::to_string(&result).unwrap();
    let back: card_clash::BattleResult = serde_json::from_str(&json).unwrap();
    assert_eq!(result, back);

    let hand = serde_json::to_string(engine.player_hand()).unwrap();
    assert!(hand.starts_with('['));
}

#[test]
fn reset_after_game_over_allows_new_match() {
    let mut engine = engine(11);
    while play_round(&mut engine).is_none() {}
    assert_eq!(engine.phase(), Phase::GameOver);

    engine.reset();
    assert_eq!(engine.phase(), Phase::Selecting);
    assert_eq!(engine.round(), 1);

    // The new match plays normally
    let pick = engine.player_hand()[0].id;
    engine.select_card(pick).unwrap();
    engine.commit_battle().unwrap();
    assert!(engine.resolve().is_ok());
}

#[test]
fn custom_config_shapes_the_match() {
    let config = EngineConfig::default()
        .with_max_rounds(2)
        .with_starting_hand_size(3)
        .with_max_hp(50);
    let mut engine = BattleEngine::new(CardCatalog::standard(), config, 42);

    assert_eq!(engine.player_hand().len(), 3);
    assert_eq!(engine.player_hp(), 50);
    assert_eq!(engine.max_rounds(), 2);

    let mut outcome = None;
    for _ in 0..2 {
        outcome = play_round(&mut engine);
        if outcome.is_some() {
            break;
        }
    }
    assert!(outcome.is_some(), "two-round match must end by round 2");
}

#[test]
fn out_of_phase_calls_report_the_phase() {
    let mut engine = engine(0);
    match engine.resolve() {
        Err(EngineError::InvalidPhase { phase, .. }) => assert_eq!(phase, Phase::Selecting),
        other => panic!("expected InvalidPhase, got {other:?}"),
    }
}
