// Unit tests for replay module
//
// Tests the core functionality of the replay engine including:
// - Loading JSONL log files
// - Replaying individual turns
// - Validating expected moves
// - Generating statistics

use knights_isolation::config::Config;
use knights_isolation::replay::ReplayEngine;
use knights_isolation::types::{Cell, Player};
use std::path::PathBuf;

/// Helper function to get the path to test fixtures
fn fixture_path(filename: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(filename)
}

/// Replay decisions must be reproducible, so the randomized fallback is off
fn replay_config() -> Config {
    let mut config = Config::default_hardcoded();
    config.move_selection.randomize_fallback = false;
    config
}

#[test]
fn test_load_log_file_short_game() {
    let engine = ReplayEngine::new(replay_config(), false);

    let entries = engine
        .load_log_file(fixture_path("short_game.jsonl"))
        .expect("Failed to load short_game.jsonl");

    assert_eq!(entries.len(), 2, "Expected 2 log entries");
    assert_eq!(entries[0].turn, 0, "First entry should be turn 0");
    assert_eq!(entries[0].mover, Player::One);
    assert_eq!(entries[0].chosen_move, Some(Cell::new(1, 2)));
    assert_eq!(entries[1].turn, 1, "Second entry should be turn 1");
    assert_eq!(entries[1].mover, Player::Two);
    assert_eq!(entries[1].chosen_move, Some(Cell::new(2, 3)));
}

#[test]
fn test_loaded_boards_are_consistent() {
    let engine = ReplayEngine::new(replay_config(), false);

    let entries = engine
        .load_log_file(fixture_path("short_game.jsonl"))
        .expect("Failed to load short_game.jsonl");

    for entry in &entries {
        assert_eq!(
            entry.board.to_move(),
            entry.mover,
            "Turn {}: recorded mover should be the player to move",
            entry.turn
        );
        let chosen = entry.chosen_move.expect("Fixture turns all have moves");
        assert!(
            entry.board.legal_moves(entry.mover).contains(&chosen),
            "Turn {}: recorded move should be legal on the recorded board",
            entry.turn
        );
    }
}

#[test]
fn test_load_log_file_missing_file() {
    let engine = ReplayEngine::new(replay_config(), false);
    let result = engine.load_log_file(fixture_path("does_not_exist.jsonl"));
    assert!(result.is_err(), "Missing file should be an error");
}

#[test]
fn test_replay_all_returns_legal_moves() {
    let engine = ReplayEngine::new(replay_config(), false);

    let entries = engine
        .load_log_file(fixture_path("short_game.jsonl"))
        .expect("Failed to load short_game.jsonl");

    let results = engine.replay_all(&entries);
    assert_eq!(results.len(), 2, "Should have replayed all 2 turns");

    for (entry, result) in entries.iter().zip(&results) {
        assert_eq!(result.turn, entry.turn);
        assert_eq!(result.original_move, entry.chosen_move);
        let replayed = result
            .replayed_move
            .expect("Both fixture positions have legal moves");
        assert!(
            entry.board.legal_moves(entry.mover).contains(&replayed),
            "Turn {}: replayed move {:?} should be legal",
            entry.turn,
            replayed
        );
        assert!(result.search_depth >= 1, "At least depth 1 should complete");
        assert!(result.nodes > 0);
    }
}

#[test]
fn test_replay_turns_selects_requested_turn() {
    let engine = ReplayEngine::new(replay_config(), false);

    let entries = engine
        .load_log_file(fixture_path("short_game.jsonl"))
        .expect("Failed to load short_game.jsonl");

    let results = engine
        .replay_turns(&entries, &[1])
        .expect("Turn 1 exists in the fixture");

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].turn, 1);
}

#[test]
fn test_replay_turns_unknown_turn_is_error() {
    let engine = ReplayEngine::new(replay_config(), false);

    let entries = engine
        .load_log_file(fixture_path("short_game.jsonl"))
        .expect("Failed to load short_game.jsonl");

    let result = engine.replay_turns(&entries, &[99]);
    assert!(result.is_err(), "Requesting an absent turn should fail");
}

#[test]
fn test_validate_expected_moves() {
    let engine = ReplayEngine::new(replay_config(), false);

    let entries = engine
        .load_log_file(fixture_path("short_game.jsonl"))
        .expect("Failed to load short_game.jsonl");

    let expected = vec![
        (0, vec![Cell::new(1, 2)]),
        (1, vec![Cell::new(2, 3), Cell::new(3, 2)]),
    ];
    engine
        .validate_expected_moves(&entries, &expected)
        .expect("Recorded moves should match the expected sets");

    let wrong = vec![(0, vec![Cell::new(2, 1)])];
    assert!(
        engine.validate_expected_moves(&entries, &wrong).is_err(),
        "A recorded move outside the expected set should fail validation"
    );
}

#[test]
fn test_generate_stats() {
    let engine = ReplayEngine::new(replay_config(), false);

    let entries = engine
        .load_log_file(fixture_path("short_game.jsonl"))
        .expect("Failed to load short_game.jsonl");

    let results = engine.replay_all(&entries);
    let stats = engine.generate_stats(&results);

    assert_eq!(stats.total_turns, 2);
    assert_eq!(stats.matches + stats.mismatches, 2);
    let expected_rate = stats.matches as f64 / 2.0 * 100.0;
    assert!((stats.match_rate - expected_rate).abs() < 1e-9);
    assert!(stats.avg_depth >= 1.0);
}

#[test]
fn test_generate_stats_empty_results() {
    let engine = ReplayEngine::new(replay_config(), false);
    let stats = engine.generate_stats(&[]);

    assert_eq!(stats.total_turns, 0);
    assert_eq!(stats.match_rate, 0.0);
    assert_eq!(stats.avg_depth, 0.0);
    assert_eq!(stats.avg_time_ms, 0.0);
}
