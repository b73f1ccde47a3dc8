//! Tests for the JSON-file store.

use issue_arcade::{BoardSnapshot, JsonFileStore, StateStore, Stats, Target, Variant};
use tempfile::tempdir;

fn store_in(dir: &std::path::Path, variant: Variant) -> JsonFileStore {
    JsonFileStore::new(variant, dir.join("state.json"), dir.join("stats.json"))
}

#[test]
fn test_missing_files_start_fresh() {
    let dir = tempdir().unwrap();
    let store = store_in(dir.path(), Variant::ConnectFour);

    assert_eq!(store.load().unwrap(), BoardSnapshot::new(Variant::ConnectFour));
    assert_eq!(store.load_stats().unwrap(), Stats::default());
    assert!(!dir.path().join("state.json").exists());
}

#[test]
fn test_saved_snapshot_reloads_identically() {
    let dir = tempdir().unwrap();
    let mut store = store_in(dir.path(), Variant::TicTacToe);

    let snapshot = BoardSnapshot::new(Variant::TicTacToe)
        .apply_move(Target::Cell(4), Some("octocat"))
        .unwrap()
        .apply_move(Target::Cell(0), None)
        .unwrap();
    store.save(&snapshot).unwrap();

    let reopened = store_in(dir.path(), Variant::TicTacToe);
    assert_eq!(reopened.load().unwrap(), snapshot);
    assert!(!dir.path().join("state.json.tmp").exists());
}

#[test]
fn test_stats_persist() {
    let dir = tempdir().unwrap();
    let mut store = store_in(dir.path(), Variant::TicTacToe);

    let mut stats = Stats::default();
    stats.record_move(Some("alice"));
    stats.record_move(Some("bob"));
    stats.record_completion();
    store.save_stats(&stats).unwrap();

    let loaded = store.load_stats().unwrap();
    assert_eq!(*loaded.total_moves(), 2);
    assert_eq!(*loaded.completed_games(), 1);
    assert_eq!(loaded.player_count(), 2);

    let raw = std::fs::read_to_string(dir.path().join("stats.json")).unwrap();
    assert!(raw.contains("\"total_players\""));
}

#[test]
fn test_corrupt_file_is_an_error() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("state.json"), "{ not json").unwrap();
    let store = store_in(dir.path(), Variant::TicTacToe);

    let err = store.load().unwrap_err();
    assert!(err.message.contains("Failed to parse"), "{}", err);
}

#[test]
fn test_inconsistent_snapshot_is_an_error() {
    let dir = tempdir().unwrap();
    // One mark on the board but no move counted.
    let json = r#"{
        "variant": "tic_tac_toe",
        "cells": [
            [{"Occupied": "First"}, "Empty", "Empty"],
            ["Empty", "Empty", "Empty"],
            ["Empty", "Empty", "Empty"]
        ],
        "turn": "First",
        "status": "InProgress",
        "move_count": 0,
        "history": []
    }"#;
    std::fs::write(dir.path().join("state.json"), json).unwrap();
    let store = store_in(dir.path(), Variant::TicTacToe);

    let err = store.load().unwrap_err();
    assert!(err.message.contains("inconsistent"), "{}", err);
}

#[test]
fn test_wrong_variant_is_an_error() {
    let dir = tempdir().unwrap();
    let mut c4 = store_in(dir.path(), Variant::ConnectFour);
    c4.save(&BoardSnapshot::new(Variant::ConnectFour)).unwrap();

    let ttt = store_in(dir.path(), Variant::TicTacToe);
    let err = ttt.load().unwrap_err();
    assert!(err.message.contains("expected tictactoe"), "{}", err);
}

#[test]
fn test_save_creates_parent_directories() {
    let dir = tempdir().unwrap();
    let nested = dir.path().join("data").join("boards");
    let mut store = JsonFileStore::new(
        Variant::ConnectFour,
        nested.join("c4.json"),
        nested.join("c4_stats.json"),
    );
    store.save(&BoardSnapshot::new(Variant::ConnectFour)).unwrap();
    assert!(nested.join("c4.json").exists());
}

/// Writes `snapshot` with its status and turn overwritten, as a hand-edited file would be.
fn write_with_status(dir: &std::path::Path, snapshot: &BoardSnapshot, status: serde_json::Value, turn: &str) {
    let mut json = serde_json::to_value(snapshot).unwrap();
    json["status"] = status;
    json["turn"] = serde_json::Value::from(turn);
    std::fs::write(dir.join("state.json"), serde_json::to_string_pretty(&json).unwrap()).unwrap();
}

fn assert_status_rejected(store: &JsonFileStore) {
    let err = store.load().unwrap_err();
    assert!(err.message.contains("Game status agrees"), "{}", err);
}

#[test]
fn test_draw_before_board_is_full_is_rejected() {
    let dir = tempdir().unwrap();
    let snapshot = BoardSnapshot::new(Variant::TicTacToe)
        .apply_move(Target::Cell(0), None)
        .unwrap();
    write_with_status(dir.path(), &snapshot, serde_json::json!("Draw"), "Second");

    assert_status_rejected(&store_in(dir.path(), Variant::TicTacToe));
}

#[test]
fn test_win_without_a_line_is_rejected() {
    let dir = tempdir().unwrap();
    let snapshot = BoardSnapshot::new(Variant::TicTacToe)
        .apply_move(Target::Cell(0), None)
        .unwrap();
    write_with_status(dir.path(), &snapshot, serde_json::json!({"Won": "First"}), "First");

    assert_status_rejected(&store_in(dir.path(), Variant::TicTacToe));
}

#[test]
fn test_full_board_still_in_progress_is_rejected() {
    let dir = tempdir().unwrap();
    let snapshot = [0, 1, 2, 4, 3, 5, 7, 6, 8]
        .into_iter()
        .fold(BoardSnapshot::new(Variant::TicTacToe), |s, i| {
            s.apply_move(Target::Cell(i), None).unwrap()
        });
    // Last mover was First, so an in-progress turn would belong to Second.
    write_with_status(dir.path(), &snapshot, serde_json::json!("InProgress"), "Second");

    assert_status_rejected(&store_in(dir.path(), Variant::TicTacToe));
}
