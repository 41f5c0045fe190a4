//! Tests for the JSON file store.

use tally_toe::{FileStore, KeyValueStore, Player, SCORES_KEY, ScoreLedger};
use tempfile::TempDir;

#[test]
fn test_missing_file_is_empty_store() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let store = FileStore::open(dir.path().join("scores.json")).expect("Open failed");
    assert_eq!(store.get(SCORES_KEY).unwrap(), None);
    assert_eq!(ScoreLedger::load(&store), ScoreLedger::zero());
}

#[test]
fn test_values_survive_reopen() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("nested").join("scores.json");

    let mut store = FileStore::open(&path).expect("Open failed");
    let ledger = ScoreLedger::zero().record_win(Player::X).record_win(Player::X);
    ledger.save(&mut store).expect("Save failed");

    let reopened = FileStore::open(&path).expect("Reopen failed");
    assert_eq!(ScoreLedger::load(&reopened), ledger);
    assert_eq!(reopened.path(), path.as_path());
}

#[test]
fn test_corrupt_file_starts_empty_and_is_replaced() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("scores.json");
    std::fs::write(&path, "{ not json").expect("Write failed");

    let mut store = FileStore::open(&path).expect("Open failed");
    assert_eq!(ScoreLedger::load(&store), ScoreLedger::zero());

    store.set("other", "value".to_string()).expect("Set failed");
    let reopened = FileStore::open(&path).expect("Reopen failed");
    assert_eq!(reopened.get("other").unwrap().as_deref(), Some("value"));
}

#[test]
fn test_malformed_scores_entry_loads_zero() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("scores.json");
    std::fs::write(&path, r#"{"scores": "{\"X\": \"lots\"}"}"#).expect("Write failed");

    let store = FileStore::open(&path).expect("Open failed");
    assert!(store.get(SCORES_KEY).unwrap().is_some());
    assert_eq!(ScoreLedger::load(&store), ScoreLedger::zero());
}
