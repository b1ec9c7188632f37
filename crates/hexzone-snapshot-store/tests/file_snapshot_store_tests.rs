//! Integration tests for `FileSnapshotStore`.

use chrono::{TimeZone, Utc};
use hexzone_core::error::DomainError;
use hexzone_core::snapshot::{SnapshotStore, StoredSnapshot};
use hexzone_snapshot_store::file_snapshot_store::FileSnapshotStore;
use uuid::Uuid;

/// Helper to build a `StoredSnapshot` with a recognizable payload.
fn make_snapshot(marker: u32) -> StoredSnapshot {
    StoredSnapshot {
        session_id: Uuid::new_v4(),
        payload: serde_json::json!({ "items": [marker, 20, 33] }),
        saved_at: Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap(),
    }
}

// --- load ---

#[tokio::test]
async fn test_load_returns_none_when_nothing_saved() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileSnapshotStore::new(dir.path().join("game_save.json"));

    let loaded = store.load().await.unwrap();

    assert!(loaded.is_none());
}

#[tokio::test]
async fn test_load_rejects_non_snapshot_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("game_save.json");
    std::fs::write(&path, b"{\"players\": {}}").unwrap();
    let store = FileSnapshotStore::new(&path);

    let result = store.load().await;

    assert!(matches!(result, Err(DomainError::InvalidSnapshot(_))));
}

// --- save + load ---

#[tokio::test]
async fn test_save_and_load_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileSnapshotStore::new(dir.path().join("game_save.json"));
    let snapshot = make_snapshot(5);

    store.save(&snapshot).await.unwrap();
    let loaded = store.load().await.unwrap();

    assert_eq!(loaded, Some(snapshot));
}

#[tokio::test]
async fn test_save_overwrites_previous_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileSnapshotStore::new(dir.path().join("game_save.json"));

    store.save(&make_snapshot(5)).await.unwrap();
    let second = make_snapshot(7);
    store.save(&second).await.unwrap();

    let loaded = store.load().await.unwrap().unwrap();
    assert_eq!(loaded.session_id, second.session_id);
    assert_eq!(loaded.payload["items"][0], 7);
}

#[tokio::test]
async fn test_save_leaves_no_temp_file_behind() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileSnapshotStore::new(dir.path().join("game_save.json"));

    store.save(&make_snapshot(1)).await.unwrap();

    let names: Vec<String> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["game_save.json".to_owned()]);
}

#[tokio::test]
async fn test_save_into_missing_directory_is_infrastructure_error() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileSnapshotStore::new(dir.path().join("missing").join("game_save.json"));

    let result = store.save(&make_snapshot(1)).await;

    assert!(matches!(result, Err(DomainError::Infrastructure(_))));
}
