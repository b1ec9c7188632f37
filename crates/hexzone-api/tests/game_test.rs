//! Integration tests for the game session routes, driven through the full
//! router with a file-backed snapshot store.

mod common;

use axum::http::StatusCode;
use hexzone_core::rng::SeededRng;
use hexzone_game::domain::attribute::Attribute;
use hexzone_game::domain::board::BoardConfig;
use hexzone_game::domain::pieces::Piece;
use hexzone_game::domain::snapshot::SessionSnapshot;
use hexzone_test_support::SequenceRng;
use serde_json::json;
use uuid::Uuid;

/// Standard board: piece 0 is red on tile 10, piece 1 is blue on tile 40
/// holding one item. Zones: green on 11, blue on 12. Items on 5, 20, 33.
fn scenario() -> SessionSnapshot {
    SessionSnapshot {
        session_id: Uuid::new_v4(),
        config: BoardConfig::default(),
        pieces: vec![
            Piece {
                id: 0,
                position: 10,
                attribute: Attribute::Red,
                items: vec![],
            },
            Piece {
                id: 1,
                position: 40,
                attribute: Attribute::Blue,
                items: vec![7],
            },
        ],
        zones: [(11, Attribute::Green), (12, Attribute::Blue)]
            .into_iter()
            .collect(),
        items: vec![5, 20, 33],
        winners: vec![],
    }
}

async fn loaded_scenario_state(
    dir: &tempfile::TempDir,
    rng: SequenceRng,
) -> hexzone_api::state::AppState {
    let path = dir.path().join("game_save.json");
    common::seed_snapshot(&path, scenario()).await;
    let state = common::test_state(&path, rng);
    let (status, json) = common::post_empty(&state, "/api/v1/game/load").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "Game loaded");
    state
}

async fn move_piece(
    state: &hexzone_api::state::AppState,
    player_id: u32,
    new_position: u32,
) -> (StatusCode, serde_json::Value) {
    common::post_json(
        state,
        "/api/v1/game/move-piece",
        &json!({ "player_id": player_id, "new_position": new_position }),
    )
    .await
}

#[tokio::test]
async fn test_red_piece_neutralizes_green_zone() {
    let dir = tempfile::tempdir().unwrap();
    let state = loaded_scenario_state(&dir, SequenceRng::new(vec![])).await;

    let (status, json) = move_piece(&state, 0, 11).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "zone_neutralized");
    assert_eq!(json["position"], 11);

    let (_, session) = common::get_json(&state, "/api/v1/game").await;
    assert!(session["zones"].get("11").is_none());
    assert_eq!(session["zones"]["12"], "blue");
}

#[tokio::test]
async fn test_blue_zone_sends_red_piece_back() {
    let dir = tempfile::tempdir().unwrap();
    let state = loaded_scenario_state(&dir, SequenceRng::new(vec![])).await;

    let (status, json) = move_piece(&state, 0, 12).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "sent_back_by_zone");
    assert_eq!(json["message"], "Sent back to start by zone");
    assert_eq!(json["position"], 0);
    assert_eq!(json["items"], json!([]));
}

#[tokio::test]
async fn test_piece_with_item_wins_on_final_tile() {
    let dir = tempfile::tempdir().unwrap();
    let state = loaded_scenario_state(&dir, SequenceRng::new(vec![])).await;

    let (status, json) = move_piece(&state, 1, 49).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "win");
    assert_eq!(json["message"], "Player wins!");
    assert_eq!(json["player_id"], 1);
    assert_eq!(json["items"], json!([7]));

    let (status, json) = move_piece(&state, 1, 41).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["error"], "piece_finished");
}

#[tokio::test]
async fn test_piece_without_item_is_sent_back_from_final_tile() {
    let dir = tempfile::tempdir().unwrap();
    let state = loaded_scenario_state(&dir, SequenceRng::new(vec![])).await;

    let (status, json) = move_piece(&state, 0, 49).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "sent_back_no_item");
    assert_eq!(json["position"], 0);
}

#[tokio::test]
async fn test_item_pickup_restocks_pool() {
    let dir = tempfile::tempdir().unwrap();
    // Respawn picks index 3 of the free tiles [0, 1, 2, 3, 4, 6, ...] -> tile 3.
    let state = loaded_scenario_state(&dir, SequenceRng::new(vec![3])).await;

    let (status, json) = move_piece(&state, 0, 20).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "moved");
    assert_eq!(json["items"], json!([20]));
    assert_eq!(json["picked_up"], 20);
    assert_eq!(json["respawned_at"], 3);

    let (_, session) = common::get_json(&state, "/api/v1/game").await;
    assert_eq!(session["items"], json!([3, 5, 33]));
}

#[tokio::test]
async fn test_save_writes_file_and_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("game_save.json");
    let state = common::test_state(&path, SeededRng::from_seed(99));

    let (status, started) =
        common::post_json(&state, "/api/v1/game/start", &json!({ "player_count": 3 })).await;
    assert_eq!(status, StatusCode::OK);

    let (status, saved) = common::post_empty(&state, "/api/v1/game/save").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(saved["saved_at"], "2026-01-15T10:00:00Z");
    assert!(path.exists());

    // A new process with the same snapshot file picks the game back up.
    let restarted = common::quiet_state(&path);
    let (status, loaded) = common::post_empty(&restarted, "/api/v1/game/load").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(loaded["session_id"], started["session_id"]);
    assert_eq!(loaded["pieces"], started["pieces"]);
    assert_eq!(loaded["zones"], started["zones"]);
    assert_eq!(loaded["items"], started["items"]);
}

#[tokio::test]
async fn test_load_without_save_file_reports_status() {
    let dir = tempfile::tempdir().unwrap();
    let state = common::quiet_state(&dir.path().join("game_save.json"));

    let (status, json) = common::post_empty(&state, "/api/v1/game/load").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "No saved game found");
}

#[tokio::test]
async fn test_load_rejects_corrupt_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("game_save.json");
    let mut corrupt = scenario();
    corrupt.items = vec![5, 20];
    common::seed_snapshot(&path, corrupt).await;
    let state = common::quiet_state(&path);

    let (status, json) = common::post_empty(&state, "/api/v1/game/load").await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["error"], "invalid_snapshot");
}

#[tokio::test]
async fn test_seeded_games_play_out_with_three_items() {
    let dir = tempfile::tempdir().unwrap();
    let state = common::test_state(&dir.path().join("game_save.json"), SeededRng::from_seed(5));
    common::post_json(&state, "/api/v1/game/start", &json!({ "player_count": 2 })).await;

    for step in 0..40u32 {
        let player_id = step % 2;
        let (status, roll) =
            common::post_json(&state, "/api/v1/game/roll-dice", &json!({ "player_id": player_id }))
                .await;
        assert_eq!(status, StatusCode::OK);
        let roll_value = roll["roll"].as_u64().unwrap();
        assert!((1..=6).contains(&roll_value));

        let current = u32::try_from(roll["current_position"].as_u64().unwrap()).unwrap();
        let target = (current + u32::try_from(roll_value).unwrap()).min(48);
        let (status, _) = move_piece(&state, player_id, target).await;
        assert_eq!(status, StatusCode::OK);

        let (_, session) = common::get_json(&state, "/api/v1/game").await;
        let items = session["items"].as_array().unwrap();
        assert_eq!(items.len(), 3);
    }
}
