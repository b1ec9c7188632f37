//! Shared test helpers for API integration tests.
#![allow(dead_code)]

use std::path::Path;
use std::sync::{Arc, Mutex};

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use hexzone_core::clock::Clock;
use hexzone_core::rng::DeterministicRng;
use hexzone_core::snapshot::SnapshotStore;
use hexzone_game::domain::board::BoardConfig;
use hexzone_game::domain::snapshot::SessionSnapshot;
use hexzone_snapshot_store::file_snapshot_store::FileSnapshotStore;
use hexzone_test_support::{FixedClock, SequenceRng};
use tower::ServiceExt;

use hexzone_api::state::AppState;

/// Build app state backed by a real `FileSnapshotStore` at `snapshot_path`
/// and the given RNG.
pub fn test_state(snapshot_path: &Path, rng: impl DeterministicRng + Send + 'static) -> AppState {
    let clock: Arc<dyn Clock + Send + Sync> = Arc::new(FixedClock::standard());
    let rng: Arc<Mutex<dyn DeterministicRng + Send>> = Arc::new(Mutex::new(rng));
    let store = Arc::new(FileSnapshotStore::new(snapshot_path));
    AppState::new(BoardConfig::default(), clock, rng, store)
}

/// Same as [`test_state`] with an RNG that must not be consulted.
pub fn quiet_state(snapshot_path: &Path) -> AppState {
    test_state(snapshot_path, SequenceRng::new(vec![]))
}

/// Writes `snapshot` to the file at `snapshot_path` as if it had been saved.
pub async fn seed_snapshot(snapshot_path: &Path, snapshot: SessionSnapshot) {
    let stored = snapshot
        .into_stored(FixedClock::standard().now())
        .unwrap();
    FileSnapshotStore::new(snapshot_path)
        .save(&stored)
        .await
        .unwrap();
}

/// Send a POST request with a JSON body and return the response.
pub async fn post_json(
    state: &AppState,
    uri: &str,
    body: &serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap();
    send(state, request).await
}

/// Send a POST request without a body and return the response.
pub async fn post_empty(state: &AppState, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(state, request).await
}

/// Send a GET request and return the response.
pub async fn get_json(state: &AppState, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(state, request).await
}

async fn send(state: &AppState, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let app: Router = hexzone_api::build_router(state.clone());
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}
