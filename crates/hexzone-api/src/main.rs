//! Hexzone API server entry point.

use std::sync::{Arc, Mutex};

use hexzone_api::config::ServerConfig;
use hexzone_api::error::AppError;
use hexzone_api::state::AppState;
use hexzone_core::clock::SystemClock;
use hexzone_core::rng::{DeterministicRng, SeededRng};
use hexzone_snapshot_store::file_snapshot_store::FileSnapshotStore;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // Initialize tracing subscriber.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    tracing::info!("Starting Hexzone API server");

    let config = ServerConfig::from_env()?;

    let rng: Arc<Mutex<dyn DeterministicRng + Send>> = match config.seed {
        Some(seed) => {
            tracing::info!(seed, "using seeded RNG");
            Arc::new(Mutex::new(SeededRng::from_seed(seed)))
        }
        None => Arc::new(Mutex::new(SeededRng::from_entropy())),
    };

    let app_state = AppState::new(
        config.board,
        Arc::new(SystemClock),
        rng,
        Arc::new(FileSnapshotStore::new(config.snapshot_path.clone())),
    );

    let app = hexzone_api::build_router(app_state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let listener = config.bind().await?;
    tracing::info!(
        addr = %listener.local_addr()?,
        snapshot_path = %config.snapshot_path.display(),
        num_tiles = config.board.num_tiles,
        "Listening"
    );

    axum::serve(listener, app).await?;

    Ok(())
}
