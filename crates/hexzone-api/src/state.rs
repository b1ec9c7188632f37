//! Shared application state.

use std::fmt;
use std::sync::{Arc, Mutex};

use hexzone_core::clock::Clock;
use hexzone_core::rng::DeterministicRng;
use hexzone_core::snapshot::SnapshotStore;
use hexzone_game::application::session_slot::SessionSlot;
use hexzone_game::domain::board::BoardConfig;

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Parameters for newly started games.
    pub board_config: BoardConfig,
    /// Time source for snapshot stamps.
    pub clock: Arc<dyn Clock + Send + Sync>,
    /// Randomness for board setup, respawns and dice.
    pub rng: Arc<Mutex<dyn DeterministicRng + Send>>,
    /// Where saved games go.
    pub snapshot_store: Arc<dyn SnapshotStore>,
    /// The live game, if any.
    pub session: Arc<SessionSlot>,
}

impl AppState {
    /// Create new application state with no game running.
    #[must_use]
    pub fn new(
        board_config: BoardConfig,
        clock: Arc<dyn Clock + Send + Sync>,
        rng: Arc<Mutex<dyn DeterministicRng + Send>>,
        snapshot_store: Arc<dyn SnapshotStore>,
    ) -> Self {
        Self {
            board_config,
            clock,
            rng,
            snapshot_store,
            session: Arc::new(SessionSlot::new()),
        }
    }
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("board_config", &self.board_config)
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}
