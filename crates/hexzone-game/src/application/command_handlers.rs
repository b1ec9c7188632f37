//! Command handlers for the game session context.
//!
//! Each handler validates against the live session, runs the domain
//! operation and, for save/load, talks to the snapshot store. Mutexes are
//! locked only around synchronous domain calls, never across an await.

use std::sync::{Mutex, MutexGuard};

use chrono::{DateTime, Utc};
use hexzone_core::clock::Clock;
use hexzone_core::command::Command;
use hexzone_core::error::DomainError;
use hexzone_core::rng::DeterministicRng;
use hexzone_core::snapshot::SnapshotStore;
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::application::query_handlers::SessionView;
use crate::application::session_slot::SessionSlot;
use crate::domain::board::BoardConfig;
use crate::domain::commands::{LoadGame, MovePiece, RollDice, SaveGame, StartGame};
use crate::domain::dice::DiceRoll;
use crate::domain::outcome::MoveResolution;
use crate::domain::session::GameSession;
use crate::domain::snapshot::SessionSnapshot;

/// Confirmation returned after a successful save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SaveReceipt {
    /// The saved session.
    pub session_id: Uuid,
    /// When it was saved.
    pub saved_at: DateTime<Utc>,
}

fn lock_rng(
    rng: &Mutex<dyn DeterministicRng + Send>,
) -> Result<MutexGuard<'_, dyn DeterministicRng + Send + 'static>, DomainError> {
    rng.lock()
        .map_err(|e| DomainError::Infrastructure(format!("RNG mutex poisoned: {e}")))
}

/// Handles the `StartGame` command: builds a fresh session and installs it,
/// discarding any game in progress.
///
/// # Errors
///
/// Returns `DomainError::Validation` if `config` is not playable.
/// Returns `DomainError::Infrastructure` if a mutex is poisoned.
pub fn handle_start_game(
    command: &StartGame,
    config: BoardConfig,
    rng: &Mutex<dyn DeterministicRng + Send>,
    slot: &SessionSlot,
) -> Result<SessionView, DomainError> {
    let session = {
        let mut rng_guard = lock_rng(rng)?;
        GameSession::start(Uuid::new_v4(), config, command.player_count, &mut *rng_guard)?
    };
    let view = SessionView::of(&session);
    if let Some(previous) = slot.replace(session)? {
        info!(
            correlation_id = %command.correlation_id(),
            previous_session = %previous.id(),
            "previous game discarded"
        );
    }
    Ok(view)
}

/// Handles the `RollDice` command. The roll is advisory and changes no
/// state.
///
/// # Errors
///
/// Returns `DomainError::GameNotStarted` if no game is running,
/// `DomainError::UnknownPiece` for an unregistered piece, and
/// `DomainError::Infrastructure` if a mutex is poisoned.
pub fn handle_roll_dice(
    command: &RollDice,
    rng: &Mutex<dyn DeterministicRng + Send>,
    slot: &SessionSlot,
) -> Result<DiceRoll, DomainError> {
    let guard = slot.lock()?;
    let session = guard.as_ref().ok_or(DomainError::GameNotStarted)?;
    let mut rng_guard = lock_rng(rng)?;
    session.roll_dice(command.player_id, &mut *rng_guard)
}

/// Handles the `MovePiece` command: resolves the move against the live
/// session.
///
/// # Errors
///
/// Returns `DomainError::GameNotStarted` if no game is running; otherwise
/// propagates the resolver's validation errors. Nothing is mutated when an
/// error is returned.
pub fn handle_move_piece(
    command: &MovePiece,
    rng: &Mutex<dyn DeterministicRng + Send>,
    slot: &SessionSlot,
) -> Result<MoveResolution, DomainError> {
    let mut guard = slot.lock()?;
    let session = guard.as_mut().ok_or(DomainError::GameNotStarted)?;
    let mut rng_guard = lock_rng(rng)?;
    session.resolve_move(command.player_id, command.target, &mut *rng_guard)
}

/// Handles the `SaveGame` command: snapshots the live session and hands it
/// to the store, replacing any earlier save.
///
/// # Errors
///
/// Returns `DomainError::GameNotStarted` if no game is running and
/// `DomainError::Infrastructure` if the store fails.
pub async fn handle_save_game(
    command: &SaveGame,
    clock: &dyn Clock,
    slot: &SessionSlot,
    store: &dyn SnapshotStore,
) -> Result<SaveReceipt, DomainError> {
    // Capture under the lock; the guard is dropped before the await.
    let snapshot = {
        let guard = slot.lock()?;
        let session = guard.as_ref().ok_or(DomainError::GameNotStarted)?;
        SessionSnapshot::capture(session)
    };
    let stored = snapshot.into_stored(clock.now())?;
    store.save(&stored).await?;

    info!(
        correlation_id = %command.correlation_id(),
        session_id = %stored.session_id,
        "game saved"
    );

    Ok(SaveReceipt {
        session_id: stored.session_id,
        saved_at: stored.saved_at,
    })
}

/// Handles the `LoadGame` command: fetches the saved snapshot, validates
/// it, and swaps it in for the live session.
///
/// # Errors
///
/// Returns `DomainError::SnapshotNotFound` if nothing was saved,
/// `DomainError::InvalidSnapshot` if the snapshot is inconsistent (the
/// live session is left untouched), and `DomainError::Infrastructure` if
/// the store fails.
pub async fn handle_load_game(
    command: &LoadGame,
    slot: &SessionSlot,
    store: &dyn SnapshotStore,
) -> Result<SessionView, DomainError> {
    let stored = store.load().await?.ok_or(DomainError::SnapshotNotFound)?;
    let session = SessionSnapshot::from_stored(&stored)?.restore()?;
    let view = SessionView::of(&session);
    slot.replace(session)?;

    info!(
        correlation_id = %command.correlation_id(),
        session_id = %view.session_id,
        saved_at = %stored.saved_at,
        "game loaded"
    );

    Ok(view)
}
