//! Query handlers for the game session context.
//!
//! Queries never mutate the session; they return read-only view DTOs.

use std::collections::BTreeMap;

use hexzone_core::error::DomainError;
use hexzone_core::{PieceId, TileIndex};
use serde::Serialize;
use uuid::Uuid;

use crate::application::session_slot::SessionSlot;
use crate::domain::attribute::Attribute;
use crate::domain::pieces::Piece;
use crate::domain::session::GameSession;

/// Read-only view of the whole session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionView {
    /// The session identifier.
    pub session_id: Uuid,
    /// Number of tiles on the track.
    pub num_tiles: u32,
    /// The win tile.
    pub final_tile: TileIndex,
    /// Pieces in id order.
    pub pieces: Vec<Piece>,
    /// Zones still standing.
    pub zones: BTreeMap<TileIndex, Attribute>,
    /// Item positions.
    pub items: Vec<TileIndex>,
    /// Pieces that have won.
    pub winners: Vec<PieceId>,
}

impl SessionView {
    /// Builds the view of `session`.
    #[must_use]
    pub fn of(session: &GameSession) -> Self {
        let board = session.board();
        Self {
            session_id: session.id(),
            num_tiles: board.num_tiles(),
            final_tile: board.final_tile(),
            pieces: session.pieces().iter().cloned().collect(),
            zones: board.zones().clone(),
            items: session.items().positions(),
            winners: session.winners().iter().copied().collect(),
        }
    }
}

/// Returns the current session.
///
/// # Errors
///
/// Returns `DomainError::GameNotStarted` if no game is running.
/// Returns `DomainError::Infrastructure` if the slot mutex is poisoned.
pub fn get_session(slot: &SessionSlot) -> Result<SessionView, DomainError> {
    let guard = slot.lock()?;
    let session = guard.as_ref().ok_or(DomainError::GameNotStarted)?;
    Ok(SessionView::of(session))
}
