//! Flat snapshot of a full session, for save/load.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Utc};
use hexzone_core::error::DomainError;
use hexzone_core::snapshot::StoredSnapshot;
use hexzone_core::{PieceId, TileIndex};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::attribute::Attribute;
use super::board::{Board, BoardConfig};
use super::items::ItemPool;
use super::pieces::{Piece, PieceRegistry};
use super::session::GameSession;

/// Everything needed to rebuild a `GameSession`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// Session identifier.
    pub session_id: Uuid,
    /// Board parameters.
    pub config: BoardConfig,
    /// Pieces in id order.
    pub pieces: Vec<Piece>,
    /// Zones still standing.
    pub zones: BTreeMap<TileIndex, Attribute>,
    /// Item positions.
    pub items: Vec<TileIndex>,
    /// Pieces that have already won.
    #[serde(default)]
    pub winners: Vec<PieceId>,
}

impl SessionSnapshot {
    /// Captures the current state of `session`.
    #[must_use]
    pub fn capture(session: &GameSession) -> Self {
        Self {
            session_id: session.id(),
            config: *session.board().config(),
            pieces: session.pieces().iter().cloned().collect(),
            zones: session.board().zones().clone(),
            items: session.items().positions(),
            winners: session.winners().iter().copied().collect(),
        }
    }

    /// Rebuilds a session, checking every invariant first.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidSnapshot` describing the first
    /// inconsistency found.
    pub fn restore(self) -> Result<GameSession, DomainError> {
        let invalid = |err: DomainError| DomainError::InvalidSnapshot(err.to_string());

        let board = Board::with_zones(self.config, self.zones).map_err(invalid)?;

        let mut registry = PieceRegistry::new();
        for piece in self.pieces {
            let id = piece.id;
            if registry.get(id).is_ok() {
                return Err(DomainError::InvalidSnapshot(format!(
                    "piece {id} appears twice"
                )));
            }
            registry.insert(piece);
        }

        let items = ItemPool::from_tiles(self.config.num_tiles, &self.items).map_err(invalid)?;
        let winners: BTreeSet<PieceId> = self.winners.into_iter().collect();

        GameSession::from_parts(self.session_id, board, registry, items, winners).map_err(invalid)
    }

    /// Wraps the snapshot for a `SnapshotStore`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` if serialization fails.
    pub fn into_stored(self, saved_at: DateTime<Utc>) -> Result<StoredSnapshot, DomainError> {
        let payload = serde_json::to_value(&self).map_err(|e| {
            DomainError::Infrastructure(format!("snapshot serialization failed: {e}"))
        })?;
        Ok(StoredSnapshot {
            session_id: self.session_id,
            payload,
            saved_at,
        })
    }

    /// Unwraps a stored snapshot.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidSnapshot` if the payload does not
    /// describe a session.
    pub fn from_stored(stored: &StoredSnapshot) -> Result<Self, DomainError> {
        serde_json::from_value(stored.payload.clone()).map_err(|e| {
            DomainError::InvalidSnapshot(format!("snapshot deserialization failed: {e}"))
        })
    }
}
