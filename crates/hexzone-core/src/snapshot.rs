//! Snapshot store abstraction.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Stored representation of a full session snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredSnapshot {
    /// Session the snapshot was taken from.
    pub session_id: Uuid,
    /// Serialized session state.
    pub payload: serde_json::Value,
    /// When the snapshot was taken.
    pub saved_at: DateTime<Utc>,
}

/// Capability for persisting and restoring the single saved game.
///
/// Saving replaces any previous snapshot.
#[async_trait]
pub trait SnapshotStore: Send + Sync {
    /// Persist `snapshot`, overwriting whatever was saved before.
    async fn save(&self, snapshot: &StoredSnapshot) -> Result<(), DomainError>;

    /// Load the most recently saved snapshot, or `None` if nothing has
    /// been saved yet.
    async fn load(&self) -> Result<Option<StoredSnapshot>, DomainError>;
}
