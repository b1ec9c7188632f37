//! In-memory `SnapshotStore` implementations for tests.

use std::sync::Mutex;

use async_trait::async_trait;
use hexzone_core::error::DomainError;
use hexzone_core::snapshot::{SnapshotStore, StoredSnapshot};

/// An in-memory snapshot store that remembers the latest save and counts
/// every `save` call.
#[derive(Debug, Default)]
pub struct RecordingSnapshotStore {
    current: Mutex<Option<StoredSnapshot>>,
    saves: Mutex<usize>,
}

impl RecordingSnapshotStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds `snapshot`.
    #[must_use]
    pub fn with_snapshot(snapshot: StoredSnapshot) -> Self {
        Self {
            current: Mutex::new(Some(snapshot)),
            saves: Mutex::new(0),
        }
    }

    /// Returns the snapshot currently held.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn current(&self) -> Option<StoredSnapshot> {
        self.current.lock().unwrap().clone()
    }

    /// Returns how many times `save` was called.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn save_count(&self) -> usize {
        *self.saves.lock().unwrap()
    }
}

#[async_trait]
impl SnapshotStore for RecordingSnapshotStore {
    async fn save(&self, snapshot: &StoredSnapshot) -> Result<(), DomainError> {
        *self.current.lock().unwrap() = Some(snapshot.clone());
        *self.saves.lock().unwrap() += 1;
        Ok(())
    }

    async fn load(&self) -> Result<Option<StoredSnapshot>, DomainError> {
        Ok(self.current.lock().unwrap().clone())
    }
}

/// A snapshot store that never holds anything and silently accepts saves.
/// Useful for testing the "no saved game" path.
#[derive(Debug)]
pub struct EmptySnapshotStore;

#[async_trait]
impl SnapshotStore for EmptySnapshotStore {
    async fn save(&self, _snapshot: &StoredSnapshot) -> Result<(), DomainError> {
        Ok(())
    }

    async fn load(&self) -> Result<Option<StoredSnapshot>, DomainError> {
        Ok(None)
    }
}

/// A snapshot store that always returns an infrastructure error. Useful for
/// testing error-handling paths.
#[derive(Debug)]
pub struct FailingSnapshotStore;

#[async_trait]
impl SnapshotStore for FailingSnapshotStore {
    async fn save(&self, _snapshot: &StoredSnapshot) -> Result<(), DomainError> {
        Err(DomainError::Infrastructure("disk unavailable".into()))
    }

    async fn load(&self) -> Result<Option<StoredSnapshot>, DomainError> {
        Err(DomainError::Infrastructure("disk unavailable".into()))
    }
}
