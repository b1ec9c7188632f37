//! JSON-file implementation of the `SnapshotStore` trait.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::debug;

use hexzone_core::error::DomainError;
use hexzone_core::snapshot::{SnapshotStore, StoredSnapshot};

/// Keeps the saved game in one JSON file.
///
/// Saves go to a sibling temporary file that is then renamed over the
/// target, so a crash mid-write leaves the previous save intact.
#[derive(Debug, Clone)]
pub struct FileSnapshotStore {
    path: PathBuf,
}

impl FileSnapshotStore {
    /// Creates a store backed by `path`. The file need not exist yet.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file the snapshot is written to.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(std::ffi::OsStr::to_os_string)
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

fn io_error(action: &str, path: &Path, err: &std::io::Error) -> DomainError {
    DomainError::Infrastructure(format!("failed to {action} {}: {err}", path.display()))
}

#[async_trait]
impl SnapshotStore for FileSnapshotStore {
    async fn save(&self, snapshot: &StoredSnapshot) -> Result<(), DomainError> {
        let bytes = serde_json::to_vec_pretty(snapshot).map_err(|e| {
            DomainError::Infrastructure(format!("snapshot serialization failed: {e}"))
        })?;

        let temp = self.temp_path();
        tokio::fs::write(&temp, &bytes)
            .await
            .map_err(|e| io_error("write", &temp, &e))?;
        tokio::fs::rename(&temp, &self.path)
            .await
            .map_err(|e| io_error("replace", &self.path, &e))?;

        debug!(path = %self.path.display(), bytes = bytes.len(), "snapshot written");
        Ok(())
    }

    async fn load(&self) -> Result<Option<StoredSnapshot>, DomainError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(io_error("read", &self.path, &e)),
        };

        let snapshot = serde_json::from_slice(&bytes).map_err(|e| {
            DomainError::InvalidSnapshot(format!(
                "{} is not a snapshot file: {e}",
                self.path.display()
            ))
        })?;

        debug!(path = %self.path.display(), "snapshot read");
        Ok(Some(snapshot))
    }
}
