use async_trait::async_trait;
use lancache_sync_application::ports::SnapshotSink;
use lancache_sync_domain::{DesiredState, SyncError};
use std::path::PathBuf;
use tracing::debug;

/// Desired-state snapshot as a JSON array of `{"domain","answer"}` objects,
/// overwritten after each successful aggregation. Write-only: reconciliation
/// never reads it back.
pub struct JsonSnapshotFile {
    path: PathBuf,
}

impl JsonSnapshotFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl SnapshotSink for JsonSnapshotFile {
    async fn persist(&self, desired: &DesiredState) -> Result<(), SyncError> {
        let entries = desired.to_entries();
        let body = serde_json::to_vec_pretty(&entries)
            .map_err(|e| SyncError::Snapshot(e.to_string()))?;
        tokio::fs::write(&self.path, body)
            .await
            .map_err(|e| SyncError::Snapshot(format!("{}: {e}", self.path.display())))?;

        debug!(
            path = %self.path.display(),
            entries = entries.len(),
            "Desired state snapshot written"
        );
        Ok(())
    }
}
