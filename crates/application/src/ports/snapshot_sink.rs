use async_trait::async_trait;
use lancache_sync_domain::{DesiredState, SyncError};

/// Write-only side channel for the last computed desired state. Never
/// consulted by reconciliation; exists for external inspection.
#[async_trait]
pub trait SnapshotSink: Send + Sync {
    async fn persist(&self, desired: &DesiredState) -> Result<(), SyncError>;
}
