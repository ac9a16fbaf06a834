use async_trait::async_trait;
use lancache_sync_domain::{RewriteEntry, SyncError};

/// Application-layer port for the DNS server's rewrite table.
#[async_trait]
pub trait RewriteStore: Send + Sync {
    /// Snapshot the full current rewrite table.
    async fn list(&self) -> Result<Vec<RewriteEntry>, SyncError>;

    /// Add one rewrite entry. Safe to retry.
    async fn add(&self, entry: &RewriteEntry) -> Result<(), SyncError>;

    /// Update an existing rewrite entry in a single round trip.
    async fn update(&self, entry: &RewriteEntry) -> Result<(), SyncError>;
}
