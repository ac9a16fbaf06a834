use async_trait::async_trait;
use lancache_sync_domain::{ServiceCatalog, SyncError};

/// Application-layer port for the published domain-list source.
///
/// The implementation lives in the infrastructure layer and owns URL
/// resolution: relative domain-list paths resolve against the catalog URL
/// it was constructed with.
#[async_trait]
pub trait ListSource: Send + Sync {
    /// Fetch and parse the service catalog.
    ///
    /// # Errors
    ///
    /// * `SyncError::CatalogUnreachable` - transport or HTTP failure
    /// * `SyncError::MalformedCatalog` - document missing the required shape
    ///
    /// Both are fatal to a run; a catalog problem is never reported as an
    /// empty catalog.
    async fn fetch_catalog(&self) -> Result<ServiceCatalog, SyncError>;

    /// Fetch one domain-list file and return its domains, with blank lines
    /// and `#` comments already filtered out.
    ///
    /// # Errors
    ///
    /// * `SyncError::FileFetch` - this file could not be fetched; callers
    ///   treat it as non-fatal and drop only this file's domains
    async fn fetch_list(&self, path: &str) -> Result<Vec<String>, SyncError>;
}
