use crate::catalog::ServiceSelection;
use std::path::PathBuf;

/// Published catalog of cache/CDN domains grouped by service.
pub const DEFAULT_CATALOG_URL: &str =
    "https://raw.githubusercontent.com/uklans/cache-domains/master/cache_domains.json";

/// What to sync and how aggressively.
#[derive(Debug, Clone)]
pub struct SyncConfig {
    /// Sync every service in the catalog.
    pub all_services: bool,
    /// Explicit service names, ignored when `all_services` is set.
    pub service_names: Vec<String>,
    /// Answer every desired rewrite points at (the lancache address).
    pub target_answer: String,
    /// Aggregation worker-pool size.
    pub max_workers: usize,
    /// Entries per progress-log batch during reconciliation.
    pub batch_size: usize,
    /// Optional desired-state snapshot path.
    pub cache_file: Option<PathBuf>,
    /// Catalog document URL; relative domain-list paths resolve against it.
    pub catalog_url: String,
}

impl SyncConfig {
    pub fn selection(&self) -> ServiceSelection {
        if self.all_services {
            ServiceSelection::All
        } else {
            ServiceSelection::Named(self.service_names.clone())
        }
    }
}
