use serde::{Deserialize, Serialize};

/// One service in the remote catalog: a named group of domain-list files
/// representing a content provider/platform.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceCatalogEntry {
    pub name: String,
    pub domain_files: Vec<String>,
}

/// The remote service catalog. The `cache_domains` field is required; a
/// document without it does not deserialize and is reported as malformed
/// rather than treated as an empty catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceCatalog {
    pub cache_domains: Vec<ServiceCatalogEntry>,
}

/// Which services a run should sync.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceSelection {
    All,
    Named(Vec<String>),
}

impl ServiceSelection {
    /// True when no service was selected at all, i.e. the run cannot sync
    /// and should enumerate what is available instead.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Named(names) if names.is_empty())
    }

    fn matches(&self, name: &str) -> bool {
        match self {
            Self::All => true,
            Self::Named(names) => names.iter().any(|n| n == name),
        }
    }
}

impl ServiceCatalog {
    pub fn service_names(&self) -> Vec<String> {
        self.cache_domains
            .iter()
            .map(|entry| entry.name.clone())
            .collect()
    }

    /// Domain-list file paths for the selected services, concatenated in
    /// catalog order.
    pub fn file_paths_for(&self, selection: &ServiceSelection) -> Vec<String> {
        self.cache_domains
            .iter()
            .filter(|entry| selection.matches(&entry.name))
            .flat_map(|entry| entry.domain_files.iter().cloned())
            .collect()
    }
}
