use thiserror::Error;

#[derive(Error, Debug)]
pub enum SyncError {
    #[error("Malformed service catalog: {0}")]
    MalformedCatalog(String),

    #[error("Service catalog unreachable: {0}")]
    CatalogUnreachable(String),

    #[error("Domain list fetch failed for {url}: {reason}")]
    FileFetch { url: String, reason: String },

    #[error("Baseline rewrite table fetch failed: {0}")]
    BaselineFetch(String),

    #[error("Rewrite write failed for {domain}: {reason}")]
    WriteFailed { domain: String, reason: String },

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("Invalid URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Snapshot write failed: {0}")]
    Snapshot(String),
}
