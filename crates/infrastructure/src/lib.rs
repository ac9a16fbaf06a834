//! Lancache Sync Infrastructure Layer
pub mod http;
pub mod snapshot;

pub use http::{AdGuardRewriteStore, HttpListSource, RetryPolicy, RetryingClient};
pub use snapshot::JsonSnapshotFile;
