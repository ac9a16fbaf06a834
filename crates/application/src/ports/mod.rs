pub mod list_source;
pub mod rewrite_store;
pub mod snapshot_sink;

pub use list_source::ListSource;
pub use rewrite_store::RewriteStore;
pub use snapshot_sink::SnapshotSink;
