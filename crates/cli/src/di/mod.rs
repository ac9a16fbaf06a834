use lancache_sync_application::ports::{ListSource, RewriteStore, SnapshotSink};
use lancache_sync_application::use_cases::{
    AggregateDesiredStateUseCase, ReconcileRewritesUseCase,
};
use lancache_sync_domain::{Config, SyncError};
use lancache_sync_infrastructure::{
    AdGuardRewriteStore, HttpListSource, JsonSnapshotFile, RetryingClient,
};
use std::sync::Arc;
use std::time::Duration;

/// Everything the run pipeline needs, wired once at startup.
pub struct AppContext {
    pub list_source: Arc<dyn ListSource>,
    pub aggregate: AggregateDesiredStateUseCase,
    pub reconcile: ReconcileRewritesUseCase,
    pub snapshot: Option<Arc<dyn SnapshotSink>>,
}

pub fn build(config: &Config) -> Result<AppContext, SyncError> {
    let timeout = Duration::from_secs(config.http.timeout_secs);

    let list_client = RetryingClient::new(timeout)?;
    let list_source: Arc<dyn ListSource> =
        Arc::new(HttpListSource::new(list_client, &config.sync.catalog_url)?);

    let adguard_client = RetryingClient::new(timeout)?
        .with_basic_auth(&config.adguard.username, &config.adguard.password);
    let rewrite_store: Arc<dyn RewriteStore> = Arc::new(AdGuardRewriteStore::new(
        adguard_client,
        config.adguard.rewrite_endpoint(),
    ));

    let snapshot: Option<Arc<dyn SnapshotSink>> = config
        .sync
        .cache_file
        .as_ref()
        .map(|path| Arc::new(JsonSnapshotFile::new(path)) as Arc<dyn SnapshotSink>);

    Ok(AppContext {
        aggregate: AggregateDesiredStateUseCase::new(Arc::clone(&list_source)),
        reconcile: ReconcileRewritesUseCase::new(rewrite_store, config.sync.batch_size),
        list_source,
        snapshot,
    })
}
