use crate::ports::RewriteStore;
use lancache_sync_domain::{DesiredState, ReconcileSummary, RewriteEntry, RewriteTable, SyncError};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Use case: drive the server's rewrite table to the desired state with the
/// minimal set of writes.
///
/// The baseline is snapshotted once; each desired entry is then handled
/// strictly sequentially, in domain order. Entries already correct cost no
/// network call, so a converged table makes repeated runs a no-op. Domains
/// on the server that are not desired are left untouched.
pub struct ReconcileRewritesUseCase {
    store: Arc<dyn RewriteStore>,
    batch_size: usize,
}

impl ReconcileRewritesUseCase {
    pub fn new(store: Arc<dyn RewriteStore>, batch_size: usize) -> Self {
        Self {
            store,
            batch_size: batch_size.max(1),
        }
    }

    pub async fn execute(&self, desired: &DesiredState) -> Result<ReconcileSummary, SyncError> {
        let baseline = self
            .store
            .list()
            .await
            .map_err(|e| SyncError::BaselineFetch(e.to_string()))?;
        let current = RewriteTable::from_entries(baseline);

        let total = desired.len();
        info!(
            desired = total,
            current = current.len(),
            "Reconciling rewrites against baseline snapshot"
        );

        let mut summary = ReconcileSummary::default();
        for (domain, answer) in desired.iter() {
            match current.answer_for(domain) {
                None => {
                    let entry = RewriteEntry::new(domain, answer);
                    match self.store.add(&entry).await {
                        Ok(()) => {
                            debug!(domain, answer, "Added rewrite");
                            summary.added += 1;
                        }
                        Err(e) => {
                            warn!(domain, error = %e, "Failed to add rewrite");
                            summary.failed += 1;
                        }
                    }
                }
                Some(existing) if existing != answer => {
                    let entry = RewriteEntry::new(domain, answer);
                    match self.store.update(&entry).await {
                        Ok(()) => {
                            debug!(domain, answer, "Updated rewrite");
                            summary.updated += 1;
                        }
                        Err(e) => {
                            warn!(domain, error = %e, "Failed to update rewrite");
                            summary.failed += 1;
                        }
                    }
                }
                Some(_) => {
                    debug!(domain, "Rewrite already correct");
                    summary.skipped += 1;
                }
            }

            summary.processed += 1;
            if summary.processed % self.batch_size == 0 {
                info!(
                    processed = summary.processed,
                    total,
                    added = summary.added,
                    updated = summary.updated,
                    skipped = summary.skipped,
                    "Reconciliation progress"
                );
            }
        }

        info!(
            processed = summary.processed,
            added = summary.added,
            updated = summary.updated,
            skipped = summary.skipped,
            failed = summary.failed,
            "Reconciliation complete"
        );
        Ok(summary)
    }
}
