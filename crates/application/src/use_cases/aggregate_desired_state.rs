use crate::ports::ListSource;
use futures::future::join_all;
use lancache_sync_domain::DesiredState;
use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{info, warn};

/// Use case: fold many remote domain lists into one desired-state mapping.
///
/// A fixed pool of workers drains a shared queue of file paths — never one
/// task per file. The catalog can reference hundreds of files; the pool caps
/// in-flight requests independent of input size.
pub struct AggregateDesiredStateUseCase {
    lists: Arc<dyn ListSource>,
}

impl AggregateDesiredStateUseCase {
    pub fn new(lists: Arc<dyn ListSource>) -> Self {
        Self { lists }
    }

    /// Fetch every file and fold `(domain, target_answer)` pairs into one
    /// map. A file that fails to fetch is logged and dropped; the rest of
    /// the aggregation continues. Returns after every worker has drained
    /// the queue.
    ///
    /// Duplicate domains across files resolve last-fold-wins. Worker
    /// interleaving makes that order nondeterministic, but the answer is a
    /// single constant per run, so the outcome is not.
    pub async fn execute(
        &self,
        file_paths: &[String],
        target_answer: &str,
        workers: usize,
    ) -> DesiredState {
        if file_paths.is_empty() {
            return DesiredState::default();
        }

        let pool = workers.clamp(1, file_paths.len());
        info!(
            files = file_paths.len(),
            workers = pool,
            "Starting domain list aggregation"
        );

        let queue = Arc::new(Mutex::new(VecDeque::from(file_paths.to_vec())));
        let desired = Arc::new(Mutex::new(DesiredState::default()));

        let handles: Vec<_> = (0..pool)
            .map(|_| {
                let queue = Arc::clone(&queue);
                let desired = Arc::clone(&desired);
                let lists = Arc::clone(&self.lists);
                let answer = target_answer.to_string();

                tokio::spawn(async move {
                    loop {
                        let path = queue.lock().await.pop_front();
                        let Some(path) = path else {
                            break;
                        };

                        match lists.fetch_list(&path).await {
                            Ok(domains) => {
                                let mut state = desired.lock().await;
                                for domain in domains {
                                    state.insert(domain, answer.clone());
                                }
                            }
                            Err(e) => {
                                warn!(path = %path, error = %e, "Skipping domain list");
                            }
                        }
                    }
                })
            })
            .collect();

        for result in join_all(handles).await {
            if let Err(e) = result {
                warn!(error = %e, "Aggregation worker panicked");
            }
        }

        let state = match Arc::try_unwrap(desired) {
            Ok(mutex) => mutex.into_inner(),
            Err(shared) => shared.lock().await.clone(),
        };

        info!(entries = state.len(), "Domain list aggregation complete");
        state
    }
}
