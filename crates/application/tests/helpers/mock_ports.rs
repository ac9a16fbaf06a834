#![allow(dead_code)]

use async_trait::async_trait;
use lancache_sync_application::ports::{ListSource, RewriteStore};
use lancache_sync_domain::{RewriteEntry, ServiceCatalog, SyncError};
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

// ============================================================================
// Mock ListSource
// ============================================================================

pub struct MockListSource {
    catalog: Arc<RwLock<Option<ServiceCatalog>>>,
    lists: Arc<RwLock<HashMap<String, Vec<String>>>>,
    failing: Arc<RwLock<HashSet<String>>>,
    fetch_delay: Arc<RwLock<Option<Duration>>>,
    in_flight: Arc<AtomicU64>,
    max_in_flight: Arc<AtomicU64>,
    fetch_count: Arc<AtomicU64>,
}

impl MockListSource {
    pub fn new() -> Self {
        Self {
            catalog: Arc::new(RwLock::new(None)),
            lists: Arc::new(RwLock::new(HashMap::new())),
            failing: Arc::new(RwLock::new(HashSet::new())),
            fetch_delay: Arc::new(RwLock::new(None)),
            in_flight: Arc::new(AtomicU64::new(0)),
            max_in_flight: Arc::new(AtomicU64::new(0)),
            fetch_count: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn with_lists(entries: Vec<(&str, Vec<&str>)>) -> Self {
        let mut lists = HashMap::new();
        for (path, domains) in entries {
            lists.insert(
                path.to_string(),
                domains.into_iter().map(str::to_string).collect(),
            );
        }
        let source = Self::new();
        *source.lists.try_write().expect("fresh lock") = lists;
        source
    }

    pub async fn set_catalog(&self, catalog: ServiceCatalog) {
        *self.catalog.write().await = Some(catalog);
    }

    pub async fn set_failing(&self, path: &str) {
        self.failing.write().await.insert(path.to_string());
    }

    pub async fn set_fetch_delay(&self, delay: Duration) {
        *self.fetch_delay.write().await = Some(delay);
    }

    pub fn fetch_count(&self) -> u64 {
        self.fetch_count.load(Ordering::SeqCst)
    }

    /// High-water mark of concurrent `fetch_list` calls.
    pub fn max_in_flight(&self) -> u64 {
        self.max_in_flight.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ListSource for MockListSource {
    async fn fetch_catalog(&self) -> Result<ServiceCatalog, SyncError> {
        self.catalog
            .read()
            .await
            .clone()
            .ok_or_else(|| SyncError::CatalogUnreachable("no catalog configured".to_string()))
    }

    async fn fetch_list(&self, path: &str) -> Result<Vec<String>, SyncError> {
        self.fetch_count.fetch_add(1, Ordering::SeqCst);
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);

        let delay = *self.fetch_delay.read().await;
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        let result = if self.failing.read().await.contains(path) {
            Err(SyncError::FileFetch {
                url: path.to_string(),
                reason: "mock failure".to_string(),
            })
        } else {
            self.lists.read().await.get(path).cloned().ok_or_else(|| {
                SyncError::FileFetch {
                    url: path.to_string(),
                    reason: "unknown path".to_string(),
                }
            })
        };

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        result
    }
}

// ============================================================================
// Mock RewriteStore
// ============================================================================

pub struct MockRewriteStore {
    entries: Arc<RwLock<HashMap<String, String>>>,
    failing_domains: Arc<RwLock<HashSet<String>>>,
    fail_list: Arc<RwLock<bool>>,
    list_calls: Arc<AtomicU64>,
    add_calls: Arc<AtomicU64>,
    update_calls: Arc<AtomicU64>,
}

impl MockRewriteStore {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            failing_domains: Arc::new(RwLock::new(HashSet::new())),
            fail_list: Arc::new(RwLock::new(false)),
            list_calls: Arc::new(AtomicU64::new(0)),
            add_calls: Arc::new(AtomicU64::new(0)),
            update_calls: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn with_entries(entries: Vec<(&str, &str)>) -> Self {
        let store = Self::new();
        let mut table = HashMap::new();
        for (domain, answer) in entries {
            table.insert(domain.to_string(), answer.to_string());
        }
        *store.entries.try_write().expect("fresh lock") = table;
        store
    }

    pub async fn set_fail_list(&self, fail: bool) {
        *self.fail_list.write().await = fail;
    }

    pub async fn set_failing_domain(&self, domain: &str) {
        self.failing_domains.write().await.insert(domain.to_string());
    }

    pub async fn answer_for(&self, domain: &str) -> Option<String> {
        self.entries.read().await.get(domain).cloned()
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub fn list_calls(&self) -> u64 {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn add_calls(&self) -> u64 {
        self.add_calls.load(Ordering::SeqCst)
    }

    pub fn update_calls(&self) -> u64 {
        self.update_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RewriteStore for MockRewriteStore {
    async fn list(&self) -> Result<Vec<RewriteEntry>, SyncError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if *self.fail_list.read().await {
            return Err(SyncError::Http("list unavailable".to_string()));
        }
        Ok(self
            .entries
            .read()
            .await
            .iter()
            .map(|(domain, answer)| RewriteEntry::new(domain.clone(), answer.clone()))
            .collect())
    }

    async fn add(&self, entry: &RewriteEntry) -> Result<(), SyncError> {
        self.add_calls.fetch_add(1, Ordering::SeqCst);
        if self.failing_domains.read().await.contains(&entry.domain) {
            return Err(SyncError::WriteFailed {
                domain: entry.domain.clone(),
                reason: "mock failure".to_string(),
            });
        }
        self.entries
            .write()
            .await
            .insert(entry.domain.clone(), entry.answer.clone());
        Ok(())
    }

    async fn update(&self, entry: &RewriteEntry) -> Result<(), SyncError> {
        self.update_calls.fetch_add(1, Ordering::SeqCst);
        if self.failing_domains.read().await.contains(&entry.domain) {
            return Err(SyncError::WriteFailed {
                domain: entry.domain.clone(),
                reason: "mock failure".to_string(),
            });
        }
        let mut entries = self.entries.write().await;
        if !entries.contains_key(&entry.domain) {
            return Err(SyncError::WriteFailed {
                domain: entry.domain.clone(),
                reason: "unknown domain".to_string(),
            });
        }
        entries.insert(entry.domain.clone(), entry.answer.clone());
        Ok(())
    }
}
