use super::retry::RetryingClient;
use async_trait::async_trait;
use lancache_sync_application::ports::RewriteStore;
use lancache_sync_domain::{RewriteEntry, SyncError};
use tracing::debug;

/// Rewrite-table adapter for the AdGuard Home management API, rooted at
/// `{api_base}/control/rewrite`.
pub struct AdGuardRewriteStore {
    http: RetryingClient,
    endpoint: String,
}

impl AdGuardRewriteStore {
    /// `endpoint` is the rewrite base, e.g. `http://host:3000/control/rewrite`.
    pub fn new(http: RetryingClient, endpoint: impl Into<String>) -> Self {
        Self {
            http,
            endpoint: endpoint.into(),
        }
    }

    fn url(&self, operation: &str) -> String {
        format!("{}/{}", self.endpoint, operation)
    }
}

#[async_trait]
impl RewriteStore for AdGuardRewriteStore {
    async fn list(&self) -> Result<Vec<RewriteEntry>, SyncError> {
        let url = self.url("list");
        debug!(url = %url, "Fetching current rewrite table");

        let response = self.http.send(self.http.get(&url)).await?;
        if !response.status().is_success() {
            return Err(SyncError::Http(format!(
                "HTTP {} from {}",
                response.status().as_u16(),
                url
            )));
        }

        let entries: Vec<RewriteEntry> = response
            .json()
            .await
            .map_err(|e| SyncError::Http(e.to_string()))?;
        debug!(entries = entries.len(), "Current rewrite table fetched");
        Ok(entries)
    }

    async fn add(&self, entry: &RewriteEntry) -> Result<(), SyncError> {
        let url = self.url("add");
        let response = self
            .http
            .send(self.http.post(&url).json(entry))
            .await
            .map_err(|e| SyncError::WriteFailed {
                domain: entry.domain.clone(),
                reason: e.to_string(),
            })?;

        if !response.status().is_success() {
            return Err(SyncError::WriteFailed {
                domain: entry.domain.clone(),
                reason: format!("HTTP {}", response.status().as_u16()),
            });
        }
        Ok(())
    }

    async fn update(&self, entry: &RewriteEntry) -> Result<(), SyncError> {
        let url = self.url("update");
        let response = self
            .http
            .send(self.http.put(&url).json(entry))
            .await
            .map_err(|e| SyncError::WriteFailed {
                domain: entry.domain.clone(),
                reason: e.to_string(),
            })?;

        if !response.status().is_success() {
            return Err(SyncError::WriteFailed {
                domain: entry.domain.clone(),
                reason: format!("HTTP {}", response.status().as_u16()),
            });
        }
        Ok(())
    }
}
