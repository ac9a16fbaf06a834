use super::retry::RetryingClient;
use async_trait::async_trait;
use lancache_sync_application::ports::ListSource;
use lancache_sync_domain::{ServiceCatalog, SyncError};
use reqwest::Url;
use tracing::debug;

/// HTTP implementation of the published domain-list source. Relative
/// domain-list paths resolve against the catalog URL, RFC 3986 style, so a
/// catalog at `.../master/cache_domains.json` yields list URLs under
/// `.../master/`.
pub struct HttpListSource {
    http: RetryingClient,
    catalog_url: Url,
}

impl HttpListSource {
    pub fn new(http: RetryingClient, catalog_url: &str) -> Result<Self, SyncError> {
        let catalog_url = Url::parse(catalog_url).map_err(|e| SyncError::InvalidUrl {
            url: catalog_url.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self { http, catalog_url })
    }

    fn resolve(&self, path: &str) -> Result<Url, SyncError> {
        self.catalog_url.join(path).map_err(|e| SyncError::FileFetch {
            url: path.to_string(),
            reason: e.to_string(),
        })
    }
}

/// One domain per line; blank lines and `#` comments are dropped,
/// surrounding whitespace is trimmed.
pub fn parse_domain_list(body: &str) -> Vec<String> {
    body.lines()
        .filter_map(|line| {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                None
            } else {
                Some(line.to_string())
            }
        })
        .collect()
}

#[async_trait]
impl ListSource for HttpListSource {
    async fn fetch_catalog(&self) -> Result<ServiceCatalog, SyncError> {
        debug!(url = %self.catalog_url, "Fetching service catalog");
        let response = self
            .http
            .send(self.http.get(self.catalog_url.as_str()))
            .await
            .map_err(|e| SyncError::CatalogUnreachable(e.to_string()))?;

        if !response.status().is_success() {
            return Err(SyncError::CatalogUnreachable(format!(
                "HTTP {} from {}",
                response.status().as_u16(),
                self.catalog_url
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| SyncError::CatalogUnreachable(e.to_string()))?;
        let catalog: ServiceCatalog =
            serde_json::from_str(&body).map_err(|e| SyncError::MalformedCatalog(e.to_string()))?;

        debug!(services = catalog.cache_domains.len(), "Catalog fetched");
        Ok(catalog)
    }

    async fn fetch_list(&self, path: &str) -> Result<Vec<String>, SyncError> {
        let url = self.resolve(path)?;
        debug!(url = %url, "Fetching domain list");

        let response = self
            .http
            .send(self.http.get(url.as_str()))
            .await
            .map_err(|e| SyncError::FileFetch {
                url: url.to_string(),
                reason: e.to_string(),
            })?;

        if !response.status().is_success() {
            return Err(SyncError::FileFetch {
                url: url.to_string(),
                reason: format!("HTTP {}", response.status().as_u16()),
            });
        }

        let body = response.text().await.map_err(|e| SyncError::FileFetch {
            url: url.to_string(),
            reason: e.to_string(),
        })?;
        Ok(parse_domain_list(&body))
    }
}
