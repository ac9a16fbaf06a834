/// Connection settings for the AdGuard Home management API.
#[derive(Debug, Clone)]
pub struct AdGuardConfig {
    /// API root, scheme + host (+ port), e.g. "http://adguard.lan:3000".
    pub api_base: String,
    pub username: String,
    pub password: String,
}

impl AdGuardConfig {
    /// Base URL of the rewrite-management endpoints.
    pub fn rewrite_endpoint(&self) -> String {
        format!("{}/control/rewrite", self.api_base.trim_end_matches('/'))
    }
}
