use lancache_sync_domain::SyncError;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use std::time::Duration;
use tracing::warn;

const RETRYABLE_STATUSES: [StatusCode; 5] = [
    StatusCode::TOO_MANY_REQUESTS,
    StatusCode::INTERNAL_SERVER_ERROR,
    StatusCode::BAD_GATEWAY,
    StatusCode::SERVICE_UNAVAILABLE,
    StatusCode::GATEWAY_TIMEOUT,
];

/// Bounded exponential backoff: `max_attempts` total tries, starting at
/// `base_delay` and doubling between them.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay: Duration::from_secs(1),
        }
    }
}

/// The one outbound HTTP client for the whole process. Shared across all
/// aggregation workers; applies basic auth per request and transparently
/// retries transient upstream hiccups so callers never have to.
pub struct RetryingClient {
    inner: Client,
    policy: RetryPolicy,
    credentials: Option<(String, String)>,
}

impl RetryingClient {
    pub fn new(timeout: Duration) -> Result<Self, SyncError> {
        let inner = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SyncError::Http(e.to_string()))?;
        Ok(Self {
            inner,
            policy: RetryPolicy::default(),
            credentials: None,
        })
    }

    pub fn with_basic_auth(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.credentials = Some((username.into(), password.into()));
        self
    }

    pub fn with_policy(mut self, policy: RetryPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn get(&self, url: &str) -> RequestBuilder {
        self.authorized(self.inner.get(url))
    }

    pub fn post(&self, url: &str) -> RequestBuilder {
        self.authorized(self.inner.post(url))
    }

    pub fn put(&self, url: &str) -> RequestBuilder {
        self.authorized(self.inner.put(url))
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.credentials {
            Some((username, password)) => request.basic_auth(username, Some(password)),
            None => request,
        }
    }

    /// Send with retries on connection failures, timeouts, and the
    /// transient status codes. Non-retryable responses (success or not) are
    /// returned to the caller for classification; only transport errors
    /// that survive every attempt become an `Err`.
    pub async fn send(&self, request: RequestBuilder) -> Result<Response, SyncError> {
        let mut attempt = 0u32;
        let mut delay = self.policy.base_delay;

        loop {
            attempt += 1;
            let prepared = request
                .try_clone()
                .ok_or_else(|| SyncError::Http("request body is not cloneable".to_string()))?;

            match prepared.send().await {
                Ok(response)
                    if RETRYABLE_STATUSES.contains(&response.status())
                        && attempt < self.policy.max_attempts =>
                {
                    warn!(
                        status = response.status().as_u16(),
                        attempt, "Transient status, backing off"
                    );
                }
                Ok(response) => return Ok(response),
                Err(e)
                    if (e.is_connect() || e.is_timeout()) && attempt < self.policy.max_attempts =>
                {
                    warn!(error = %e, attempt, "Connection failure, backing off");
                }
                Err(e) => return Err(SyncError::Http(e.to_string())),
            }

            tokio::time::sleep(delay).await;
            delay *= 2;
        }
    }
}
