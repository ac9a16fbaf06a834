/// Outbound HTTP behavior shared by every client in the process.
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// Per-call timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self { timeout_secs: 10 }
    }
}
