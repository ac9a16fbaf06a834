//! Configuration for lancache-sync, organized by concern:
//! - `adguard`: management-API endpoint and credentials
//! - `sync`: service selection, target answer, pool and batch sizing
//! - `http`: outbound HTTP behavior
//! - `logging`: logging settings
//! - `errors`: configuration errors
//!
//! Everything is read from the environment exactly once, in bootstrap, into
//! an immutable `Config` that is passed down by reference. No other
//! component reads ambient process state.

pub mod adguard;
pub mod errors;
pub mod http;
pub mod logging;
pub mod sync;

pub use adguard::AdGuardConfig;
pub use errors::ConfigError;
pub use http::HttpConfig;
pub use logging::LoggingConfig;
pub use sync::{SyncConfig, DEFAULT_CATALOG_URL};

#[derive(Debug, Clone)]
pub struct Config {
    pub adguard: AdGuardConfig,
    pub sync: SyncConfig,
    pub http: HttpConfig,
    pub logging: LoggingConfig,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable lookup. Factored out of `from_env`
    /// so tests never have to mutate the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let adguard = AdGuardConfig {
            api_base: required(
                &lookup,
                "ADGUARD_API",
                "Set it to the full API endpoint including protocol and port, \
                 e.g. ADGUARD_API='http://adguard.example.com:3000'",
            )?,
            username: required(
                &lookup,
                "ADGUARD_USERNAME",
                "Example: export ADGUARD_USERNAME='your_username'",
            )?,
            password: required(
                &lookup,
                "ADGUARD_PASSWORD",
                "Example: export ADGUARD_PASSWORD='your_password'",
            )?,
        };

        let sync = SyncConfig {
            all_services: match optional(&lookup, "ALL_SERVICES") {
                Some(raw) => parse_bool("ALL_SERVICES", &raw)?,
                None => false,
            },
            service_names: optional(&lookup, "SERVICE_NAMES")
                .map(|raw| split_names(&raw))
                .unwrap_or_default(),
            target_answer: required(
                &lookup,
                "LANCACHE_SERVER",
                "Set it to the IP address or hostname of your lancache server, \
                 e.g. export LANCACHE_SERVER='192.168.0.100'",
            )?,
            max_workers: match optional(&lookup, "MAX_WORKERS") {
                Some(raw) => parse_positive("MAX_WORKERS", &raw)?,
                None => 3,
            },
            batch_size: match optional(&lookup, "BATCH_SIZE") {
                Some(raw) => parse_positive("BATCH_SIZE", &raw)?,
                None => 100,
            },
            cache_file: optional(&lookup, "CACHE_FILE").map(Into::into),
            catalog_url: optional(&lookup, "CATALOG_URL")
                .unwrap_or_else(|| DEFAULT_CATALOG_URL.to_string()),
        };

        let http = match optional(&lookup, "HTTP_TIMEOUT") {
            Some(raw) => HttpConfig {
                timeout_secs: parse_positive("HTTP_TIMEOUT", &raw)? as u64,
            },
            None => HttpConfig::default(),
        };

        let logging = LoggingConfig {
            level: optional(&lookup, "LOG_LEVEL")
                .map(|level| level.to_ascii_lowercase())
                .unwrap_or_else(|| "info".to_string()),
        };

        let config = Self {
            adguard,
            sync,
            http,
            logging,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.adguard.api_base.starts_with("http://")
            && !self.adguard.api_base.starts_with("https://")
        {
            return Err(ConfigError::Invalid {
                name: "ADGUARD_API",
                reason: format!(
                    "expected an http(s) URL, got {:?}",
                    self.adguard.api_base
                ),
            });
        }
        Ok(())
    }
}

/// An unset or set-but-blank variable counts as missing.
fn required<F>(lookup: &F, name: &'static str, hint: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::Missing { name, hint }),
    }
}

fn optional<F>(lookup: &F, name: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name).filter(|value| !value.trim().is_empty())
}

fn parse_bool(name: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        other => Err(ConfigError::Invalid {
            name,
            reason: format!("expected a boolean, got {other:?}"),
        }),
    }
}

fn parse_positive(name: &'static str, raw: &str) -> Result<usize, ConfigError> {
    raw.trim()
        .parse::<usize>()
        .ok()
        .filter(|value| *value >= 1)
        .ok_or_else(|| ConfigError::Invalid {
            name,
            reason: format!("expected a positive integer, got {raw:?}"),
        })
}

fn split_names(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}
