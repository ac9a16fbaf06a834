use lancache_sync_domain::{Config, ConfigError};

/// Read the immutable run configuration from the environment. Logging is
/// not initialized yet when this runs, so any failure is reported by the
/// caller.
pub fn load_config() -> Result<Config, ConfigError> {
    Config::from_env()
}
