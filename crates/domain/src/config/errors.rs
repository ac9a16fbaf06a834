use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Environment variable {name} is not set. {hint}")]
    Missing {
        name: &'static str,
        hint: &'static str,
    },

    #[error("Invalid value for {name}: {reason}")]
    Invalid {
        name: &'static str,
        reason: String,
    },
}
