//! Configuration errors

/// Errors that can occur while loading or applying configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid configuration: {0}")]
    Invalid(String),

    #[error("no region could be discovered for the secret store")]
    MissingRegion,

    #[error("setup cancelled")]
    Cancelled,

    #[error("setup did not finish before the deadline")]
    DeadlineExceeded,
}

pub type ConfigResult<T> = Result<T, ConfigError>;
