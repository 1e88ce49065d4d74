//! Secret resolution error types

use thiserror::Error;

use crate::config::ConfigError;
use crate::secrets::SecretStoreError;

/// Errors returned by [`SecretFetcher`](super::SecretFetcher)
#[derive(Error, Debug)]
pub enum SecretError {
    /// The remote store client could not be set up
    #[error("failed to load AWS config: {0}")]
    Configuration(#[source] ConfigError),

    /// Neither the key nor its indirection key is set
    #[error("can't fetch secret, both {key:?} and {indirect_key:?} not found in environment")]
    NotFound { key: String, indirect_key: String },

    /// The remote store call failed
    #[error("failed to get secret {key:?}: {source}")]
    RemoteFetch {
        key: String,
        #[source]
        source: SecretStoreError,
    },
}

impl SecretError {
    /// Create a not found error for `key` and its indirection key
    pub fn not_found(key: impl Into<String>, indirect_key: impl Into<String>) -> Self {
        Self::NotFound {
            key: key.into(),
            indirect_key: indirect_key.into(),
        }
    }

    /// Create a remote fetch error for `key`
    pub fn remote_fetch(key: impl Into<String>, source: SecretStoreError) -> Self {
        Self::RemoteFetch {
            key: key.into(),
            source,
        }
    }

    /// Whether the error is a remote fetch that ran out of time
    pub fn is_timeout(&self) -> bool {
        matches!(self, SecretError::RemoteFetch { source, .. } if source.is_timeout())
    }
}

impl From<ConfigError> for SecretError {
    fn from(err: ConfigError) -> Self {
        SecretError::Configuration(err)
    }
}

pub type SecretResult<T> = Result<T, SecretError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_not_found_names_both_keys() {
        let err = SecretError::not_found("DB_PASSWORD", "SM_DB_PASSWORD");
        assert_eq!(
            err.to_string(),
            "can't fetch secret, both \"DB_PASSWORD\" and \"SM_DB_PASSWORD\" not found in environment"
        );
    }

    #[test]
    fn test_remote_fetch_wraps_cause() {
        let err = SecretError::remote_fetch(
            "DB_PASSWORD",
            SecretStoreError::Timeout(Duration::from_secs(5)),
        );
        assert!(err.is_timeout());
        assert_eq!(
            err.to_string(),
            "failed to get secret \"DB_PASSWORD\": request timed out after 5s"
        );

        let source = std::error::Error::source(&err).unwrap();
        assert_eq!(source.to_string(), "request timed out after 5s");
    }

    #[test]
    fn test_configuration_error() {
        let err: SecretError = ConfigError::MissingRegion.into();
        assert!(!err.is_timeout());
        assert!(err.to_string().starts_with("failed to load AWS config"));
    }
}
