//! Core traits and types for remote secret storage

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

/// Errors reported by a remote secret store
#[derive(Error, Debug)]
pub enum SecretStoreError {
    #[error("secret {0:?} does not exist in the store")]
    NotFound(String),

    #[error("access to secret {0:?} was denied")]
    AccessDenied(String),

    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    #[error("request cancelled")]
    Cancelled,

    #[error("secret {0:?} has no string payload")]
    EmptyPayload(String),

    #[error("transient store failure: {0}")]
    Transient(String),

    #[error("store error: {0}")]
    Other(String),
}

impl SecretStoreError {
    /// Whether the failure came from a deadline rather than the store itself
    pub fn is_timeout(&self) -> bool {
        matches!(self, SecretStoreError::Timeout(_))
    }
}

pub type SecretStoreResult<T> = Result<T, SecretStoreError>;

/// A remote secret store, addressed by opaque secret identifiers
///
/// Implementations:
/// - `AwsSecretStore`: AWS Secrets Manager
/// - `MemorySecretStore`: in-memory, for tests and local development
///
/// Implementations must support concurrent calls; the fetcher shares a
/// single store between all of its callers.
#[async_trait]
pub trait RemoteSecretStore: Send + Sync {
    /// Human-readable name of this store
    fn name(&self) -> &str;

    /// Fetch the current string payload of the secret named by `secret_id`
    async fn get_secret(&self, secret_id: &str) -> SecretStoreResult<String>;
}
