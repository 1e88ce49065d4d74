//! Environment-first secret resolution with a remote fallback
//!
//! For a key `K`:
//! 1. `K` in the environment, if set and non-empty
//! 2. `SM_K` in the environment names a secret in the remote store,
//!    which is fetched with a 5 second budget
//!
//! Nothing is cached and nothing is retried.

use std::sync::Arc;
use std::time::Duration;

use super::error::{SecretError, SecretResult};
use crate::config::{ConfigError, RemoteStoreConfig};
use crate::logging::{NoOpLogger, SharedLogger};
use crate::secrets::{AwsSecretStore, EnvLookup, RemoteSecretStore, SecretStoreError, SecretStoreResult};
use crate::types::CancellationToken;
use crate::log_debug;

/// Prefix of the environment variable holding a remote secret identifier
pub const SECRET_ID_PREFIX: &str = "SM_";

/// Upper bound on a single remote fetch
pub const REMOTE_FETCH_TIMEOUT: Duration = Duration::from_secs(5);

/// Name of the indirection key for `key`
///
/// ```
/// assert_eq!(envkit_core::resolver::prefixed_key("API_TOKEN"), "SM_API_TOKEN");
/// ```
pub fn prefixed_key(key: &str) -> String {
    format!("{}{}", SECRET_ID_PREFIX, key)
}

/// Where a resolved value came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SecretSource {
    /// Read directly from the environment
    Environment,
    /// Fetched from the named remote store
    Remote { store: String },
}

/// Result of resolving a secret
#[derive(Clone)]
pub struct ResolvedSecret {
    /// The secret value
    pub value: String,
    /// Which source provided the secret
    pub source: SecretSource,
}

// Never print the value
impl std::fmt::Debug for ResolvedSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolvedSecret")
            .field("value", &"<redacted>")
            .field("source", &self.source)
            .finish()
    }
}

/// Resolves named values from the environment, falling back to a remote store
///
/// The fetcher holds the remote client, the environment capability and the
/// context it was created with. The context's cancellation and deadline
/// bound every remote fetch. A fetcher is `Send + Sync` and can be shared
/// between tasks behind an `Arc`.
///
/// # Example
///
/// ```rust,ignore
/// use envkit_core::{CancellationToken, ProcessEnv, SecretFetcher};
///
/// let ctx = CancellationToken::new();
/// let fetcher = SecretFetcher::new(&ctx, ProcessEnv::new()).await?;
///
/// // DATABASE_PASSWORD from the environment, or the secret named by
/// // SM_DATABASE_PASSWORD from AWS Secrets Manager
/// let password = fetcher.resolve("DATABASE_PASSWORD").await?;
/// ```
pub struct SecretFetcher {
    ctx: CancellationToken,
    env: Arc<dyn EnvLookup>,
    store: Arc<dyn RemoteSecretStore>,
    logger: SharedLogger,
}

impl SecretFetcher {
    /// Create a fetcher backed by AWS Secrets Manager using ambient configuration
    ///
    /// Either a usable fetcher is returned or a `Configuration` error; setup
    /// is bounded by `ctx`.
    pub async fn new(ctx: &CancellationToken, env: impl EnvLookup + 'static) -> SecretResult<Self> {
        Self::with_config(ctx, env, &RemoteStoreConfig::default()).await
    }

    /// Create a fetcher backed by AWS Secrets Manager with explicit overrides
    pub async fn with_config(
        ctx: &CancellationToken,
        env: impl EnvLookup + 'static,
        config: &RemoteStoreConfig,
    ) -> SecretResult<Self> {
        let store = bounded_setup(ctx, AwsSecretStore::load(config)).await?;
        Ok(Self::with_store(ctx, env, Arc::new(store)))
    }

    /// Create a fetcher over any remote store implementation
    pub fn with_store(
        ctx: &CancellationToken,
        env: impl EnvLookup + 'static,
        store: Arc<dyn RemoteSecretStore>,
    ) -> Self {
        Self {
            ctx: ctx.clone(),
            env: Arc::new(env),
            store,
            logger: Arc::new(NoOpLogger::new()),
        }
    }

    /// Attach a logger
    pub fn with_logger(mut self, logger: SharedLogger) -> Self {
        self.logger = logger;
        self
    }

    /// Name of the bound remote store
    pub fn store_name(&self) -> &str {
        self.store.name()
    }

    /// Resolve `key` to its value
    pub async fn resolve(&self, key: &str) -> SecretResult<String> {
        self.resolve_detailed(key).await.map(|resolved| resolved.value)
    }

    /// Resolve `key`, also reporting which source supplied the value
    pub async fn resolve_detailed(&self, key: &str) -> SecretResult<ResolvedSecret> {
        if let Some(value) = self.env.lookup_non_empty(key) {
            log_debug!(self.logger, "resolved {} from environment", key);
            return Ok(ResolvedSecret {
                value,
                source: SecretSource::Environment,
            });
        }

        let indirect_key = prefixed_key(key);
        let secret_id = self
            .env
            .lookup_non_empty(&indirect_key)
            .ok_or_else(|| SecretError::not_found(key, indirect_key.as_str()))?;

        log_debug!(
            self.logger,
            "fetching {} from {} via {}",
            key,
            self.store.name(),
            indirect_key
        );

        let value = self
            .fetch_remote(&secret_id)
            .await
            .map_err(|e| SecretError::remote_fetch(key, e))?;

        Ok(ResolvedSecret {
            value,
            source: SecretSource::Remote {
                store: self.store.name().to_string(),
            },
        })
    }

    async fn fetch_remote(&self, secret_id: &str) -> SecretStoreResult<String> {
        if self.ctx.is_cancelled() {
            return Err(SecretStoreError::Cancelled);
        }

        let budget = self.ctx.bounded(REMOTE_FETCH_TIMEOUT);
        if budget.is_zero() {
            return Err(SecretStoreError::Timeout(budget));
        }

        tokio::select! {
            _ = self.ctx.cancelled() => Err(SecretStoreError::Cancelled),
            result = tokio::time::timeout(budget, self.store.get_secret(secret_id)) => {
                result.unwrap_or(Err(SecretStoreError::Timeout(budget)))
            }
        }
    }
}

impl std::fmt::Debug for SecretFetcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecretFetcher")
            .field("store", &self.store.name())
            .field("ctx", &self.ctx)
            .finish()
    }
}

/// Run a setup future under the context's cancellation and deadline
async fn bounded_setup<T, F>(ctx: &CancellationToken, setup: F) -> Result<T, ConfigError>
where
    F: std::future::Future<Output = Result<T, ConfigError>>,
{
    if ctx.is_cancelled() {
        return Err(ConfigError::Cancelled);
    }
    if ctx.is_expired() {
        return Err(ConfigError::DeadlineExceeded);
    }

    let bounded = async {
        match ctx.remaining() {
            Some(left) => tokio::time::timeout(left, setup)
                .await
                .unwrap_or(Err(ConfigError::DeadlineExceeded)),
            None => setup.await,
        }
    };

    tokio::select! {
        _ = ctx.cancelled() => Err(ConfigError::Cancelled),
        result = bounded => result,
    }
}
