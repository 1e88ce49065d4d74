//! envkit core
//!
//! Two independent building blocks for services that read their settings
//! from the environment:
//!
//! - `resolver`: environment-first secret resolution with a fallback to
//!   AWS Secrets Manager. A key `K` resolves to `$K` when set, otherwise to
//!   the remote secret whose identifier is in `$SM_K`.
//! - `collections`: `Set<T>`, a generic set with union/intersection and a
//!   JSON array encoding.
//!
//! ```rust,ignore
//! use envkit_core::{CancellationToken, ProcessEnv, SecretFetcher};
//!
//! let ctx = CancellationToken::new();
//! let fetcher = SecretFetcher::new(&ctx, ProcessEnv::new()).await?;
//! let api_key = fetcher.resolve("PAYMENTS_API_KEY").await?;
//! ```

pub mod types;
pub mod secrets;
pub mod logging;
pub mod config;
pub mod resolver;
pub mod collections;

// Re-export commonly used types
pub use types::CancellationToken;

pub use secrets::{
    RemoteSecretStore, SecretStoreError, SecretStoreResult,
    EnvLookup, ProcessEnv, MapEnv,
    AwsSecretStore, MemorySecretStore,
};

pub use logging::{ConsoleLogger, LogLevel, Logger, NoOpLogger, SharedLogger};

pub use config::{RemoteStoreConfig, ConfigError, ConfigResult};

pub use resolver::{
    SecretFetcher, SecretError, SecretResult, ResolvedSecret, SecretSource,
    prefixed_key, SECRET_ID_PREFIX, REMOTE_FETCH_TIMEOUT,
};

pub use collections::{Set, SetError, SetResult};
