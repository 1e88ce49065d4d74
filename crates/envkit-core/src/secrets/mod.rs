//! Environment access and remote secret stores
//!
//! This module provides:
//! - `EnvLookup` for injecting the environment (`ProcessEnv`, `MapEnv`, closures)
//! - `RemoteSecretStore` for the remote fallback
//! - Built-in stores: `AwsSecretStore`, `MemorySecretStore`

mod traits;
mod env_store;
mod memory_store;
mod aws_store;

pub use traits::{RemoteSecretStore, SecretStoreError, SecretStoreResult};
pub use env_store::{EnvLookup, ProcessEnv, MapEnv};
pub use memory_store::MemorySecretStore;
pub use aws_store::AwsSecretStore;
