//! In-memory remote secret store

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::Duration;

use async_trait::async_trait;

use super::traits::{RemoteSecretStore, SecretStoreError, SecretStoreResult};

/// In-memory secret store for testing and local development
///
/// Stands in for a remote store: secrets are addressed by identifier, every
/// lookup is counted, and an artificial latency can be configured to
/// exercise timeouts.
///
/// # Thread Safety
///
/// The store uses `RwLock` internally and is safe to use from multiple threads.
///
/// # Example
///
/// ```
/// use envkit_core::secrets::MemorySecretStore;
///
/// let store = MemorySecretStore::new();
/// store.insert("prod/db-password", "hunter2");
/// assert_eq!(store.len(), 1);
/// assert_eq!(store.lookup_count(), 0);
/// ```
#[derive(Debug, Default)]
pub struct MemorySecretStore {
    secrets: RwLock<HashMap<String, String>>,
    lookups: AtomicUsize,
    latency: Option<Duration>,
}

impl MemorySecretStore {
    /// Create a new empty memory store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a memory store with initial secrets
    pub fn with_secrets(initial: HashMap<String, String>) -> Self {
        Self {
            secrets: RwLock::new(initial),
            ..Self::default()
        }
    }

    /// Delay every lookup by `latency`
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    /// Add or replace a secret
    pub fn insert(&self, secret_id: &str, value: &str) {
        self.write().insert(secret_id.to_string(), value.to_string());
    }

    /// Remove a secret
    pub fn remove(&self, secret_id: &str) {
        self.write().remove(secret_id);
    }

    /// Number of secrets in the store
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// How many times `get_secret` has been called
    pub fn lookup_count(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, String>> {
        self.secrets.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, String>> {
        self.secrets.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl RemoteSecretStore for MemorySecretStore {
    fn name(&self) -> &str {
        "memory"
    }

    async fn get_secret(&self, secret_id: &str) -> SecretStoreResult<String> {
        self.lookups.fetch_add(1, Ordering::SeqCst);

        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }

        self.read()
            .get(secret_id)
            .cloned()
            .ok_or_else(|| SecretStoreError::NotFound(secret_id.to_string()))
    }
}
