//! Environment lookup capability
//!
//! The fetcher never reads `std::env` directly; it goes through an
//! [`EnvLookup`] so tests can supply a fixed environment.

use std::collections::HashMap;
use std::env;

/// Read-only access to an environment
///
/// Any `Fn(&str) -> Option<String> + Send + Sync` closure is an `EnvLookup`.
pub trait EnvLookup: Send + Sync {
    /// Look up `key`, returning `None` when it is not set
    fn lookup(&self, key: &str) -> Option<String>;

    /// Look up `key`, treating an empty value the same as an absent one
    fn lookup_non_empty(&self, key: &str) -> Option<String> {
        self.lookup(key).filter(|value| !value.is_empty())
    }
}

impl<F> EnvLookup for F
where
    F: Fn(&str) -> Option<String> + Send + Sync,
{
    fn lookup(&self, key: &str) -> Option<String> {
        self(key)
    }
}

/// The real process environment
///
/// Values that are not valid unicode are reported as absent.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnv;

impl ProcessEnv {
    pub fn new() -> Self {
        Self
    }
}

impl EnvLookup for ProcessEnv {
    fn lookup(&self, key: &str) -> Option<String> {
        env::var(key).ok()
    }
}

/// A fixed environment backed by a map
///
/// # Example
///
/// ```
/// use envkit_core::secrets::{EnvLookup, MapEnv};
///
/// let env = MapEnv::new().with("DATABASE_URL", "postgres://localhost/dev");
/// assert_eq!(env.lookup("DATABASE_URL").as_deref(), Some("postgres://localhost/dev"));
/// assert_eq!(env.lookup("MISSING"), None);
/// ```
#[derive(Debug, Default, Clone)]
pub struct MapEnv {
    vars: HashMap<String, String>,
}

impl MapEnv {
    /// Create an empty environment
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a variable, builder style
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }

    /// Add or replace a variable
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(key.into(), value.into());
    }
}

impl From<HashMap<String, String>> for MapEnv {
    fn from(vars: HashMap<String, String>) -> Self {
        Self { vars }
    }
}

impl EnvLookup for MapEnv {
    fn lookup(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}
