//! Secret resolution
//!
//! A single entry point, `SecretFetcher`, that resolves a key from the
//! environment first and from a remote secret store second.

mod error;
mod secret_fetcher;

pub use error::{SecretError, SecretResult};
pub use secret_fetcher::{
    prefixed_key, ResolvedSecret, SecretFetcher, SecretSource, REMOTE_FETCH_TIMEOUT,
    SECRET_ID_PREFIX,
};
