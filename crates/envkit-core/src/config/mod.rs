//! Configuration for the remote secret store
//!
//! - `RemoteStoreConfig`: optional overrides, loadable from YAML
//! - `ConfigError`: everything that can go wrong setting up a store

mod traits;
mod store;

pub use traits::{ConfigError, ConfigResult};
pub use store::RemoteStoreConfig;
