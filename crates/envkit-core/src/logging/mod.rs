//! Logging abstractions for runtime-agnostic logging

mod traits;
mod noop;
mod console;

pub use traits::{Logger, SharedLogger};
pub use noop::NoOpLogger;
pub use console::{ConsoleLogger, LogLevel};

#[cfg(test)]
pub(crate) use console::tests::Captured;
