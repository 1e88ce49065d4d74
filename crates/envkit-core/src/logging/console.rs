//! Level-filtered logger writing to the console or any `Write` sink

use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;
use std::sync::Mutex;

use super::traits::Logger;

/// Severity of a log line
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        };
        f.write_str(label)
    }
}

impl FromStr for LogLevel {
    type Err = String;

    /// Parses `debug`, `info`, `warn`/`warning` and `error`, ignoring case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            other => Err(format!("unknown log level {:?}", other)),
        }
    }
}

/// A logger that drops lines below a threshold
///
/// Defaults to stderr at `Warn`, which keeps the fetcher's per-key debug
/// lines quiet. A host that wants to see which source resolved each key
/// lowers the threshold to `Debug`:
///
/// ```
/// use std::sync::Arc;
/// use envkit_core::logging::{ConsoleLogger, LogLevel, SharedLogger};
///
/// let logger: SharedLogger = Arc::new(ConsoleLogger::new().with_level(LogLevel::Debug));
/// ```
pub struct ConsoleLogger {
    prefix: String,
    min_level: LogLevel,
    sink: Mutex<Box<dyn Write + Send>>,
}

impl Default for ConsoleLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleLogger {
    /// Stderr logger at `Warn`
    pub fn new() -> Self {
        Self::with_writer(io::stderr())
    }

    /// Logger writing to `writer` at `Warn`
    pub fn with_writer(writer: impl Write + Send + 'static) -> Self {
        Self {
            prefix: "[envkit]".to_string(),
            min_level: LogLevel::Warn,
            sink: Mutex::new(Box::new(writer)),
        }
    }

    /// Set the lowest level that gets written
    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn level(&self) -> LogLevel {
        self.min_level
    }

    pub fn enabled(&self, level: LogLevel) -> bool {
        level >= self.min_level
    }

    fn write(&self, level: LogLevel, message: &str) {
        if !self.enabled(level) {
            return;
        }
        let mut sink = self.sink.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        // A failing sink must not turn logging into an error path
        let _ = writeln!(sink, "{} {}: {}", self.prefix, level, message);
        let _ = sink.flush();
    }
}

impl Logger for ConsoleLogger {
    fn debug(&self, message: &str) {
        self.write(LogLevel::Debug, message);
    }

    fn info(&self, message: &str) {
        self.write(LogLevel::Info, message);
    }

    fn warn(&self, message: &str) {
        self.write(LogLevel::Warn, message);
    }

    fn error(&self, message: &str) {
        self.write(LogLevel::Error, message);
    }
}

impl fmt::Debug for ConsoleLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConsoleLogger")
            .field("prefix", &self.prefix)
            .field("min_level", &self.min_level)
            .finish()
    }
}
