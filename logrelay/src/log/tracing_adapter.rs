//! Tracing library adapter implementation.

use std::fmt::{self, Arguments};
use std::sync::Arc;

use crate::log::{LogLevel, Logger, LoggerHandle, LoggingProvider};

/// Logger implementation that delegates to the `tracing` crate.
///
/// Each record carries the logger name in a `logger` field so subscribers can
/// filter or display it. `Fatal` has no tracing counterpart and is emitted at
/// `ERROR` with `fatal = true`.
pub struct TracingLogger {
    name: String,
    minimum: LogLevel,
}

impl Logger for TracingLogger {
    fn log(&self, level: LogLevel, args: Arguments<'_>) {
        if level < self.minimum {
            return;
        }
        let logger = self.name.as_str();
        match level {
            LogLevel::Trace => tracing::trace!(logger, "{}", args),
            LogLevel::Debug => tracing::debug!(logger, "{}", args),
            LogLevel::Info => tracing::info!(logger, "{}", args),
            LogLevel::Warn => tracing::warn!(logger, "{}", args),
            LogLevel::Error => tracing::error!(logger, "{}", args),
            LogLevel::Fatal => tracing::error!(logger, fatal = true, "{}", args),
        }
    }

    fn is_enabled(&self, level: LogLevel) -> bool {
        level >= self.minimum
    }
}

/// Provider that bridges named loggers to the `tracing` ecosystem.
///
/// Assumes a subscriber has been installed (see [`crate::logging::init_logging`]).
///
/// # Example
///
/// ```
/// use logrelay::log::{Logger, LoggingProvider, TracingProvider, LogLevel};
///
/// let logger = TracingProvider::new(LogLevel::Debug).create_logger("db");
/// logger.info(format_args!("Using tracing backend"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TracingProvider {
    minimum: LogLevel,
}

impl TracingProvider {
    /// Create a tracing provider with the given minimum level.
    pub fn new(minimum: LogLevel) -> Self {
        Self { minimum }
    }
}

impl Default for TracingProvider {
    fn default() -> Self {
        Self::new(LogLevel::Trace)
    }
}

impl LoggingProvider for TracingProvider {
    fn create_logger(&self, name: &str) -> LoggerHandle {
        let logger = TracingLogger {
            name: name.to_string(),
            minimum: self.minimum,
        };
        LoggerHandle::new(name, Arc::new(logger))
    }

    fn minimum_level(&self) -> LogLevel {
        self.minimum
    }

    fn kind(&self) -> &'static str {
        "Tracing"
    }
}

impl fmt::Debug for TracingLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TracingLogger")
            .field("name", &self.name)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracing_provider_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TracingProvider>();
        assert_send_sync::<TracingLogger>();
    }

    #[test]
    fn test_tracing_logger_as_trait_object() {
        let logger: Box<dyn Logger> = Box::new(TracingLogger {
            name: "test".to_string(),
            minimum: LogLevel::Trace,
        });
        // These will log via tracing (may not appear without subscriber)
        logger.info(format_args!("test info"));
        logger.fatal(format_args!("test fatal"));
    }

    #[test]
    fn test_tracing_provider_respects_minimum() {
        let handle = TracingProvider::new(LogLevel::Warn).create_logger("db");
        assert_eq!(handle.name(), "db");
        assert!(!handle.is_enabled(LogLevel::Info));
        assert!(handle.is_enabled(LogLevel::Warn));
    }

    #[test]
    fn test_tracing_provider_default() {
        let provider = TracingProvider::default();
        assert_eq!(provider.minimum_level(), LogLevel::Trace);
        assert_eq!(provider.kind(), "Tracing");
    }
}
