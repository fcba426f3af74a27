//! No-operation provider.

use std::fmt::Arguments;
use std::sync::Arc;

use crate::log::{LogLevel, Logger, LoggerHandle, LoggingProvider};

/// A logger that discards all messages.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpLogger;

impl Logger for NoOpLogger {
    #[inline]
    fn log(&self, _level: LogLevel, _args: Arguments<'_>) {
        // Intentionally empty - discard all log messages
    }

    fn is_enabled(&self, _level: LogLevel) -> bool {
        false
    }
}

/// Provider whose loggers discard everything.
///
/// This is the default for hosted executables, which are expected to install
/// their own provider before anything logs.
///
/// # Example
///
/// ```
/// use logrelay::log::{Logger, LoggingProvider, NoOpProvider};
///
/// let logger = NoOpProvider.create_logger("quiet");
/// logger.info(format_args!("This message is discarded"));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpProvider;

impl LoggingProvider for NoOpProvider {
    fn create_logger(&self, name: &str) -> LoggerHandle {
        LoggerHandle::new(name, Arc::new(NoOpLogger))
    }

    fn minimum_level(&self) -> LogLevel {
        // Nothing is ever emitted; report the highest threshold.
        LogLevel::Fatal
    }

    fn kind(&self) -> &'static str {
        "NoOp"
    }
}
