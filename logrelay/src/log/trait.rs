//! Logger trait and severity levels.

use std::fmt::{self, Arguments};
use std::str::FromStr;
use thiserror::Error;

/// Log level for filtering messages.
///
/// Levels are ordered so that providers can compare a record against a
/// minimum threshold: `Trace < Debug < Info < Warn < Error < Fatal`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum LogLevel {
    /// Verbose debugging information
    Trace,
    /// Debugging information
    Debug,
    /// General information
    #[default]
    Info,
    /// Warning messages
    Warn,
    /// Error messages
    Error,
    /// Unrecoverable failures
    Fatal,
}

impl LogLevel {
    /// All levels, lowest severity first.
    pub const ALL: [LogLevel; 6] = [
        LogLevel::Trace,
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warn,
        LogLevel::Error,
        LogLevel::Fatal,
    ];

    /// Lowercase name as used in configuration files.
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
            LogLevel::Fatal => "fatal",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            LogLevel::Trace => "TRACE",
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
            LogLevel::Fatal => "FATAL",
        };
        // Honour width/alignment so console output can pad the column.
        f.pad(label)
    }
}

/// Error returned when a string is not a known log level.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown log level '{0}' (expected one of: trace, debug, info, warn, error, fatal)")]
pub struct LogLevelParseError(pub String);

impl FromStr for LogLevel {
    type Err = LogLevelParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            "fatal" => Ok(LogLevel::Fatal),
            _ => Err(LogLevelParseError(s.to_string())),
        }
    }
}

/// Logging interface implemented by every backend logger.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so handles can be shared across
/// threads.
///
/// # Example
///
/// ```
/// use logrelay::log::{Logger, NoOpProvider, LoggingProvider};
/// use logrelay::{log_info, log_debug};
///
/// let logger = NoOpProvider.create_logger("app");
/// log_info!(logger, "Application started");
/// log_debug!(logger, "Debug message");
/// ```
pub trait Logger: Send + Sync {
    /// Log a message at the specified level.
    ///
    /// The convenience methods (`trace` .. `fatal`) delegate here.
    fn log(&self, level: LogLevel, args: Arguments<'_>);

    /// Returns whether a record at `level` would be emitted.
    ///
    /// Callers may use this to skip building expensive messages.
    fn is_enabled(&self, _level: LogLevel) -> bool {
        true
    }

    /// Log a trace-level message.
    fn trace(&self, args: Arguments<'_>) {
        self.log(LogLevel::Trace, args);
    }

    /// Log a debug-level message.
    fn debug(&self, args: Arguments<'_>) {
        self.log(LogLevel::Debug, args);
    }

    /// Log an info-level message.
    fn info(&self, args: Arguments<'_>) {
        self.log(LogLevel::Info, args);
    }

    /// Log a warning-level message.
    fn warn(&self, args: Arguments<'_>) {
        self.log(LogLevel::Warn, args);
    }

    /// Log an error-level message.
    fn error(&self, args: Arguments<'_>) {
        self.log(LogLevel::Error, args);
    }

    /// Log a fatal-level message.
    fn fatal(&self, args: Arguments<'_>) {
        self.log(LogLevel::Fatal, args);
    }
}

/// Convenience macros for logging with format strings.
#[macro_export]
macro_rules! log_trace {
    ($logger:expr, $($arg:tt)*) => {
        $logger.trace(format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $($arg:tt)*) => {
        $logger.debug(format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($arg:tt)*) => {
        $logger.info(format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_warn {
    ($logger:expr, $($arg:tt)*) => {
        $logger.warn(format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_error {
    ($logger:expr, $($arg:tt)*) => {
        $logger.error(format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_fatal {
    ($logger:expr, $($arg:tt)*) => {
        $logger.fatal(format_args!($($arg)*))
    };
}
