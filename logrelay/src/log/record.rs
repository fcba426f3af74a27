//! Log records retained or printed by backends.

use chrono::{DateTime, Utc};
use std::fmt;

use super::LogLevel;

/// A single emitted log message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    /// When the record was emitted.
    pub timestamp: DateTime<Utc>,
    /// Severity of the record.
    pub level: LogLevel,
    /// Name of the logger that emitted the record.
    pub logger: String,
    /// Formatted message.
    pub message: String,
}

impl LogRecord {
    /// Create a record stamped with the current time.
    pub fn now(level: LogLevel, logger: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            level,
            logger: logger.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for LogRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:<5} [{}] {}",
            self.timestamp.format("%Y-%m-%dT%H:%M:%S%.3fZ"),
            self.level,
            self.logger,
            self.message
        )
    }
}
