//! Provider capability and the handles it mints.

use std::fmt::{self, Arguments};
use std::sync::Arc;

use super::{LogLevel, Logger};

/// A pluggable logging backend.
///
/// A provider mints named loggers and owns its severity policy. Creating a
/// logger twice with the same name yields handles that behave the same, but
/// they need not share an instance.
pub trait LoggingProvider: Send + Sync + fmt::Debug {
    /// Create a logger bound to `name`.
    fn create_logger(&self, name: &str) -> LoggerHandle;

    /// Lowest level this provider emits.
    fn minimum_level(&self) -> LogLevel {
        LogLevel::Trace
    }

    /// Short, human-readable backend name.
    fn kind(&self) -> &'static str;
}

/// Handle returned to callers that asked for a logger.
///
/// The handle is bound at creation to one backend logger and one name.
/// Replacing the registry's provider later does not affect handles that
/// were already issued.
#[derive(Clone)]
pub struct LoggerHandle {
    name: Arc<str>,
    backend: Arc<dyn Logger>,
}

impl LoggerHandle {
    /// Wrap a backend logger under the given name.
    pub fn new(name: impl Into<Arc<str>>, backend: Arc<dyn Logger>) -> Self {
        Self {
            name: name.into(),
            backend,
        }
    }

    /// Name the handle was created with.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Logger for LoggerHandle {
    #[inline]
    fn log(&self, level: LogLevel, args: Arguments<'_>) {
        self.backend.log(level, args);
    }

    fn is_enabled(&self, level: LogLevel) -> bool {
        self.backend.is_enabled(level)
    }
}

impl fmt::Debug for LoggerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerHandle")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
