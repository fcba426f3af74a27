//! In-memory provider that retains emitted records.

use parking_lot::Mutex;
use std::collections::VecDeque;
use std::fmt::{self, Arguments};
use std::sync::Arc;

use crate::log::{LogLevel, LogRecord, Logger, LoggerHandle, LoggingProvider};

/// Default number of records retained before the oldest are dropped.
pub const DEFAULT_MEMORY_CAPACITY: usize = 1000;

/// Shared record buffer.
#[derive(Default)]
struct RecordStore {
    records: Mutex<VecDeque<LogRecord>>,
    /// Maximum retained records; 0 means unbounded.
    capacity: usize,
}

impl RecordStore {
    fn push(&self, record: LogRecord) {
        let mut records = self.records.lock();
        if self.capacity > 0 && records.len() == self.capacity {
            records.pop_front();
        }
        records.push_back(record);
    }
}

/// Provider that keeps every record at or above its minimum level in memory.
///
/// Used as the default for embedded contexts so that the host application can
/// inspect what the library logged without depending on its configuration.
/// All loggers minted by one provider share the same buffer; clones of the
/// provider share it too.
///
/// # Example
///
/// ```
/// use logrelay::log::{InMemoryProvider, LogLevel, Logger, LoggingProvider};
///
/// let provider = InMemoryProvider::new(LogLevel::Info);
/// let logger = provider.create_logger("cache");
/// logger.debug(format_args!("filtered out"));
/// logger.warn(format_args!("eviction storm"));
///
/// let records = provider.records();
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].logger, "cache");
/// ```
#[derive(Clone)]
pub struct InMemoryProvider {
    minimum: LogLevel,
    store: Arc<RecordStore>,
}

impl InMemoryProvider {
    /// Create a provider retaining records at or above `minimum`.
    pub fn new(minimum: LogLevel) -> Self {
        Self::with_capacity(minimum, DEFAULT_MEMORY_CAPACITY)
    }

    /// Create a provider with an explicit capacity (0 = unbounded).
    pub fn with_capacity(minimum: LogLevel, capacity: usize) -> Self {
        Self {
            minimum,
            store: Arc::new(RecordStore {
                records: Mutex::new(VecDeque::new()),
                capacity,
            }),
        }
    }

    /// Snapshot of all retained records, oldest first.
    pub fn records(&self) -> Vec<LogRecord> {
        self.store.records.lock().iter().cloned().collect()
    }

    /// Retained records emitted by the logger called `name`.
    pub fn records_for(&self, name: &str) -> Vec<LogRecord> {
        self.store
            .records
            .lock()
            .iter()
            .filter(|r| r.logger == name)
            .cloned()
            .collect()
    }

    /// Number of retained records.
    pub fn len(&self) -> usize {
        self.store.records.lock().len()
    }

    /// Returns true when nothing has been retained.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop all retained records.
    pub fn clear(&self) {
        self.store.records.lock().clear();
    }

    /// Configured capacity (0 = unbounded).
    pub fn capacity(&self) -> usize {
        self.store.capacity
    }
}

impl Default for InMemoryProvider {
    fn default() -> Self {
        Self::new(LogLevel::Trace)
    }
}

impl fmt::Debug for InMemoryProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InMemoryProvider")
            .field("minimum", &self.minimum)
            .field("capacity", &self.store.capacity)
            .field("retained", &self.len())
            .finish()
    }
}

impl LoggingProvider for InMemoryProvider {
    fn create_logger(&self, name: &str) -> LoggerHandle {
        let logger = MemoryLogger {
            name: name.to_string(),
            minimum: self.minimum,
            store: Arc::clone(&self.store),
        };
        LoggerHandle::new(name, Arc::new(logger))
    }

    fn minimum_level(&self) -> LogLevel {
        self.minimum
    }

    fn kind(&self) -> &'static str {
        "InMemory"
    }
}

struct MemoryLogger {
    name: String,
    minimum: LogLevel,
    store: Arc<RecordStore>,
}

impl Logger for MemoryLogger {
    fn log(&self, level: LogLevel, args: Arguments<'_>) {
        if level < self.minimum {
            return;
        }
        self.store
            .push(LogRecord::now(level, self.name.as_str(), args.to_string()));
    }

    fn is_enabled(&self, level: LogLevel) -> bool {
        level >= self.minimum
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_at_or_above_minimum() {
        let provider = InMemoryProvider::new(LogLevel::Warn);
        let logger = provider.create_logger("svc");

        logger.info(format_args!("ignored"));
        logger.warn(format_args!("kept {}", 1));
        logger.fatal(format_args!("kept {}", 2));

        let records = provider.records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].message, "kept 1");
        assert_eq!(records[0].level, LogLevel::Warn);
        assert_eq!(records[1].level, LogLevel::Fatal);
    }

    #[test]
    fn test_loggers_share_buffer() {
        let provider = InMemoryProvider::default();
        provider.create_logger("a").info(format_args!("from a"));
        provider.create_logger("b").info(format_args!("from b"));

        assert_eq!(provider.len(), 2);
        assert_eq!(provider.records_for("b")[0].message, "from b");
        assert!(provider.records_for("c").is_empty());
    }

    #[test]
    fn test_clone_shares_buffer() {
        let provider = InMemoryProvider::default();
        let observer = provider.clone();
        provider.create_logger("a").error(format_args!("boom"));
        assert_eq!(observer.len(), 1);
    }

    #[test]
    fn test_capacity_drops_oldest() {
        let provider = InMemoryProvider::with_capacity(LogLevel::Trace, 2);
        let logger = provider.create_logger("a");
        for i in 0..3 {
            logger.info(format_args!("{}", i));
        }

        let messages: Vec<_> = provider.records().into_iter().map(|r| r.message).collect();
        assert_eq!(messages, vec!["1", "2"]);
    }

    #[test]
    fn test_zero_capacity_is_unbounded() {
        let provider = InMemoryProvider::with_capacity(LogLevel::Trace, 0);
        let logger = provider.create_logger("a");
        for i in 0..(DEFAULT_MEMORY_CAPACITY + 5) {
            logger.trace(format_args!("{}", i));
        }
        assert_eq!(provider.len(), DEFAULT_MEMORY_CAPACITY + 5);
    }

    #[test]
    fn test_clear() {
        let provider = InMemoryProvider::default();
        provider.create_logger("a").info(format_args!("x"));
        assert!(!provider.is_empty());
        provider.clear();
        assert!(provider.is_empty());
    }

    #[test]
    fn test_is_enabled_follows_minimum() {
        let provider = InMemoryProvider::new(LogLevel::Error);
        let logger = provider.create_logger("a");
        assert!(!logger.is_enabled(LogLevel::Warn));
        assert!(logger.is_enabled(LogLevel::Error));
        assert_eq!(provider.minimum_level(), LogLevel::Error);
    }
}
