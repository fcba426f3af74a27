//! Logging abstraction layer.
//!
//! Application code logs through a [`LoggerHandle`], which forwards to a
//! backend [`Logger`] minted by a [`LoggingProvider`]. Which provider is used
//! is decided once per process by the [`crate::registry::ProviderRegistry`].
//!
//! # Architecture
//!
//! - `Logger` trait: the interface every backend logger implements
//! - `LoggingProvider` trait: mints named loggers, owns the severity policy
//! - `NoOpProvider`: silent, the default for hosted executables
//! - `InMemoryProvider`: retains records, the default for embedded use
//! - `ConsoleProvider`: one line per record on stdout/stderr
//! - `TracingProvider`: adapter onto the `tracing` crate
//!
//! # Usage
//!
//! ```
//! use logrelay::log::{InMemoryProvider, LogLevel, Logger, LoggingProvider};
//! use logrelay::{log_info, log_debug};
//!
//! struct MyComponent {
//!     logger: logrelay::log::LoggerHandle,
//! }
//!
//! impl MyComponent {
//!     fn do_work(&self) {
//!         log_info!(self.logger, "Starting work");
//!         log_debug!(self.logger, "Work completed");
//!     }
//! }
//!
//! let provider = InMemoryProvider::new(LogLevel::Info);
//! let component = MyComponent { logger: provider.create_logger("my_component") };
//! component.do_work();
//! assert_eq!(provider.len(), 1);
//! ```

mod console;
mod factory;
pub(crate) mod memory;
mod noop;
mod provider;
mod record;
mod tracing_adapter;
mod r#trait;

pub use console::{ConsoleProvider, ConsoleStream};
pub use factory::{ProviderConfig, ProviderKind};
pub use memory::{InMemoryProvider, DEFAULT_MEMORY_CAPACITY};
pub use noop::{NoOpLogger, NoOpProvider};
pub use provider::{LoggerHandle, LoggingProvider};
pub use r#trait::{LogLevel, LogLevelParseError, Logger};
pub use record::LogRecord;
pub use tracing_adapter::{TracingLogger, TracingProvider};
