//! logrelay - process-wide logging provider registry
//!
//! A library or application asks the registry for a logger; the registry
//! hands out handles minted by whichever provider was configured before the
//! first request. After that first request the choice is frozen.
//!
//! ```
//! use logrelay::host::HostContext;
//! use logrelay::log::{InMemoryProvider, LogLevel, Logger};
//! use logrelay::registry::ProviderRegistry;
//! use std::sync::Arc;
//!
//! struct Scheduler;
//!
//! let registry = ProviderRegistry::new(HostContext::Hosted);
//! let records = InMemoryProvider::new(LogLevel::Info);
//! registry.set_provider(Arc::new(records.clone())).unwrap();
//!
//! let logger = registry.logger_for::<Scheduler>();
//! logger.info(format_args!("tick"));
//!
//! assert_eq!(records.records()[0].logger, std::any::type_name::<Scheduler>());
//! assert!(registry.set_provider(Arc::new(records)).is_err());
//! ```
//!
//! # Modules
//!
//! - [`registry`] - provider slot, one-shot lock, lookup surface
//! - [`resolver`] - caller resolution for automatic loggers
//! - [`log`] - logger trait, levels and the shipped providers
//! - [`host`] - hosted/embedded detection for the default provider
//! - [`config`] - INI configuration
//! - [`logging`] - tracing subscriber setup

pub mod config;
pub mod host;
pub mod log;
pub mod logging;
pub mod registry;
pub mod resolver;
pub mod util;

/// Version of the logrelay library and CLI.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
