//! Configuration for logrelay.
//!
//! # Example
//!
//! ```
//! use logrelay::config::LogRelayConfig;
//! use logrelay::host::HostContext;
//! use logrelay::registry::ProviderRegistry;
//!
//! let config = LogRelayConfig::default();
//! let registry = ProviderRegistry::new(HostContext::Hosted);
//! config.install(&registry).unwrap();
//! assert_eq!(registry.provider().kind(), "Console");
//! ```

mod file;
mod parser;
mod settings;
mod writer;

pub use file::{config_directory, config_file_path, ConfigFileError};
pub use settings::{
    ConsoleSettings, LogRelayConfig, LoggingSettings, MemorySettings, ResolverSettings,
};
