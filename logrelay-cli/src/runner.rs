//! CLI runner for common setup.
//!
//! Loads configuration, applies command-line overrides, builds the registry
//! and installs the configured provider before any command asks for a logger.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use logrelay::config::{config_file_path, LogRelayConfig};
use logrelay::host::EntryPointDetector;
use logrelay::log::{InMemoryProvider, LogLevel, ProviderKind};
use logrelay::logging::{default_log_dir, default_log_file, init_logging, LoggingGuard};
use logrelay::registry::ProviderRegistry;
use logrelay::resolver::CallerResolver;

use crate::error::CliError;

/// Overrides given on the command line.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub provider: Option<String>,
    pub level: Option<String>,
}

/// Runner that owns the registry for the lifetime of a command.
pub struct CliRunner {
    /// Keeps the tracing file writer alive when the tracing provider is used
    #[allow(dead_code)]
    logging_guard: Option<LoggingGuard>,
    config: LogRelayConfig,
    registry: ProviderRegistry,
    /// Set when the memory provider is installed, to print what it retained
    memory: Option<InMemoryProvider>,
}

impl CliRunner {
    /// Load config from `path` (or the default path) and install its provider.
    pub fn new(path: Option<&Path>, overrides: &Overrides) -> Result<Self, CliError> {
        let path = path.map(Path::to_path_buf).unwrap_or_else(config_file_path);
        let config = apply_overrides(LogRelayConfig::load_from(&path)?, overrides)?;

        let resolver =
            CallerResolver::default().with_infrastructure_modules(config.resolver_modules());
        let registry = ProviderRegistry::detect(&EntryPointDetector).with_resolver(resolver);

        let mut logging_guard = None;
        let mut memory = None;
        match config.logging.provider {
            ProviderKind::Memory => {
                let provider =
                    InMemoryProvider::with_capacity(config.logging.level, config.memory.capacity);
                registry.set_provider(Arc::new(provider.clone()))?;
                memory = Some(provider);
            }
            ProviderKind::Tracing => {
                let guard = init_logging(
                    &PathBuf::from(default_log_dir()),
                    default_log_file(),
                    config.logging.level,
                )
                .map_err(|e| CliError::LoggingInit(e.to_string()))?;
                logging_guard = Some(guard);
                config.install(&registry)?;
            }
            ProviderKind::NoOp | ProviderKind::Console => config.install(&registry)?,
        }

        Ok(Self {
            logging_guard,
            config,
            registry,
            memory,
        })
    }

    pub fn config(&self) -> &LogRelayConfig {
        &self.config
    }

    pub fn registry(&self) -> &ProviderRegistry {
        &self.registry
    }

    /// Retained records, when the memory provider is active.
    pub fn memory(&self) -> Option<&InMemoryProvider> {
        self.memory.as_ref()
    }
}

/// Apply `--provider` / `--level` on top of the loaded configuration.
pub fn apply_overrides(
    mut config: LogRelayConfig,
    overrides: &Overrides,
) -> Result<LogRelayConfig, CliError> {
    if let Some(provider) = &overrides.provider {
        config.logging.provider = provider
            .parse::<ProviderKind>()
            .map_err(CliError::InvalidArgument)?;
    }
    if let Some(level) = &overrides.level {
        config.logging.level = level
            .parse::<LogLevel>()
            .map_err(|e| CliError::InvalidArgument(e.to_string()))?;
    }
    Ok(config)
}
