//! Settings structs for all configuration sections.
//!
//! Each struct represents one `[section]` of the INI config file.
//! These are pure data types with no parsing or serialization logic.

use crate::log::{
    ConsoleStream, LogLevel, ProviderConfig, ProviderKind, DEFAULT_MEMORY_CAPACITY,
};

/// Complete configuration loaded from config.ini.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LogRelayConfig {
    /// Which provider to install and its threshold
    pub logging: LoggingSettings,
    /// In-memory provider settings
    pub memory: MemorySettings,
    /// Console provider settings
    pub console: ConsoleSettings,
    /// Automatic logger naming settings
    pub resolver: ResolverSettings,
}

/// Provider selection.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LoggingSettings {
    /// Provider kind: "noop", "memory", "console" or "tracing"
    pub provider: ProviderKind,
    /// Minimum level emitted by the provider
    pub level: LogLevel,
}

/// In-memory provider configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemorySettings {
    /// Maximum retained records (0 = unbounded)
    pub capacity: usize,
}

impl Default for MemorySettings {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_MEMORY_CAPACITY,
        }
    }
}

/// Console provider configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConsoleSettings {
    /// Stream records are written to
    pub stream: ConsoleStream,
}

/// Caller resolution configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResolverSettings {
    /// Extra crates treated as infrastructure when naming automatic loggers
    pub infrastructure_modules: Vec<String>,
}

impl LogRelayConfig {
    /// Provider description derived from these settings.
    pub fn provider_config(&self) -> ProviderConfig {
        let minimum = self.logging.level;
        match self.logging.provider {
            ProviderKind::NoOp => ProviderConfig::NoOp,
            ProviderKind::Memory => ProviderConfig::Memory {
                minimum,
                capacity: self.memory.capacity,
            },
            ProviderKind::Console => ProviderConfig::Console {
                minimum,
                stream: self.console.stream,
            },
            ProviderKind::Tracing => ProviderConfig::Tracing { minimum },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = LogRelayConfig::default();
        assert_eq!(config.logging.provider, ProviderKind::Console);
        assert_eq!(config.logging.level, LogLevel::Info);
        assert_eq!(config.memory.capacity, DEFAULT_MEMORY_CAPACITY);
        assert_eq!(config.console.stream, ConsoleStream::Stdout);
        assert!(config.resolver.infrastructure_modules.is_empty());
    }

    #[test]
    fn test_provider_config_uses_section_settings() {
        let mut config = LogRelayConfig::default();
        config.logging.provider = ProviderKind::Memory;
        config.logging.level = LogLevel::Warn;
        config.memory.capacity = 10;

        assert_eq!(
            config.provider_config(),
            ProviderConfig::Memory {
                minimum: LogLevel::Warn,
                capacity: 10
            }
        );

        config.logging.provider = ProviderKind::Console;
        config.console.stream = ConsoleStream::Stderr;
        assert_eq!(
            config.provider_config(),
            ProviderConfig::Console {
                minimum: LogLevel::Warn,
                stream: ConsoleStream::Stderr
            }
        );
    }
}
