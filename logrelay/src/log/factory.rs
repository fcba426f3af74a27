//! Provider factory for centralized provider creation.
//!
//! Configuration files and the CLI describe a backend with a
//! [`ProviderConfig`]; [`ProviderConfig::create`] turns it into a shared
//! provider ready to be installed in a registry.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use super::{
    ConsoleProvider, ConsoleStream, InMemoryProvider, LogLevel, LoggingProvider, NoOpProvider,
    TracingProvider,
};

/// Kind of backend, as named in configuration files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProviderKind {
    NoOp,
    Memory,
    #[default]
    Console,
    Tracing,
}

impl ProviderKind {
    /// All kinds, in the order they are documented.
    pub const ALL: [ProviderKind; 4] = [
        ProviderKind::NoOp,
        ProviderKind::Memory,
        ProviderKind::Console,
        ProviderKind::Tracing,
    ];

    /// Configuration-file spelling of this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::NoOp => "noop",
            ProviderKind::Memory => "memory",
            ProviderKind::Console => "console",
            ProviderKind::Tracing => "tracing",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "noop" | "none" => Ok(ProviderKind::NoOp),
            "memory" | "in-memory" => Ok(ProviderKind::Memory),
            "console" => Ok(ProviderKind::Console),
            "tracing" => Ok(ProviderKind::Tracing),
            other => Err(format!(
                "unknown provider '{}' (expected one of: noop, memory, console, tracing)",
                other
            )),
        }
    }
}

/// Configuration for creating a provider.
///
/// # Example
///
/// ```
/// use logrelay::log::{LogLevel, ProviderConfig};
///
/// let provider = ProviderConfig::console(LogLevel::Warn).create();
/// assert_eq!(provider.kind(), "Console");
/// assert_eq!(provider.minimum_level(), LogLevel::Warn);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderConfig {
    /// Discard everything.
    NoOp,

    /// Retain records in memory.
    Memory {
        minimum: LogLevel,
        /// Maximum retained records (0 = unbounded)
        capacity: usize,
    },

    /// Print records to a standard stream.
    Console {
        minimum: LogLevel,
        stream: ConsoleStream,
    },

    /// Forward records to `tracing`.
    Tracing { minimum: LogLevel },
}

impl ProviderConfig {
    /// Console provider on stdout.
    pub fn console(minimum: LogLevel) -> Self {
        Self::Console {
            minimum,
            stream: ConsoleStream::Stdout,
        }
    }

    /// In-memory provider with the default capacity.
    pub fn memory(minimum: LogLevel) -> Self {
        Self::Memory {
            minimum,
            capacity: super::memory::DEFAULT_MEMORY_CAPACITY,
        }
    }

    /// Kind of provider this configuration creates.
    pub fn kind(&self) -> ProviderKind {
        match self {
            Self::NoOp => ProviderKind::NoOp,
            Self::Memory { .. } => ProviderKind::Memory,
            Self::Console { .. } => ProviderKind::Console,
            Self::Tracing { .. } => ProviderKind::Tracing,
        }
    }

    /// Create the provider described by this configuration.
    pub fn create(&self) -> Arc<dyn LoggingProvider> {
        match self {
            Self::NoOp => Arc::new(NoOpProvider),
            Self::Memory { minimum, capacity } => {
                Arc::new(InMemoryProvider::with_capacity(*minimum, *capacity))
            }
            Self::Console { minimum, stream } => {
                Arc::new(ConsoleProvider::with_stream(*minimum, *stream))
            }
            Self::Tracing { minimum } => Arc::new(TracingProvider::new(*minimum)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_parse() {
        assert_eq!("Console".parse::<ProviderKind>(), Ok(ProviderKind::Console));
        assert_eq!("none".parse::<ProviderKind>(), Ok(ProviderKind::NoOp));
        assert_eq!("in-memory".parse::<ProviderKind>(), Ok(ProviderKind::Memory));
        assert!("syslog".parse::<ProviderKind>().is_err());
    }

    #[test]
    fn test_kind_round_trip() {
        for kind in ProviderKind::ALL {
            assert_eq!(kind.to_string().parse::<ProviderKind>(), Ok(kind));
        }
    }

    #[test]
    fn test_create_each_kind() {
        let cases = [
            (ProviderConfig::NoOp, "NoOp"),
            (ProviderConfig::memory(LogLevel::Debug), "InMemory"),
            (ProviderConfig::console(LogLevel::Info), "Console"),
            (
                ProviderConfig::Tracing {
                    minimum: LogLevel::Error,
                },
                "Tracing",
            ),
        ];

        for (config, expected) in cases {
            assert_eq!(config.create().kind(), expected);
        }
    }

    #[test]
    fn test_create_carries_minimum() {
        let provider = ProviderConfig::Memory {
            minimum: LogLevel::Error,
            capacity: 5,
        }
        .create();
        assert_eq!(provider.minimum_level(), LogLevel::Error);
    }

    #[test]
    fn test_config_kind() {
        assert_eq!(ProviderConfig::console(LogLevel::Warn).kind(), ProviderKind::Console);
        assert_eq!(ProviderConfig::NoOp.kind(), ProviderKind::NoOp);
    }
}
