//! Logging provider registry.
//!
//! The registry holds exactly one active [`LoggingProvider`] and freezes that
//! choice the first time anything reads it.
//!
//! # Lifecycle
//!
//! ```text
//! construct ──► configurable ──(any read: provider(), logger*(), ...)──► locked
//!                   │  ▲                                                    │
//!                   └──┘ set_provider / log_to_console*                     └─ set_provider → Err(ConfigurationLocked)
//! ```
//!
//! **Any read locks**, including [`ProviderRegistry::provider`] called only
//! to inspect the configuration. Use [`ProviderRegistry::is_locked`] to look
//! at the state without changing it.
//!
//! # Single instance
//!
//! Libraries and applications in one process share the instance returned by
//! [`global`]. Tests and embedders that want isolation construct their own
//! registry and pass it by reference.

mod error;

pub use error::RegistryError;

use parking_lot::Mutex;
use std::fmt;
use std::sync::{Arc, OnceLock};

use crate::host::{EntryPointDetector, HostContext, HostDetector};
use crate::log::{
    ConsoleProvider, InMemoryProvider, LogLevel, LoggerHandle, LoggingProvider, NoOpProvider,
    ProviderConfig,
};
use crate::resolver::{CallerResolver, FrameSource};

/// Current provider and lock flag, always read and written together.
struct RegistryState {
    provider: Arc<dyn LoggingProvider>,
    locked: bool,
}

/// Holds the active logging provider behind a one-shot lock.
///
/// # Example
///
/// ```
/// use logrelay::host::HostContext;
/// use logrelay::log::{LogLevel, Logger};
/// use logrelay::registry::{ProviderRegistry, RegistryError};
///
/// let registry = ProviderRegistry::new(HostContext::Hosted);
/// registry.log_to_console_at(LogLevel::Warn)?;
///
/// let logger = registry.logger("startup")?;
/// logger.warn(format_args!("configured"));
///
/// // The first lookup locked the registry.
/// assert_eq!(registry.log_to_console(), Err(RegistryError::ConfigurationLocked));
/// # Ok::<(), RegistryError>(())
/// ```
pub struct ProviderRegistry {
    state: Mutex<RegistryState>,
    resolver: CallerResolver,
    host: HostContext,
}

impl ProviderRegistry {
    /// Create a registry with the default provider for `host`.
    ///
    /// Hosted executables start with a [`NoOpProvider`] and are expected to
    /// configure their own; embedded contexts start with an
    /// [`InMemoryProvider`] so records can still be inspected.
    pub fn new(host: HostContext) -> Self {
        Self {
            state: Mutex::new(RegistryState {
                provider: default_provider(host),
                locked: false,
            }),
            resolver: CallerResolver::default(),
            host,
        }
    }

    /// Create a registry, asking `detector` for the host context.
    pub fn detect(detector: &dyn HostDetector) -> Self {
        Self::new(detector.detect())
    }

    /// Replace the caller resolver used by [`Self::automatic_logger`].
    pub fn with_resolver(mut self, resolver: CallerResolver) -> Self {
        self.resolver = resolver;
        self
    }

    /// Resolve callers from `source`, keeping the infrastructure set.
    pub fn with_frame_source(mut self, source: Arc<dyn FrameSource>) -> Self {
        let modules = self.resolver.infrastructure_modules().to_vec();
        self.resolver = CallerResolver::new(source).with_infrastructure_modules(modules);
        self
    }

    /// Host context the default provider was chosen for.
    pub fn host_context(&self) -> HostContext {
        self.host
    }

    /// Caller resolver in use.
    pub fn resolver(&self) -> &CallerResolver {
        &self.resolver
    }

    /// Returns whether configuration is frozen, without freezing it.
    pub fn is_locked(&self) -> bool {
        self.state.lock().locked
    }

    /// The active provider.
    ///
    /// Reading the provider locks the registry: every later
    /// [`Self::set_provider`] fails.
    pub fn provider(&self) -> Arc<dyn LoggingProvider> {
        let (provider, first_use) = {
            let mut state = self.state.lock();
            let first_use = !state.locked;
            state.locked = true;
            (Arc::clone(&state.provider), first_use)
        };

        // Events are emitted after the guard is released; a subscriber may
        // read the registry.
        if first_use {
            tracing::debug!(
                provider = provider.kind(),
                "Logging provider locked by first use"
            );
        }
        provider
    }

    /// Install `provider` as the active backend.
    ///
    /// # Errors
    ///
    /// [`RegistryError::ConfigurationLocked`] once any logger has been
    /// requested, even when `provider` is the one already active.
    pub fn set_provider(&self, provider: Arc<dyn LoggingProvider>) -> Result<(), RegistryError> {
        let mut state = self.state.lock();
        if state.locked {
            let current = Arc::clone(&state.provider);
            drop(state);
            tracing::warn!(
                current = current.kind(),
                rejected = provider.kind(),
                "Rejected logging provider change after first use"
            );
            return Err(RegistryError::ConfigurationLocked);
        }

        let previous = std::mem::replace(&mut state.provider, Arc::clone(&provider));
        drop(state);
        tracing::debug!(
            previous = previous.kind(),
            provider = provider.kind(),
            minimum = %provider.minimum_level(),
            "Logging provider installed"
        );
        Ok(())
    }

    /// Install the provider described by `config`.
    pub fn configure(&self, config: &ProviderConfig) -> Result<(), RegistryError> {
        self.set_provider(config.create())
    }

    /// Log to stdout through a [`ConsoleProvider`] at its default level.
    pub fn log_to_console(&self) -> Result<(), RegistryError> {
        self.set_provider(Arc::new(ConsoleProvider::default()))
    }

    /// Log to stdout, emitting only records at or above `level`.
    pub fn log_to_console_at(&self, level: LogLevel) -> Result<(), RegistryError> {
        self.set_provider(Arc::new(ConsoleProvider::new(level)))
    }

    /// Logger called `name`.
    ///
    /// # Errors
    ///
    /// [`RegistryError::InvalidName`] for empty names or names containing
    /// control characters. The registry is not locked in that case.
    pub fn logger(&self, name: &str) -> Result<LoggerHandle, RegistryError> {
        validate_name(name)?;
        Ok(self.create(name))
    }

    /// Logger named after the fully-qualified name of `T`.
    pub fn logger_for<T: ?Sized>(&self) -> LoggerHandle {
        self.create(std::any::type_name::<T>())
    }

    /// Logger named after the type of `value`.
    pub fn logger_for_value<T: ?Sized>(&self, value: &T) -> LoggerHandle {
        self.create(std::any::type_name_of_val(value))
    }

    /// Logger named after the application type that called this method.
    ///
    /// Frames from the standard library and this crate are skipped.
    ///
    /// Callers inlined by the optimizer are invisible without debuginfo: the
    /// name then comes from the next frame out. Mark helpers that must own
    /// the logger `#[inline(never)]` in release builds.
    ///
    /// # Errors
    ///
    /// [`RegistryError::ResolutionFailed`] when no application frame is on
    /// the stack (for example in stripped binaries without symbols).
    #[inline(never)]
    pub fn automatic_logger(&self) -> Result<LoggerHandle, RegistryError> {
        let name = self.resolver.capture_caller()?;
        self.logger(&name)
    }

    fn create(&self, name: &str) -> LoggerHandle {
        self.provider().create_logger(name)
    }
}

impl fmt::Debug for ProviderRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.lock();
        f.debug_struct("ProviderRegistry")
            .field("host", &self.host)
            .field("provider", &state.provider.kind())
            .field("locked", &state.locked)
            .finish()
    }
}

/// Provider a fresh registry starts with.
pub fn default_provider(host: HostContext) -> Arc<dyn LoggingProvider> {
    match host {
        HostContext::Hosted => Arc::new(NoOpProvider),
        HostContext::Embedded => Arc::new(InMemoryProvider::default()),
    }
}

fn validate_name(name: &str) -> Result<(), RegistryError> {
    let reason = if name.trim().is_empty() {
        "name is empty"
    } else if name.chars().any(char::is_control) {
        "name contains control characters"
    } else {
        return Ok(());
    };

    Err(RegistryError::InvalidName {
        name: name.to_string(),
        reason: reason.to_string(),
    })
}

/// Process-wide registry instance.
static GLOBAL: OnceLock<ProviderRegistry> = OnceLock::new();

/// The registry shared by the whole process.
///
/// Created on first access; the default provider is chosen by
/// [`EntryPointDetector`], so touch it from `main` (or set
/// [`crate::host::HOST_ENV_VAR`]) when the default matters.
///
/// Detection looks at the name of the thread that first touches the
/// registry. A hosted binary whose first access happens on a worker thread
/// gets the embedded default: an [`InMemoryProvider`] that silently retains
/// up to [`crate::log::DEFAULT_MEMORY_CAPACITY`] records until a provider is
/// configured.
pub fn global() -> &'static ProviderRegistry {
    GLOBAL.get_or_init(|| ProviderRegistry::detect(&EntryPointDetector))
}
