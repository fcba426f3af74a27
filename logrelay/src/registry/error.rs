//! Error types for the registry module.

use thiserror::Error;

use crate::resolver::ResolveError;

/// Errors returned by [`super::ProviderRegistry`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// A logger was already handed out, so the provider can no longer change.
    #[error(
        "Logging provider is locked: a logger has already been requested. \
         Configure the provider before the first logger is created"
    )]
    ConfigurationLocked,

    /// No application caller could be found for an automatic logger.
    #[error("Cannot name automatic logger: {0}. Request a named or typed logger instead")]
    ResolutionFailed(#[from] ResolveError),

    /// The requested logger name was rejected.
    #[error("Invalid logger name '{name}': {reason}")]
    InvalidName { name: String, reason: String },
}

impl RegistryError {
    /// Returns true for the configure-after-first-use error.
    pub fn is_locked(&self) -> bool {
        matches!(self, RegistryError::ConfigurationLocked)
    }
}
