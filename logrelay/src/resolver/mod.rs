//! Caller resolution for automatic logger naming.
//!
//! The resolver walks the call chain outward from its own frame and names
//! the logger after the first frame that belongs to application code.
//!
//! # Algorithm
//!
//! ```text
//! frames[0]  CallerResolver::capture_caller   ┐ skipped by offset
//! frames[1]  CallerResolver::resolve          │ (or automatic_logger)
//!                                             ┘
//! frames[2]  std / core / logrelay frame      → infrastructure, advance
//! frames[3]  app::service::Worker::start      → "app::service::Worker"
//! ```
//!
//! A frame without a declaring type ends the walk with its bare function
//! name. Running out of frames is an error, never a made-up name.

mod backtrace_source;
mod frame;
mod symbol;

pub use backtrace_source::BacktraceFrameSource;
pub use frame::{FrameSource, StackFrame, StaticFrameSource};
pub use symbol::parse_symbol;

use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Frames belonging to the capture step and the entry point that called it
/// ([`CallerResolver::resolve`] or the registry's automatic logger lookup).
pub const FRAMES_TO_SKIP: usize = 2;

/// Crates whose frames are never attributed as the caller.
pub const DEFAULT_INFRASTRUCTURE_MODULES: &[&str] =
    &["std", "core", "alloc", "backtrace", env!("CARGO_CRATE_NAME")];

/// Errors raised while resolving the calling type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// Every frame past the offset belonged to infrastructure code.
    #[error("No application frame found on the call stack ({inspected} frames inspected)")]
    StackExhausted { inspected: usize },
}

/// Finds the fully-qualified name of the nearest application caller.
#[derive(Clone)]
pub struct CallerResolver {
    source: Arc<dyn FrameSource>,
    infrastructure: Vec<String>,
}

impl CallerResolver {
    /// Resolver over the given frame source with the default infrastructure set.
    pub fn new(source: Arc<dyn FrameSource>) -> Self {
        Self {
            source,
            infrastructure: DEFAULT_INFRASTRUCTURE_MODULES
                .iter()
                .map(|m| m.to_string())
                .collect(),
        }
    }

    /// Treat frames from these additional crates as infrastructure.
    pub fn with_infrastructure_modules<I, S>(mut self, modules: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for module in modules {
            let module = module.into();
            if !self.is_infrastructure(&module) {
                self.infrastructure.push(module);
            }
        }
        self
    }

    /// Returns whether frames owned by `module` are skipped.
    pub fn is_infrastructure(&self, module: &str) -> bool {
        self.infrastructure
            .iter()
            .any(|m| m.eq_ignore_ascii_case(module))
    }

    /// Infrastructure crate names in effect.
    pub fn infrastructure_modules(&self) -> &[String] {
        &self.infrastructure
    }

    /// Name of the application frame that called this method.
    ///
    /// Usable directly from application code; the registry goes through the
    /// same capture path so both see one frame between capture and caller.
    #[inline(never)]
    pub fn resolve(&self) -> Result<String, ResolveError> {
        // Keeps this frame on the stack: a tail call would drop it.
        std::hint::black_box(self.capture_caller())
    }

    /// Capture the chain and walk it. The chain starts at this frame; the
    /// entry point that called it is the second skipped frame.
    #[inline(never)]
    pub(crate) fn capture_caller(&self) -> Result<String, ResolveError> {
        let frames = self.source.frames();
        self.resolve_from(&frames)
    }

    /// Run the walk over an already captured chain.
    pub fn resolve_from(&self, frames: &[StackFrame]) -> Result<String, ResolveError> {
        for frame in frames.iter().skip(FRAMES_TO_SKIP) {
            match &frame.declaring_type {
                None => return Ok(frame.function.clone()),
                Some(_) if self.is_infrastructure(&frame.module) => continue,
                Some(declaring) => return Ok(declaring.clone()),
            }
        }

        Err(ResolveError::StackExhausted {
            inspected: frames.len().saturating_sub(FRAMES_TO_SKIP),
        })
    }
}

impl Default for CallerResolver {
    fn default() -> Self {
        Self::new(Arc::new(BacktraceFrameSource))
    }
}

impl fmt::Debug for CallerResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallerResolver")
            .field("infrastructure", &self.infrastructure)
            .finish_non_exhaustive()
    }
}
