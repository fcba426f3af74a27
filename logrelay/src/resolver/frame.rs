//! Stack frame model and frame sources.

use std::fmt;

/// One entry of the call chain as seen by the resolver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackFrame {
    /// Fully-qualified path of the item that declares the function, if any.
    ///
    /// For methods this is the `impl` self type (`app::net::Client`), for
    /// free functions the enclosing module (`app::net`). Symbols with no
    /// path at all (`main` called from C, `_start`) have none.
    pub declaring_type: Option<String>,
    /// Crate that owns the declaring type; empty without a declaring type.
    pub module: String,
    /// Bare function name.
    pub function: String,
}

impl StackFrame {
    /// Frame for a function declared inside `declaring_type`.
    ///
    /// The module is the first path segment of the declaring type.
    pub fn method(declaring_type: impl Into<String>, function: impl Into<String>) -> Self {
        let declaring_type = declaring_type.into();
        let module = declaring_type
            .split("::")
            .next()
            .unwrap_or_default()
            .to_string();
        Self {
            declaring_type: Some(declaring_type),
            module,
            function: function.into(),
        }
    }

    /// Frame for a top-level symbol without a declaring type.
    pub fn top_level(function: impl Into<String>) -> Self {
        Self {
            declaring_type: None,
            module: String::new(),
            function: function.into(),
        }
    }
}

impl fmt::Display for StackFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.declaring_type {
            Some(ty) => write!(f, "{}::{}", ty, self.function),
            None => f.write_str(&self.function),
        }
    }
}

/// Source of the active call chain.
///
/// `frames` returns the chain innermost-first, starting at the frame of the
/// function that asked for it (the resolver).
pub trait FrameSource: Send + Sync {
    fn frames(&self) -> Vec<StackFrame>;
}

/// Frame source returning a fixed sequence.
///
/// Lets the resolution heuristic be exercised without a real stack.
#[derive(Debug, Clone, Default)]
pub struct StaticFrameSource {
    frames: Vec<StackFrame>,
}

impl StaticFrameSource {
    pub fn new(frames: Vec<StackFrame>) -> Self {
        Self { frames }
    }
}

impl FrameSource for StaticFrameSource {
    fn frames(&self) -> Vec<StackFrame> {
        self.frames.clone()
    }
}
