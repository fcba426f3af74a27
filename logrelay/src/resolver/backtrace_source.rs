//! Frame source backed by the native unwinder.

use super::symbol::parse_symbol;
use super::{CallerResolver, FrameSource, StackFrame};

/// Captures the current thread's stack with the `backtrace` crate.
///
/// Inlined functions are reported as separate frames when debug info is
/// available. Frames whose symbol cannot be resolved are dropped.
///
/// The returned chain starts at the resolver's capture frame; unwinder and
/// capture frames above it are removed. Without symbols for the resolver
/// (stripped binaries) only the leading `backtrace` crate frames are removed.
#[derive(Debug, Clone, Copy, Default)]
pub struct BacktraceFrameSource;

impl BacktraceFrameSource {
    pub fn new() -> Self {
        Self
    }
}

impl FrameSource for BacktraceFrameSource {
    #[inline(never)]
    fn frames(&self) -> Vec<StackFrame> {
        let mut frames = Vec::new();
        backtrace::trace(|frame| {
            backtrace::resolve_frame(frame, |symbol| {
                if let Some(parsed) = symbol
                    .name()
                    .and_then(|name| parse_symbol(&format!("{:#}", name)))
                {
                    frames.push(parsed);
                }
            });
            true
        });
        trim_capture_frames(frames)
    }
}

/// Function the resolver captures from; kept as the first frame.
const CAPTURE_FRAME: &str = "capture_caller";

/// Drop frames belonging to the unwinder and to this source.
fn trim_capture_frames(mut frames: Vec<StackFrame>) -> Vec<StackFrame> {
    let resolver = std::any::type_name::<CallerResolver>();
    let start = frames
        .iter()
        .position(|f| {
            f.declaring_type.as_deref() == Some(resolver) && f.function == CAPTURE_FRAME
        })
        .unwrap_or_else(|| {
            frames
                .iter()
                .position(|f| !f.module.eq_ignore_ascii_case("backtrace"))
                .unwrap_or(frames.len())
        });
    frames.drain(..start);
    frames
}
