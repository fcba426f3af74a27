//! Host context detection.
//!
//! The default provider depends on whether the process was started through a
//! Rust entry point (a hosted executable) or the crate is running inside a
//! foreign host as an embedded library.

use std::fmt;
use std::str::FromStr;

/// Environment variable overriding host detection (`hosted` or `embedded`).
pub const HOST_ENV_VAR: &str = "LOGRELAY_HOST";

/// How the process hosting this crate was started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostContext {
    /// Standalone executable with its own entry point.
    Hosted,
    /// Library loaded by a host that has no Rust entry point.
    Embedded,
}

impl fmt::Display for HostContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostContext::Hosted => f.write_str("hosted"),
            HostContext::Embedded => f.write_str("embedded"),
        }
    }
}

impl FromStr for HostContext {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "hosted" => Ok(HostContext::Hosted),
            "embedded" => Ok(HostContext::Embedded),
            other => Err(format!("unknown host context '{}'", other)),
        }
    }
}

/// Capability deciding the [`HostContext`] at registry construction.
pub trait HostDetector {
    fn detect(&self) -> HostContext;
}

/// Detector that always reports the same context.
#[derive(Debug, Clone, Copy)]
pub struct FixedHost(pub HostContext);

impl HostDetector for FixedHost {
    fn detect(&self) -> HostContext {
        self.0
    }
}

/// Detects whether a Rust entry point started the process.
///
/// The Rust runtime names the thread running `main` "main"; threads of a
/// foreign host carry no Rust name. Detection therefore reflects the thread
/// it runs on, so call it from `main` or set [`HOST_ENV_VAR`].
#[derive(Debug, Clone, Copy, Default)]
pub struct EntryPointDetector;

impl HostDetector for EntryPointDetector {
    fn detect(&self) -> HostContext {
        if let Some(context) = std::env::var(HOST_ENV_VAR)
            .ok()
            .and_then(|v| v.parse::<HostContext>().ok())
        {
            return context;
        }

        detect_from_thread_name(std::thread::current().name())
    }
}

fn detect_from_thread_name(name: Option<&str>) -> HostContext {
    match name {
        Some("main") => HostContext::Hosted,
        _ => HostContext::Embedded,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_host() {
        assert_eq!(FixedHost(HostContext::Embedded).detect(), HostContext::Embedded);
        assert_eq!(FixedHost(HostContext::Hosted).detect(), HostContext::Hosted);
    }

    #[test]
    fn test_thread_name_detection() {
        assert_eq!(detect_from_thread_name(Some("main")), HostContext::Hosted);
        assert_eq!(detect_from_thread_name(Some("worker-1")), HostContext::Embedded);
        assert_eq!(detect_from_thread_name(None), HostContext::Embedded);
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!("Hosted".parse::<HostContext>(), Ok(HostContext::Hosted));
        assert_eq!(" embedded".parse::<HostContext>(), Ok(HostContext::Embedded));
        assert!("plugin".parse::<HostContext>().is_err());
        assert_eq!(HostContext::Embedded.to_string(), "embedded");
    }
}
