//! INI serialization logic for converting `LogRelayConfig` → INI string.

use super::settings::LogRelayConfig;

/// Convert a `LogRelayConfig` to a commented INI string for saving.
pub(super) fn to_config_string(config: &LogRelayConfig) -> String {
    format!(
        r#"[logging]
; Logging provider:
;   noop    - discard everything
;   memory  - keep records in memory for inspection
;   console - one line per record on stdout/stderr
;   tracing - forward records to the tracing subscriber
provider = {}
; Minimum level emitted: trace, debug, info, warn, error, fatal
level = {}

[memory]
; Maximum records retained by the memory provider (0 = unbounded)
capacity = {}

[console]
; Stream used by the console provider: stdout or stderr
stream = {}

[resolver]
; Extra crates skipped when naming automatic loggers (comma-separated)
; std, core, alloc, backtrace and logrelay are always skipped
infrastructure_modules = {}
"#,
        config.logging.provider,
        config.logging.level.as_str(),
        config.memory.capacity,
        config.console.stream.as_str(),
        config.resolver.infrastructure_modules.join(", "),
    )
}
