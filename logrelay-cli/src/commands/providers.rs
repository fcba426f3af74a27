//! `providers` command: list available backends.

use logrelay::log::{LogLevel, ProviderConfig, ProviderKind};
use logrelay::util::split_camel_case;

/// Print every provider kind with its display name.
pub fn run() {
    println!("Available providers:");
    for kind in ProviderKind::ALL {
        println!("  {}", describe(kind));
    }
}

/// One listing line: config spelling, display name and default threshold.
fn describe(kind: ProviderKind) -> String {
    let config = match kind {
        ProviderKind::NoOp => ProviderConfig::NoOp,
        ProviderKind::Memory => ProviderConfig::memory(LogLevel::default()),
        ProviderKind::Console => ProviderConfig::console(LogLevel::default()),
        ProviderKind::Tracing => ProviderConfig::Tracing {
            minimum: LogLevel::default(),
        },
    };
    let provider = config.create();
    format!(
        "{:<8} {:<10} (minimum: {})",
        kind.as_str(),
        split_camel_case(provider.kind()),
        provider.minimum_level()
    )
}
