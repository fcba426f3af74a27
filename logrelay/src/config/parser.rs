//! INI parsing logic for converting `Ini` → `LogRelayConfig`.
//!
//! This is the single place where INI key names are mapped to struct fields.

use ini::Ini;
use std::str::FromStr;

use super::file::ConfigFileError;
use super::settings::LogRelayConfig;
use crate::log::{ConsoleStream, LogLevel, ProviderKind};

/// Parse an `Ini` object into a `LogRelayConfig`.
///
/// Starts from `LogRelayConfig::default()` and overlays any values found.
pub(super) fn parse_ini(ini: &Ini) -> Result<LogRelayConfig, ConfigFileError> {
    let mut config = LogRelayConfig::default();

    // [logging] section
    if let Some(section) = ini.section(Some("logging")) {
        if let Some(v) = section.get("provider") {
            config.logging.provider = parse_value::<ProviderKind>("logging", "provider", v)?;
        }
        if let Some(v) = section.get("level") {
            config.logging.level = parse_value::<LogLevel>("logging", "level", v)?;
        }
    }

    // [memory] section
    if let Some(section) = ini.section(Some("memory")) {
        if let Some(v) = section.get("capacity") {
            config.memory.capacity = parse_value::<usize>("memory", "capacity", v)?;
        }
    }

    // [console] section
    if let Some(section) = ini.section(Some("console")) {
        if let Some(v) = section.get("stream") {
            config.console.stream = parse_value::<ConsoleStream>("console", "stream", v)?;
        }
    }

    // [resolver] section
    if let Some(section) = ini.section(Some("resolver")) {
        if let Some(v) = section.get("infrastructure_modules") {
            config.resolver.infrastructure_modules = parse_module_list("resolver", v)?;
        }
    }

    Ok(config)
}

fn parse_value<T>(section: &str, key: &str, value: &str) -> Result<T, ConfigFileError>
where
    T: FromStr,
    T::Err: ToString,
{
    value
        .trim()
        .parse::<T>()
        .map_err(|e| ConfigFileError::InvalidValue {
            section: section.to_string(),
            key: key.to_string(),
            value: value.to_string(),
            reason: e.to_string(),
        })
}

/// Comma-separated crate names; empty entries are ignored.
fn parse_module_list(section: &str, value: &str) -> Result<Vec<String>, ConfigFileError> {
    let mut modules = Vec::new();
    for entry in value.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        if !entry.chars().all(|c| c.is_alphanumeric() || c == '_' || c == '-') {
            return Err(ConfigFileError::InvalidValue {
                section: section.to_string(),
                key: "infrastructure_modules".to_string(),
                value: value.to_string(),
                reason: format!("'{}' is not a crate name", entry),
            });
        }
        // Cargo package names use '-', symbol paths use '_'.
        modules.push(entry.replace('-', "_"));
    }
    Ok(modules)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Result<LogRelayConfig, ConfigFileError> {
        parse_ini(&Ini::load_from_str(text).unwrap())
    }

    #[test]
    fn test_empty_file_gives_defaults() {
        assert_eq!(parse("").unwrap(), LogRelayConfig::default());
    }

    #[test]
    fn test_full_file() {
        let config = parse(
            "[logging]\nprovider = memory\nlevel = WARN\n\
             [memory]\ncapacity = 25\n\
             [console]\nstream = stderr\n\
             [resolver]\ninfrastructure_modules = tokio, futures-util,\n",
        )
        .unwrap();

        assert_eq!(config.logging.provider, ProviderKind::Memory);
        assert_eq!(config.logging.level, LogLevel::Warn);
        assert_eq!(config.memory.capacity, 25);
        assert_eq!(config.console.stream, ConsoleStream::Stderr);
        assert_eq!(
            config.resolver.infrastructure_modules,
            vec!["tokio".to_string(), "futures_util".to_string()]
        );
    }

    #[test]
    fn test_invalid_level_reports_location() {
        let err = parse("[logging]\nlevel = loud\n").unwrap_err();
        match err {
            ConfigFileError::InvalidValue {
                section, key, value, ..
            } => {
                assert_eq!(section, "logging");
                assert_eq!(key, "level");
                assert_eq!(value, "loud");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_invalid_capacity() {
        assert!(matches!(
            parse("[memory]\ncapacity = lots\n"),
            Err(ConfigFileError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_invalid_module_name() {
        let err = parse("[resolver]\ninfrastructure_modules = tokio, a::b\n").unwrap_err();
        assert!(err.to_string().contains("'a::b' is not a crate name"));
    }
}
