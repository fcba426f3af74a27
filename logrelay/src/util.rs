//! Small text helpers.

use regex::Regex;
use std::sync::OnceLock;

/// Uppercase run followed by a capitalized word: `HTTPServer` → `HTTP|Server`.
fn acronym_boundary() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(\P{Ll})(\P{Ll}\p{Ll})").expect("valid regex"))
}

/// Lowercase letter followed by anything else: `loggingProvider` → `logging|Provider`.
fn word_boundary() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(\p{Ll})(\P{Ll})").expect("valid regex"))
}

/// Insert spaces at camel-case boundaries.
///
/// ```
/// use logrelay::util::split_camel_case;
///
/// assert_eq!(split_camel_case("LoggingProviderLocked"), "Logging Provider Locked");
/// assert_eq!(split_camel_case("HTTPServer"), "HTTP Server");
/// ```
pub fn split_camel_case(s: &str) -> String {
    let inner = acronym_boundary().replace_all(s, "$1 $2");
    word_boundary().replace_all(&inner, "$1 $2").into_owned()
}
