//! Mapping demangled Rust symbol names onto [`StackFrame`]s.

use regex::Regex;
use std::sync::OnceLock;

use super::StackFrame;

/// Trailing legacy-mangling hash such as `::h1a2b3c4d5e6f7a8b`.
fn hash_suffix() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"::h[0-9a-f]{16}$").expect("valid regex"))
}

/// Parse a demangled symbol name into a frame.
///
/// Handles the shapes rustc produces:
///
/// - `app::net::Client::connect` → declared in `app::net::Client`
/// - `app::net::connect` → declared in module `app::net`
/// - `<app::Foo as core::fmt::Debug>::fmt` → declared in `app::Foo`
/// - `app::Foo<T>::new::{{closure}}` → declared in `app::Foo`, function `new`
/// - `main` → top-level, no declaring type
///
/// Returns `None` for empty input.
pub fn parse_symbol(symbol: &str) -> Option<StackFrame> {
    let symbol = hash_suffix().replace(symbol.trim(), "");
    if symbol.is_empty() {
        return None;
    }

    let path = match symbol.strip_prefix('<') {
        Some(_) => qualified_path(&symbol)?,
        None => strip_generics(&symbol),
    };

    let segments: Vec<&str> = path
        .split("::")
        .filter(|s| !s.is_empty() && !s.starts_with('{'))
        .collect();

    match segments.split_last() {
        None => None,
        Some((function, [])) => Some(StackFrame::top_level(*function)),
        Some((function, declaring)) => Some(StackFrame::method(declaring.join("::"), *function)),
    }
}

/// Rewrite `<Self as Trait>::rest` (or `<Self>::rest`) as `Self::rest`.
fn qualified_path(symbol: &str) -> Option<String> {
    let close = matching_close(symbol)?;
    let inner = &symbol[1..close];
    let rest = symbol[close + 1..].trim_start_matches("::");

    let (self_ty, trait_ty) = match split_top_level(inner, " as ") {
        Some((s, t)) => (s, Some(t)),
        None => (inner, None),
    };

    let self_ty = strip_reference(self_ty);
    let owner = if starts_like_path(self_ty) {
        self_ty
    } else {
        // Slices, tuples, fn pointers: attribute to the trait instead.
        strip_reference(trait_ty?)
    };

    let owner = strip_generics(owner);
    if rest.is_empty() {
        Some(owner)
    } else {
        Some(format!("{}::{}", owner, strip_generics(rest)))
    }
}

/// Index of the `>` closing the `<` at position 0.
fn matching_close(s: &str) -> Option<usize> {
    let mut depth = 0usize;
    let mut prev = '\0';
    for (i, c) in s.char_indices() {
        match c {
            '<' => depth += 1,
            '>' if prev != '-' => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
        prev = c;
    }
    None
}

/// Split at the first `sep` that is not nested inside angle brackets.
fn split_top_level<'a>(s: &'a str, sep: &str) -> Option<(&'a str, &'a str)> {
    let mut depth = 0usize;
    let mut prev = '\0';
    for (i, c) in s.char_indices() {
        match c {
            '<' => depth += 1,
            '>' if prev != '-' => depth = depth.saturating_sub(1),
            _ if depth == 0 && s[i..].starts_with(sep) => {
                return Some((&s[..i], &s[i + sep.len()..]));
            }
            _ => {}
        }
        prev = c;
    }
    None
}

/// Remove every `<...>` group, leaving the bare path.
fn strip_generics(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut depth = 0usize;
    let mut prev = '\0';
    for c in s.chars() {
        match c {
            '<' => depth += 1,
            '>' if prev != '-' && depth > 0 => depth -= 1,
            _ if depth == 0 => out.push(c),
            _ => {}
        }
        prev = c;
    }
    out
}

fn strip_reference(s: &str) -> &str {
    let mut s = s.trim();
    for prefix in ["&mut ", "&", "*const ", "*mut ", "dyn ", "impl "] {
        if let Some(rest) = s.strip_prefix(prefix) {
            s = rest.trim_start();
        }
    }
    s
}

fn starts_like_path(s: &str) -> bool {
    s.chars()
        .next()
        .is_some_and(|c| c.is_alphabetic() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn declaring(symbol: &str) -> Option<String> {
        parse_symbol(symbol).and_then(|f| f.declaring_type)
    }

    #[test]
    fn test_inherent_method() {
        let frame = parse_symbol("app::net::Client::connect").unwrap();
        assert_eq!(frame.declaring_type.as_deref(), Some("app::net::Client"));
        assert_eq!(frame.module, "app");
        assert_eq!(frame.function, "connect");
    }

    #[test]
    fn test_free_function_declared_in_module() {
        let frame = parse_symbol("app::net::connect").unwrap();
        assert_eq!(frame.declaring_type.as_deref(), Some("app::net"));
        assert_eq!(frame.function, "connect");
    }

    #[test]
    fn test_declaring_type_is_whole_path_before_function() {
        // Capitalisation plays no part: everything before the last segment
        // is the declaring path.
        let frame = parse_symbol("app::jobs::run").unwrap();
        assert_eq!(frame.declaring_type.as_deref(), Some("app::jobs"));
        assert_eq!(frame.module, "app");

        assert_eq!(
            declaring("app::Outer::helpers::run").as_deref(),
            Some("app::Outer::helpers")
        );
        assert_eq!(declaring("app::lower_type::new").as_deref(), Some("app::lower_type"));
    }

    #[test]
    fn test_top_level_symbol() {
        let frame = parse_symbol("main").unwrap();
        assert!(frame.declaring_type.is_none());
        assert_eq!(frame.function, "main");
    }

    #[test]
    fn test_hash_suffix_is_removed() {
        let frame = parse_symbol("app::Worker::run::h0123456789abcdef").unwrap();
        assert_eq!(frame.declaring_type.as_deref(), Some("app::Worker"));
        assert_eq!(frame.function, "run");
    }

    #[test]
    fn test_closures_are_attributed_to_enclosing_function() {
        let frame = parse_symbol("app::Worker::run::{{closure}}::{{closure}}").unwrap();
        assert_eq!(frame.declaring_type.as_deref(), Some("app::Worker"));
        assert_eq!(frame.function, "run");

        let frame = parse_symbol("app::Worker::run::{closure#0}").unwrap();
        assert_eq!(frame.function, "run");
    }

    #[test]
    fn test_trait_impl_uses_self_type() {
        assert_eq!(
            declaring("<app::Config as core::fmt::Debug>::fmt").as_deref(),
            Some("app::Config")
        );
        assert_eq!(
            parse_symbol("<app::Config as core::fmt::Debug>::fmt")
                .unwrap()
                .module,
            "app"
        );
    }

    #[test]
    fn test_generics_are_stripped() {
        assert_eq!(
            declaring("app::cache::Lru<K,V>::insert").as_deref(),
            Some("app::cache::Lru")
        );
        assert_eq!(
            declaring("<app::cache::Lru<alloc::string::String, u32>>::get").as_deref(),
            Some("app::cache::Lru")
        );
    }

    #[test]
    fn test_fn_pointer_arrows_do_not_break_nesting() {
        assert_eq!(
            declaring(
                "<alloc::boxed::Box<dyn core::ops::function::Fn() -> u32> as core::ops::function::FnOnce<()>>::call_once"
            )
            .as_deref(),
            Some("alloc::boxed::Box")
        );
    }

    #[test]
    fn test_reference_self_type() {
        assert_eq!(
            declaring("<&mut app::Writer as std::io::Write>::write").as_deref(),
            Some("app::Writer")
        );
    }

    #[test]
    fn test_slice_self_type_falls_back_to_trait() {
        let frame = parse_symbol("<[T] as core::slice::sort::stable::BufGuard<T>>::with_capacity")
            .unwrap();
        assert_eq!(
            frame.declaring_type.as_deref(),
            Some("core::slice::sort::stable::BufGuard")
        );
        assert_eq!(frame.module, "core");
    }

    #[test]
    fn test_empty_symbol() {
        assert!(parse_symbol("").is_none());
        assert!(parse_symbol("   ").is_none());
    }

    #[test]
    fn test_std_frames_are_owned_by_std() {
        let frame = parse_symbol("std::rt::lang_start::{{closure}}").unwrap();
        assert_eq!(frame.module, "std");
        assert_eq!(frame.function, "lang_start");
    }
}
