//! Placeholder scanners
//!
//! Two independent left-to-right scanners locate the token shapes the
//! resolver rewrites:
//!
//! - `{{name(args)}}` function calls
//! - `${NAME}` and `{NAME}` environment references

use std::sync::LazyLock;

use regex::Regex;
use stencil_domain::{EnvSyntax, Placeholder};

/// Matches `{{function()}}` or `{{function(args)}}`.
static FUNCTION_CALL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{([A-Za-z_][A-Za-z0-9_]*)\(([^)]*)\)\}\}").expect("valid regex")
});

/// Matches `${NAME}` or `{NAME}`.
static ENV_REFERENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$?\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("valid regex"));

/// Finds every non-overlapping `{{name(args)}}` call in `input`.
///
/// Argument text is trimmed. The name keeps its original case.
///
/// # Examples
///
/// ```
/// use stencil_application::resolver::parser::scan_function_calls;
///
/// let calls = scan_function_calls("id={{uuid()}} key={{randomHex( 8 )}}");
/// assert_eq!(calls.len(), 2);
/// assert_eq!(calls[1].name(), "randomHex");
/// ```
#[must_use]
pub fn scan_function_calls(input: &str) -> Vec<Placeholder> {
    FUNCTION_CALL
        .captures_iter(input)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let name = caps.get(1)?.as_str();
            let args = caps.get(2).map_or("", |m| m.as_str()).trim();
            Some(Placeholder::function_call(name, args, whole.range()))
        })
        .collect()
}

/// Finds every non-overlapping `${NAME}` or `{NAME}` reference in `input`.
///
/// A brace reference wrapped in a second pair of braces (`{{NAME}}`) is not
/// reported: it is neither a function call nor an environment reference and
/// stays literal.
///
/// # Examples
///
/// ```
/// use stencil_application::resolver::parser::scan_env_references;
///
/// let refs = scan_env_references("${HOME}/{USER} {{NOT_ENV}}");
/// let names: Vec<_> = refs.iter().map(|r| r.name()).collect();
/// assert_eq!(names, vec!["HOME", "USER"]);
/// ```
#[must_use]
pub fn scan_env_references(input: &str) -> Vec<Placeholder> {
    ENV_REFERENCE
        .captures_iter(input)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let name = caps.get(1)?.as_str();
            let syntax = if whole.as_str().starts_with('$') {
                EnvSyntax::Dollar
            } else {
                EnvSyntax::Brace
            };

            if syntax == EnvSyntax::Brace
                && input[..whole.start()].ends_with('{')
                && input[whole.end()..].starts_with('}')
            {
                return None;
            }

            Some(Placeholder::env_reference(name, syntax, whole.range()))
        })
        .collect()
}

/// Returns every placeholder of either shape, ordered by position.
///
/// Environment references nested inside a function call's argument text are
/// reported alongside the call.
#[must_use]
pub fn scan_placeholders(input: &str) -> Vec<Placeholder> {
    let mut placeholders = scan_function_calls(input);
    placeholders.extend(scan_env_references(input));
    placeholders.sort_by_key(|placeholder| placeholder.span.start);
    placeholders
}

/// Returns true if `input` contains at least one placeholder of either shape.
#[must_use]
pub fn has_placeholders(input: &str) -> bool {
    FUNCTION_CALL.is_match(input) || !scan_env_references(input).is_empty()
}

/// Validates a function or variable name: `[A-Za-z_][A-Za-z0-9_]*`.
#[must_use]
pub fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|first| first.is_ascii_alphabetic() || first == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
