//! Parsing of environment variable values.

/// Parses a boolean using the conventional flag spellings.
///
/// Accepts `1`, `t`, `T`, `TRUE`, `true`, `True` and `0`, `f`, `F`, `FALSE`,
/// `false`, `False`. Anything else is `None`.
#[must_use]
pub fn parse_bool(value: &str) -> Option<bool> {
    match value {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

/// Parses a signed decimal integer (optional leading `+` or `-`).
#[must_use]
pub fn parse_int(value: &str) -> Option<i64> {
    value.parse().ok()
}
