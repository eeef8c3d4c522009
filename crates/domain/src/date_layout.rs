//! Date layouts for the `now()` and `date(fmt)` generators.
//!
//! Well-known layouts are addressed by case-insensitive alias. Anything
//! else is treated as a literal `strftime` pattern.

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, SecondsFormat, TimeZone};
use std::fmt::{self, Write};

use crate::error::{DomainError, DomainResult};

/// A resolved date layout.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DateLayout {
    /// RFC 3339 with whole seconds, `Z` for UTC.
    #[default]
    Rfc3339,
    /// RFC 3339 with sub-second precision.
    Rfc3339Nano,
    /// A `strftime` pattern.
    Pattern(String),
}

/// Alias table: name, `strftime` pattern (or `None` for the RFC 3339 variants).
const ALIASES: &[(&str, Option<&str>)] = &[
    ("rfc3339", None),
    ("iso8601", None),
    ("rfc3339nano", None),
    ("rfc822", Some("%d %b %y %H:%M %Z")),
    ("unix", Some("%Y-%m-%d %H:%M:%S")),
    ("date", Some("%Y-%m-%d")),
    ("time", Some("%H:%M:%S")),
    ("datetime", Some("%Y-%m-%d %H:%M:%S")),
    ("kitchen", Some("%-I:%M%p")),
    ("ansic", Some("%a %b %e %H:%M:%S %Y")),
    ("unixdate", Some("%a %b %e %H:%M:%S %Z %Y")),
    ("rubydate", Some("%a %b %d %H:%M:%S %z %Y")),
    ("rfc850", Some("%A, %d-%b-%y %H:%M:%S %Z")),
    ("rfc1123", Some("%a, %d %b %Y %H:%M:%S %Z")),
    ("rfc1123z", Some("%a, %d %b %Y %H:%M:%S %z")),
];

impl DateLayout {
    /// Looks up `spec` in the alias table, falling back to a literal pattern.
    ///
    /// An empty `spec` selects RFC 3339.
    #[must_use]
    pub fn parse(spec: &str) -> Self {
        if spec.is_empty() {
            return Self::Rfc3339;
        }

        let lowered = spec.to_lowercase();
        match ALIASES.iter().find(|(alias, _)| *alias == lowered) {
            Some((_, Some(pattern))) => Self::Pattern((*pattern).to_string()),
            Some(("rfc3339nano", None)) => Self::Rfc3339Nano,
            Some((_, None)) => Self::Rfc3339,
            None => Self::Pattern(spec.to_string()),
        }
    }

    /// Returns the names of all supported aliases.
    #[must_use]
    pub fn aliases() -> Vec<&'static str> {
        ALIASES.iter().map(|(alias, _)| *alias).collect()
    }

    /// Formats `time` with this layout.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidDateLayout`] if a pattern contains an
    /// unknown or incomplete format specifier, or one that cannot be
    /// rendered for `time` (such as `%#z`).
    pub fn format<Tz>(&self, time: &DateTime<Tz>) -> DomainResult<String>
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        match self {
            Self::Rfc3339 => Ok(time.to_rfc3339_opts(SecondsFormat::Secs, true)),
            Self::Rfc3339Nano => Ok(time.to_rfc3339_opts(SecondsFormat::AutoSi, true)),
            Self::Pattern(pattern) => {
                let items: Vec<Item<'_>> = StrftimeItems::new(pattern).collect();
                if items.iter().any(|item| matches!(item, Item::Error)) {
                    return Err(DomainError::InvalidDateLayout(pattern.clone()));
                }
                let mut out = String::with_capacity(pattern.len() * 2);
                write!(out, "{}", time.format_with_items(items.into_iter()))
                    .map_err(|_| DomainError::InvalidDateLayout(pattern.clone()))?;
                Ok(out)
            }
        }
    }
}
