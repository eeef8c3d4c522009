//! HTTP method enumeration and validation

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{DomainError, DomainResult};

/// Standard HTTP methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    /// HTTP GET method
    #[default]
    Get,
    /// HTTP HEAD method
    Head,
    /// HTTP POST method
    Post,
    /// HTTP PUT method
    Put,
    /// HTTP PATCH method
    Patch,
    /// HTTP DELETE method
    Delete,
    /// HTTP CONNECT method
    Connect,
    /// HTTP OPTIONS method
    Options,
    /// HTTP TRACE method
    Trace,
}

impl HttpMethod {
    /// Returns all standard HTTP methods.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Get,
            Self::Head,
            Self::Post,
            Self::Put,
            Self::Patch,
            Self::Delete,
            Self::Connect,
            Self::Options,
            Self::Trace,
        ]
    }

    /// Returns the method as a static string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Head => "HEAD",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
            Self::Connect => "CONNECT",
            Self::Options => "OPTIONS",
            Self::Trace => "TRACE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for HttpMethod {
    type Err = DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        let upper = s.to_uppercase();
        Self::all()
            .iter()
            .copied()
            .find(|method| method.as_str() == upper)
            .ok_or_else(|| DomainError::UnsupportedMethods(vec![s.to_string()]))
    }
}

/// Returns the inputs that are not standard HTTP methods, in their original spelling.
///
/// The comparison is case-insensitive. An empty result means every input is valid.
#[must_use]
pub fn find_invalid_methods<S: AsRef<str>>(methods: &[S]) -> Vec<String> {
    methods
        .iter()
        .map(AsRef::<str>::as_ref)
        .filter(|method| method.parse::<HttpMethod>().is_err())
        .map(str::to_string)
        .collect()
}

/// Parses and upper-cases every input, failing if any is not a standard method.
///
/// # Errors
///
/// Returns [`DomainError::UnsupportedMethods`] listing every invalid input.
pub fn normalize_http_methods<S: AsRef<str>>(methods: &[S]) -> DomainResult<Vec<HttpMethod>> {
    let invalid = find_invalid_methods(methods);
    if !invalid.is_empty() {
        return Err(DomainError::UnsupportedMethods(invalid));
    }

    methods
        .iter()
        .map(|method| method.as_ref().parse())
        .collect()
}
