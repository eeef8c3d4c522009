//! Domain error types

use thiserror::Error;

/// Domain-level errors that can occur during parsing or validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A byte size string could not be parsed.
    #[error("invalid byte size: {0}")]
    InvalidByteSize(String),

    /// A duration string could not be parsed.
    #[error("invalid duration: {0}")]
    InvalidDuration(String),

    /// A range string could not be parsed.
    #[error("invalid range: {0}")]
    InvalidRange(String),

    /// One or more HTTP methods are not supported.
    #[error("invalid HTTP methods: {}", .0.join(", "))]
    UnsupportedMethods(Vec<String>),

    /// Input is not valid base64 or does not decode to UTF-8.
    #[error("invalid base64: {0}")]
    InvalidBase64(String),

    /// A value could not be copied through its JSON representation.
    #[error("deep copy failed: {0}")]
    DeepCopy(String),

    /// A date layout contains an unsupported format specifier.
    #[error("invalid date layout: {0}")]
    InvalidDateLayout(String),
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
