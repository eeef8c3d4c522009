//! Application error types

use thiserror::Error;
use stencil_domain::DomainError;

/// Application-level errors.
///
/// These are raised while building a resolver or running a use case; the
/// resolver's substitution entry points themselves never fail.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// A domain validation error occurred.
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),

    /// The resolver configuration is inconsistent.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A function name is not a known builtin.
    #[error("unknown function: {0}")]
    UnknownFunction(String),

    /// A file system operation failed.
    #[error("file system error: {0}")]
    FileSystem(#[from] crate::ports::FileSystemError),
}

/// Result type alias for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
