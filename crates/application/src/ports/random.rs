//! Random byte source port

use thiserror::Error;

/// Error raised when random bytes cannot be produced.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RandomSourceError {
    /// The underlying generator reported a failure.
    #[error("random source unavailable: {0}")]
    Unavailable(String),

    /// The source kept producing unusable bytes.
    #[error("random source exhausted after {0} draws")]
    Exhausted(usize),
}

/// Port for a cryptographically secure random byte source.
///
/// Implementations must be safe to share between threads.
pub trait RandomSource: Send + Sync {
    /// Fills `dest` entirely with random bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot produce bytes.
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), RandomSourceError>;
}
