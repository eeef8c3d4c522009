//! Operating system random source

use rand::TryRngCore;
use rand::rngs::OsRng;
use stencil_application::ports::{RandomSource, RandomSourceError};

/// Random source backed by the operating system's CSPRNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsRandom;

impl OsRandom {
    /// Creates a new OS random source.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl RandomSource for OsRandom {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), RandomSourceError> {
        let mut rng = OsRng;
        rng.try_fill_bytes(dest)
            .map_err(|e| RandomSourceError::Unavailable(e.to_string()))
    }
}
