//! Seeded random source for reproducible output

use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use stencil_application::ports::{RandomSource, RandomSourceError};

/// Deterministic random source.
///
/// Two sources created with the same seed produce the same byte stream.
/// Not suitable for secrets.
#[derive(Debug)]
pub struct SeededRandom {
    rng: Mutex<StdRng>,
}

impl SeededRandom {
    /// Creates a source seeded with `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl RandomSource for SeededRandom {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), RandomSourceError> {
        let mut rng = self
            .rng
            .lock()
            .map_err(|_| RandomSourceError::Unavailable("seeded generator poisoned".to_string()))?;
        rng.fill_bytes(dest);
        Ok(())
    }
}
