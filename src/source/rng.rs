//! Adapter from `rand` generators to [`EntropySource`].

use rand::TryCryptoRng;

use super::EntropySource;
use crate::error::RandomError;

/// Wraps a cryptographically secure `rand` generator as an entropy source.
///
/// Only generators marked [`TryCryptoRng`] are accepted. A seeded
/// `StdRng` makes output reproducible, which is what tests want and what
/// production identifiers must never use.
#[derive(Debug, Clone)]
pub struct RngEntropy<R> {
    rng: R,
}

impl<R> RngEntropy<R> {
    /// Creates a source backed by `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Returns the wrapped generator.
    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl<R> EntropySource for RngEntropy<R>
where
    R: TryCryptoRng,
    R::Error: std::error::Error + Send + Sync + 'static,
{
    #[inline]
    fn fill(&mut self, dest: &mut [u8]) -> Result<(), RandomError> {
        self.rng.try_fill_bytes(dest).map_err(RandomError::entropy)
    }
}
