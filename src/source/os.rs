//! Operating system entropy.

use rand::TryRngCore;
use rand::rngs::OsRng;
use tracing::warn;

use super::EntropySource;
use crate::error::RandomError;

/// Random bytes straight from the operating system CSPRNG.
///
/// Every call goes to the kernel (`getrandom` on Linux, `BCryptGenRandom`
/// on Windows, and so on). There is no user-space state to seed or reseed.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsEntropy;

impl OsEntropy {
    /// Creates a new OS entropy source.
    pub const fn new() -> Self {
        Self
    }
}

impl EntropySource for OsEntropy {
    fn fill(&mut self, dest: &mut [u8]) -> Result<(), RandomError> {
        if dest.is_empty() {
            return Ok(());
        }

        let len = dest.len();
        OsRng.try_fill_bytes(dest).map_err(|e| {
            warn!(len, error = %e, "os entropy source failed");
            RandomError::entropy(e)
        })
    }
}
