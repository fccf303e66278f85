//! Secure random sources.
//!
//! A source overwrites an existing byte region with unpredictable data. It
//! never allocates and never reads what was there before, so handing it a
//! recycled buffer cannot leak earlier content.
//!
//! - [`EntropySource`] - The fill contract
//! - [`OsEntropy`] - Operating system CSPRNG
//! - [`RngEntropy`] - Adapter for any cryptographically secure `rand` generator

mod os;
mod rng;

pub use os::OsEntropy;
pub use rng::RngEntropy;

use crate::error::RandomError;

/// A cryptographically secure source of random bytes.
///
/// `fill` is all-or-nothing: on `Ok` every byte of `dest` has been
/// overwritten, on `Err` the content of `dest` is unspecified and must not
/// be used.
pub trait EntropySource {
    /// Overwrites every byte of `dest` with random data.
    ///
    /// # Errors
    ///
    /// Returns [`RandomError::EntropyUnavailable`] if the source cannot
    /// supply random data.
    fn fill(&mut self, dest: &mut [u8]) -> Result<(), RandomError>;
}

impl<S: EntropySource + ?Sized> EntropySource for &mut S {
    #[inline]
    fn fill(&mut self, dest: &mut [u8]) -> Result<(), RandomError> {
        (**self).fill(dest)
    }
}

impl<S: EntropySource + ?Sized> EntropySource for Box<S> {
    #[inline]
    fn fill(&mut self, dest: &mut [u8]) -> Result<(), RandomError> {
        (**self).fill(dest)
    }
}
