//! Core supplier - acquire a pooled buffer, refill it, hand it out.
//!
//! # Example
//!
//! ```
//! use randpool::RandomSupplier;
//!
//! let mut supplier = RandomSupplier::new();
//!
//! let bytes = supplier.random(16)?;
//! assert_eq!(bytes.len(), 16);
//! # Ok::<(), randpool::RandomError>(())
//! ```

use std::fmt;
use std::ops::Deref;

use bytes::Bytes;

use crate::buffer::{BufferPool, PooledBuffer};
use crate::config::PoolConfig;
use crate::error::RandomError;
use crate::source::{EntropySource, OsEntropy};

/// Supplies cryptographically secure random bytes with minimal allocation.
///
/// `RandomSupplier` owns a [`BufferPool`] and an [`EntropySource`]. Each
/// call to [`random`](Self::random) acquires a buffer of the requested
/// length and overwrites it completely before handing it out, so recycled
/// memory never exposes content from an earlier request.
///
/// # Aliasing
///
/// The returned [`RandomBytes`] borrows the supplier mutably. A second
/// request cannot be made while the first result is alive, which is what
/// keeps a cached buffer from being refilled under a reader. Copy the bytes
/// out with [`RandomBytes::to_vec`] or [`RandomBytes::freeze`] when both
/// results are needed at once.
///
/// # Threading
///
/// There is no internal locking. Give each thread its own supplier (see the
/// `thread-local` feature) rather than sharing one behind a lock.
///
/// # Example
///
/// ```
/// use randpool::RandomSupplier;
///
/// let mut supplier = RandomSupplier::new();
///
/// let first = supplier.random(8)?.to_vec();
/// let second = supplier.random(8)?;
/// assert_ne!(&first[..], &second[..]);
/// # Ok::<(), randpool::RandomError>(())
/// ```
#[derive(Debug)]
pub struct RandomSupplier<S = OsEntropy> {
    pool: BufferPool,
    source: S,
}

impl RandomSupplier<OsEntropy> {
    /// Creates a supplier backed by the operating system CSPRNG.
    pub fn new() -> Self {
        Self::with_source(OsEntropy)
    }
}

impl<S: EntropySource> RandomSupplier<S> {
    /// Creates a supplier with the default pool configuration.
    pub fn with_source(source: S) -> Self {
        Self::with_config(PoolConfig::default(), source)
    }

    /// Creates a supplier with a custom pool configuration.
    pub fn with_config(config: PoolConfig, source: S) -> Self {
        Self {
            pool: BufferPool::new(config),
            source,
        }
    }

    /// Returns `len` fresh random bytes.
    ///
    /// The bytes are valid until the next request on this supplier.
    ///
    /// # Errors
    ///
    /// Propagates [`RandomError::EntropyUnavailable`] from the source
    /// unchanged. No partially filled buffer is ever returned.
    pub fn random(&mut self, len: usize) -> Result<RandomBytes<'_>, RandomError> {
        let mut buf = self.pool.acquire(len);
        self.source.fill(&mut buf)?;
        Ok(RandomBytes { buf })
    }

    /// Overwrites `dest` with random bytes from this supplier's source.
    pub fn fill(&mut self, dest: &mut [u8]) -> Result<(), RandomError> {
        self.source.fill(dest)
    }

    /// Returns the buffer pool.
    pub fn pool(&self) -> &BufferPool {
        &self.pool
    }

    /// Returns the entropy source.
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }
}

impl<S: EntropySource + Default> Default for RandomSupplier<S> {
    fn default() -> Self {
        Self::with_source(S::default())
    }
}

/// Freshly randomized bytes returned by [`RandomSupplier::random`].
pub struct RandomBytes<'a> {
    buf: PooledBuffer<'a>,
}

impl RandomBytes<'_> {
    /// Returns `true` if the bytes live in a pooled buffer.
    pub fn is_cached(&self) -> bool {
        self.buf.is_cached()
    }

    /// Converts into immutable shared bytes.
    ///
    /// Uncached buffers are handed over without copying.
    pub fn freeze(self) -> Bytes {
        match self.buf {
            PooledBuffer::Cached(buf) => Bytes::copy_from_slice(buf),
            PooledBuffer::Fresh(buf) => Bytes::from(buf),
        }
    }

    /// Converts into an owned boxed slice.
    pub fn into_boxed(self) -> Box<[u8]> {
        self.buf.into_boxed()
    }
}

impl Deref for RandomBytes<'_> {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.buf
    }
}

impl AsRef<[u8]> for RandomBytes<'_> {
    fn as_ref(&self) -> &[u8] {
        &self.buf
    }
}

// Content is secret material, keep it out of logs.
impl fmt::Debug for RandomBytes<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RandomBytes")
            .field("len", &self.buf.len())
            .field("cached", &self.buf.is_cached())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::RngEntropy;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn seeded() -> RandomSupplier<RngEntropy<StdRng>> {
        RandomSupplier::with_source(RngEntropy::new(StdRng::seed_from_u64(42)))
    }

    struct Failing;

    impl EntropySource for Failing {
        fn fill(&mut self, _dest: &mut [u8]) -> Result<(), RandomError> {
            Err(RandomError::entropy("exhausted"))
        }
    }

    #[test]
    fn test_random_length() {
        let mut supplier = seeded();
        for len in [0, 1, 21, 255, 256, 4096] {
            assert_eq!(supplier.random(len).unwrap().len(), len);
        }
    }

    #[test]
    fn test_random_refills_cached_buffer() {
        let mut supplier = seeded();

        let (ptr, content) = {
            let first = supplier.random(16).unwrap();
            (first.as_ptr(), first.to_vec())
        };

        let second = supplier.random(16).unwrap();
        assert!(second.is_cached());
        assert_eq!(second.as_ptr(), ptr);
        assert_ne!(&second[..], &content[..]);
    }

    #[test]
    fn test_random_matches_source_stream() {
        let mut supplier = RandomSupplier::with_source(RngEntropy::new(StdRng::seed_from_u64(1)));
        let expected = {
            let mut reference = RngEntropy::new(StdRng::seed_from_u64(1));
            let mut buf = [0u8; 8];
            reference.fill(&mut buf).unwrap();
            buf
        };

        assert_eq!(&supplier.random(8).unwrap()[..], &expected);
    }

    #[test]
    fn test_error_propagates() {
        let mut supplier = RandomSupplier::with_source(Failing);
        let err = supplier.random(16).unwrap_err();
        assert!(matches!(err, RandomError::EntropyUnavailable { .. }));

        let mut buf = [0u8; 4];
        assert!(supplier.fill(&mut buf).is_err());
    }

    #[test]
    fn test_freeze() {
        let mut supplier = seeded();

        let cached = supplier.random(4).unwrap();
        let copy = cached.to_vec();
        assert_eq!(cached.freeze(), Bytes::from(copy));

        let fresh = supplier.random(512).unwrap();
        let ptr = fresh.as_ptr();
        assert_eq!(fresh.freeze().as_ptr(), ptr);
    }

    #[test]
    fn test_debug_hides_content() {
        let mut supplier = seeded();
        let bytes = supplier.random(4).unwrap();
        let text = format!("{:?}", bytes);
        assert!(text.contains("len: 4"));
        assert!(text.contains("cached: true"));
    }
}
