//! Length-keyed buffer pool for efficient memory reuse.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::ops::{Deref, DerefMut};

use tracing::debug;

use crate::config::PoolConfig;

/// A buffer handed out by [`BufferPool::acquire`].
///
/// Cached buffers are borrowed from the pool and hold whatever the previous
/// request left in them. They must be overwritten before they are read.
#[derive(Debug)]
pub enum PooledBuffer<'a> {
    /// Buffer owned by the pool, reused for every request of this length.
    Cached(&'a mut [u8]),
    /// Fresh allocation for a length at or above the cache threshold.
    Fresh(Box<[u8]>),
}

impl PooledBuffer<'_> {
    /// Returns `true` if the buffer lives in the pool.
    pub fn is_cached(&self) -> bool {
        matches!(self, PooledBuffer::Cached(_))
    }

    /// Converts the buffer into an owned allocation.
    ///
    /// Fresh buffers are moved out without copying. Cached buffers are copied
    /// and stay in the pool.
    pub fn into_boxed(self) -> Box<[u8]> {
        match self {
            PooledBuffer::Cached(buf) => Box::from(&*buf),
            PooledBuffer::Fresh(buf) => buf,
        }
    }
}

impl Deref for PooledBuffer<'_> {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        match self {
            PooledBuffer::Cached(buf) => &buf[..],
            PooledBuffer::Fresh(buf) => &buf[..],
        }
    }
}

impl DerefMut for PooledBuffer<'_> {
    fn deref_mut(&mut self) -> &mut [u8] {
        match self {
            PooledBuffer::Cached(buf) => &mut buf[..],
            PooledBuffer::Fresh(buf) => &mut buf[..],
        }
    }
}

/// A cache of one reusable buffer per requested length.
///
/// Entries are created lazily and never evicted, so memory held by the pool
/// is bounded by the distinct lengths below the threshold that were ever
/// requested. The pool has no interior locking: every operation takes
/// `&mut self`, and a returned [`PooledBuffer`] keeps the pool borrowed.
#[derive(Debug, Default)]
pub struct BufferPool {
    config: PoolConfig,
    cache: HashMap<usize, Box<[u8]>>,
}

impl BufferPool {
    /// Creates an empty pool.
    pub fn new(config: PoolConfig) -> Self {
        Self {
            config,
            cache: HashMap::new(),
        }
    }

    /// Returns a buffer of exactly `len` bytes, ready to be filled.
    ///
    /// Lengths below the threshold return the same memory on every call.
    /// Anything larger is allocated on the spot and not retained.
    pub fn acquire(&mut self, len: usize) -> PooledBuffer<'_> {
        if !self.config.is_cached(len) {
            debug!(len, "allocating uncached buffer");
            return PooledBuffer::Fresh(alloc(len));
        }

        let buf = match self.cache.entry(len) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                debug!(len, "caching new buffer");
                entry.insert(alloc(len))
            }
        };
        PooledBuffer::Cached(buf)
    }

    /// Returns `true` if a buffer for `len` is already cached.
    pub fn contains(&self, len: usize) -> bool {
        self.cache.contains_key(&len)
    }

    /// Returns the number of cached buffers.
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    /// Returns `true` if nothing has been cached yet.
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Returns the cached lengths in ascending order.
    pub fn cached_lengths(&self) -> Vec<usize> {
        let mut lengths: Vec<usize> = self.cache.keys().copied().collect();
        lengths.sort_unstable();
        lengths
    }

    /// Returns the exclusive upper bound on cached lengths.
    pub fn threshold(&self) -> usize {
        self.config.cache_threshold()
    }

    /// Returns the pool configuration.
    pub fn config(&self) -> &PoolConfig {
        &self.config
    }
}

fn alloc(len: usize) -> Box<[u8]> {
    vec![0u8; len].into_boxed_slice()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_acquire_exact_length() {
        let mut pool = BufferPool::default();
        for len in [0, 1, 16, 255, 256, 1024] {
            assert_eq!(pool.acquire(len).len(), len);
        }
    }

    #[test]
    fn test_cached_reuse_same_memory() {
        let mut pool = BufferPool::default();

        let first = pool.acquire(16).as_ptr();
        let second = pool.acquire(16).as_ptr();

        assert_eq!(first, second);
        assert_eq!(pool.len(), 1);
        assert!(pool.contains(16));
    }

    #[test]
    fn test_cached_buffer_keeps_stale_content() {
        let mut pool = BufferPool::default();
        pool.acquire(4).copy_from_slice(&[1, 2, 3, 4]);

        // Refilling is the caller's job
        assert_eq!(&*pool.acquire(4), &[1, 2, 3, 4]);
    }

    #[test]
    fn test_threshold_not_cached() {
        let mut pool = BufferPool::default();

        let buf = pool.acquire(256);
        assert!(!buf.is_cached());
        drop(buf);

        assert!(pool.is_empty());
        assert!(!pool.contains(256));
    }

    #[test]
    fn test_custom_threshold() {
        let mut pool = BufferPool::new(PoolConfig::new(8).unwrap());
        assert_eq!(pool.threshold(), 8);

        assert!(pool.acquire(7).is_cached());
        assert!(!pool.acquire(8).is_cached());
        assert_eq!(pool.cached_lengths(), vec![7]);
    }

    #[test]
    fn test_one_entry_per_length() {
        let mut pool = BufferPool::default();
        for len in [3, 1, 3, 2, 1, 3] {
            pool.acquire(len);
        }
        assert_eq!(pool.cached_lengths(), vec![1, 2, 3]);
    }

    #[test]
    fn test_into_boxed() {
        let mut pool = BufferPool::default();
        pool.acquire(2).copy_from_slice(&[9, 9]);
        let owned = pool.acquire(2).into_boxed();
        assert_eq!(&*owned, &[9, 9]);
        assert!(pool.contains(2));

        let fresh = pool.acquire(300);
        let ptr = fresh.as_ptr();
        assert_eq!(fresh.into_boxed().as_ptr(), ptr);
    }
}
