//! Per-thread supplier and free-function helpers.
//!
//! Each thread lazily builds its own [`RandomSupplier`] backed by the OS
//! CSPRNG. Pools are never shared across threads, so no locking is needed.
//! Borrowed bytes cannot leave the closure passed to [`with_random`], which
//! keeps the pooled buffer from being refilled while it is being read.

use std::cell::RefCell;

use tracing::debug;

use crate::config::IdConfig;
use crate::error::RandomError;
use crate::id::{IdGenerator, generate_id};
use crate::source::{EntropySource, OsEntropy};
use crate::supplier::RandomSupplier;

// Thread-local supplier
thread_local! {
    static SUPPLIER: RefCell<RandomSupplier> = RefCell::new(RandomSupplier::new());
}

fn with_supplier<T, F>(f: F) -> Result<T, RandomError>
where
    F: FnOnce(&mut RandomSupplier) -> Result<T, RandomError>,
{
    SUPPLIER.with(|cell| match cell.try_borrow_mut() {
        Ok(mut supplier) => f(&mut supplier),
        Err(_) => {
            // Re-entered from inside `with_random`
            debug!("thread-local supplier busy, using a temporary one");
            f(&mut RandomSupplier::new())
        }
    })
}

/// Overwrites `dest` with bytes from the OS CSPRNG.
///
/// # Example
///
/// ```
/// let mut buf = [0u8; 8];
/// randpool::fill(&mut buf)?;
/// # Ok::<(), randpool::RandomError>(())
/// ```
pub fn fill(dest: &mut [u8]) -> Result<(), RandomError> {
    OsEntropy.fill(dest)
}

/// Runs `f` on `len` fresh random bytes from this thread's pool.
///
/// # Example
///
/// ```
/// let sum = randpool::with_random(4, |bytes| bytes.iter().map(|&b| b as u32).sum::<u32>())?;
/// assert!(sum <= 4 * 255);
/// # Ok::<(), randpool::RandomError>(())
/// ```
pub fn with_random<T, F>(len: usize, f: F) -> Result<T, RandomError>
where
    F: FnOnce(&[u8]) -> T,
{
    with_supplier(|supplier| {
        let bytes = supplier.random(len)?;
        Ok(f(&bytes))
    })
}

/// Returns `len` fresh random bytes as an owned vector.
pub fn random_vec(len: usize) -> Result<Vec<u8>, RandomError> {
    with_random(len, <[u8]>::to_vec)
}

/// Generates a 21-symbol URL-safe identifier.
///
/// # Example
///
/// ```
/// let id = randpool::nanoid()?;
/// assert_eq!(id.len(), 21);
/// # Ok::<(), randpool::RandomError>(())
/// ```
pub fn nanoid() -> Result<String, RandomError> {
    nanoid_with(crate::config::DEFAULT_ID_SIZE)
}

/// Generates a URL-safe identifier of `size` symbols.
pub fn nanoid_with(size: usize) -> Result<String, RandomError> {
    with_supplier(|supplier| generate_id(supplier, size))
}

/// Generates an identifier for a custom size and alphabet.
///
/// # Example
///
/// ```
/// use randpool::{Alphabet, IdConfig};
///
/// let config = IdConfig::new(12)?.with_alphabet(Alphabet::new("0123456789")?);
/// let id = randpool::custom_id(&config)?;
/// assert!(id.chars().all(|c| c.is_ascii_digit()));
/// # Ok::<(), randpool::RandomError>(())
/// ```
pub fn custom_id(config: &IdConfig) -> Result<String, RandomError> {
    let generator = IdGenerator::new(config.clone())?;
    with_supplier(|supplier| generator.generate(supplier))
}
