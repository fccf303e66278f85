//! randpool
//!
//! Cheap, repeated cryptographically secure random bytes for Rust.
//!
//! `randpool` is built for the common case of asking for the same small
//! number of random bytes over and over, as identifier generators do. It
//! keeps one buffer per requested length and refills it in place from a
//! secure source on every request:
//!
//! - small requests allocate once and are then allocation-free
//! - large requests are allocated per call and never retained
//! - every request is fully overwritten before it is observed
//!
//! On top of that it renders bytes as short URL-safe identifiers, with an
//! unbiased generator for arbitrary alphabets.
//!
//! The crate intentionally:
//! - does NOT lock (one supplier per thread)
//! - does NOT retry a failed entropy source
//! - does NOT fall back to a non-secure generator
//!
//! # Supplier
//!
//! ```
//! use randpool::{RandomSupplier, RandomError};
//!
//! fn main() -> Result<(), RandomError> {
//!     let mut supplier = RandomSupplier::new();
//!
//!     for _ in 0..3 {
//!         let bytes = supplier.random(16)?;
//!         println!("{:02x?}", &bytes[..]);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Thread-local helpers (feature = "thread-local")
//!
//! ```
//! let id = randpool::nanoid()?;
//! assert_eq!(id.len(), 21);
//! # Ok::<(), randpool::RandomError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod alphabet;
mod buffer;
mod config;
mod error;
mod id;
mod source;
mod supplier;

mod util; // internal mask/step math

#[cfg(feature = "thread-local")]
mod global;

//
// Public surface
//

pub use alphabet::{Alphabet, MAX_ALPHABET_LEN, URL_ALPHABET};
pub use buffer::{BufferPool, PooledBuffer};
pub use config::{DEFAULT_CACHE_THRESHOLD, DEFAULT_ID_SIZE, IdConfig, PoolConfig};
pub use error::RandomError;
pub use id::{IdGenerator, generate_id};
pub use source::{EntropySource, OsEntropy, RngEntropy};
pub use supplier::{RandomBytes, RandomSupplier};

#[cfg(feature = "thread-local")]
pub use global::{custom_id, fill, nanoid, nanoid_with, random_vec, with_random};
