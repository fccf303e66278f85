//! Configuration for the buffer pool and identifier generation.
//!
//! This module provides types to configure how random bytes are supplied
//! and how identifiers are built from them:
//!
//! - [`PoolConfig`] - Controls which request lengths are cached
//! - [`IdConfig`] - Identifier size and alphabet
//!
//! # Example
//!
//! ```
//! use randpool::{Alphabet, IdConfig, PoolConfig};
//!
//! // Only cache requests shorter than 64 bytes
//! let pool = PoolConfig::new(64)?;
//!
//! // 16 hex symbols per identifier
//! let ids = IdConfig::new(16)?.with_alphabet(Alphabet::new("0123456789abcdef")?);
//!
//! # Ok::<(), randpool::RandomError>(())
//! ```

use crate::alphabet::Alphabet;
use crate::error::RandomError;

/// Default cache threshold. Lengths `0..=255` are cached.
pub const DEFAULT_CACHE_THRESHOLD: usize = 256;

/// Default identifier size, in symbols.
pub const DEFAULT_ID_SIZE: usize = 21;

/// Configuration for the length-keyed buffer pool.
///
/// Requests strictly shorter than `cache_threshold` are served from a
/// buffer that is allocated once and reused forever. Requests at or above
/// the threshold get a fresh allocation every time and are never retained.
///
/// # Example
///
/// ```
/// use randpool::PoolConfig;
///
/// let config = PoolConfig::default();
/// assert!(config.is_cached(255));
/// assert!(!config.is_cached(256));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PoolConfig {
    /// Exclusive upper bound on cached lengths.
    cache_threshold: usize,
}

impl PoolConfig {
    /// Creates a new pool configuration.
    ///
    /// # Errors
    ///
    /// Returns [`RandomError::InvalidConfig`] if `cache_threshold` is zero.
    pub fn new(cache_threshold: usize) -> Result<Self, RandomError> {
        if cache_threshold == 0 {
            return Err(RandomError::InvalidConfig {
                message: "cache threshold must be non-zero",
            });
        }

        Ok(Self { cache_threshold })
    }

    /// Sets the cache threshold.
    ///
    /// Note: This does not validate the configuration. Use [`PoolConfig::validate`]
    /// to check if the configuration is valid.
    pub fn with_cache_threshold(mut self, cache_threshold: usize) -> Self {
        self.cache_threshold = cache_threshold;
        self
    }

    /// Returns the cache threshold.
    pub fn cache_threshold(&self) -> usize {
        self.cache_threshold
    }

    /// Returns `true` if buffers of `len` bytes are kept in the pool.
    #[inline]
    pub fn is_cached(&self, len: usize) -> bool {
        len < self.cache_threshold
    }

    /// Validates the current configuration.
    pub fn validate(&self) -> Result<(), RandomError> {
        Self::new(self.cache_threshold).map(|_| ())
    }
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            cache_threshold: DEFAULT_CACHE_THRESHOLD,
        }
    }
}

/// Configuration for identifier generation.
///
/// Defaults to 21 symbols from the URL-safe alphabet, which gives roughly
/// 126 bits of randomness per identifier.
///
/// # Example
///
/// ```
/// use randpool::{Alphabet, IdConfig};
///
/// let config = IdConfig::default().with_size(10);
/// assert_eq!(config.size(), 10);
/// assert_eq!(config.alphabet(), &Alphabet::url());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IdConfig {
    size: usize,
    alphabet: Alphabet,
}

impl IdConfig {
    /// Creates a configuration for identifiers of `size` symbols drawn from
    /// the URL-safe alphabet.
    ///
    /// # Errors
    ///
    /// Returns [`RandomError::InvalidConfig`] if `size` is zero.
    pub fn new(size: usize) -> Result<Self, RandomError> {
        if size == 0 {
            return Err(RandomError::InvalidConfig {
                message: "id size must be non-zero",
            });
        }

        Ok(Self {
            size,
            alphabet: Alphabet::url(),
        })
    }

    /// Sets the identifier size.
    ///
    /// Note: This does not validate the configuration. Use [`IdConfig::validate`]
    /// to check if the configuration is valid.
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    /// Sets the alphabet.
    pub fn with_alphabet(mut self, alphabet: Alphabet) -> Self {
        self.alphabet = alphabet;
        self
    }

    /// Returns the identifier size in symbols.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the alphabet.
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Validates the current configuration.
    pub fn validate(&self) -> Result<(), RandomError> {
        Self::new(self.size).map(|_| ())
    }
}

impl Default for IdConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_ID_SIZE,
            alphabet: Alphabet::url(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_config_default() {
        let config = PoolConfig::default();
        assert_eq!(config.cache_threshold(), DEFAULT_CACHE_THRESHOLD);
        assert!(config.is_cached(0));
        assert!(config.is_cached(255));
        assert!(!config.is_cached(256));
    }

    #[test]
    fn test_pool_config_invalid_zero() {
        assert!(PoolConfig::new(0).is_err());
        assert!(PoolConfig::default().with_cache_threshold(0).validate().is_err());
    }

    #[test]
    fn test_pool_config_builder() {
        let config = PoolConfig::default().with_cache_threshold(32);
        assert_eq!(config.cache_threshold(), 32);
        assert!(config.is_cached(31));
        assert!(!config.is_cached(32));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_id_config_default() {
        let config = IdConfig::default();
        assert_eq!(config.size(), DEFAULT_ID_SIZE);
        assert_eq!(config.alphabet().len(), 64);
    }

    #[test]
    fn test_id_config_invalid_zero() {
        assert!(IdConfig::new(0).is_err());
        assert!(IdConfig::default().with_size(0).validate().is_err());
    }

    #[test]
    fn test_id_config_with_alphabet() {
        let hex = Alphabet::new("0123456789abcdef").unwrap();
        let config = IdConfig::new(8).unwrap().with_alphabet(hex.clone());
        assert_eq!(config.size(), 8);
        assert_eq!(config.alphabet(), &hex);
    }
}
