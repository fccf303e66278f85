//! Error types for randpool.

use thiserror::Error;

/// Errors that can occur while supplying random bytes or building identifiers.
#[derive(Debug, Error)]
pub enum RandomError {
    /// The platform entropy source could not supply random data.
    ///
    /// Nothing is retried internally. The caller decides whether to abort or
    /// try again later.
    #[error("entropy unavailable: {source}")]
    EntropyUnavailable {
        /// The underlying failure reported by the source.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The alphabet was rejected at construction.
    #[error("invalid alphabet: {message}")]
    InvalidAlphabet {
        /// Description of what was invalid.
        message: &'static str,
    },

    /// Invalid configuration parameter.
    #[error("invalid config: {message}")]
    InvalidConfig {
        /// Description of what was invalid.
        message: &'static str,
    },
}

impl RandomError {
    /// Wraps a source failure as [`RandomError::EntropyUnavailable`].
    pub fn entropy<E>(source: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        RandomError::EntropyUnavailable {
            source: source.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_entropy_keeps_source() {
        let io_err = std::io::Error::other("no entropy");
        let err = RandomError::entropy(io_err);
        assert!(matches!(err, RandomError::EntropyUnavailable { .. }));
        assert!(err.source().is_some());
        assert!(err.to_string().contains("no entropy"));
    }

    #[test]
    fn test_display() {
        let err = RandomError::InvalidAlphabet {
            message: "alphabet is empty",
        };
        assert_eq!(err.to_string(), "invalid alphabet: alphabet is empty");

        let err = RandomError::InvalidConfig {
            message: "id size must be non-zero",
        };
        assert!(err.to_string().contains("invalid config"));
    }
}
