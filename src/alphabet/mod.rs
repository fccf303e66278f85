//! Alphabets and the byte-to-symbol mapping.
//!
//! - [`Alphabet`] - Validated, ordered set of printable symbols
//! - [`URL_ALPHABET`] - The 64-symbol URL-safe default

use std::collections::HashSet;

use tracing::debug;

use crate::error::RandomError;
use crate::util::mask_for;

/// URL-safe symbols `A-Za-z0-9_-`, ordered to compress well with gzip.
pub const URL_ALPHABET: &str = "useandom-26T198340PX75pxJACKVERYMINDBUSHWOLF_GQZbfghjklqvwyzrict";

/// Largest alphabet a single byte can index.
pub const MAX_ALPHABET_LEN: usize = 256;

/// An ordered set of distinct symbols used to render random bytes.
///
/// Holds between 2 and 256 symbols.
///
/// # Modulus bias
///
/// [`Alphabet::encode`] maps byte `b` to `symbols[b % len]`. That is only
/// uniform when `len` divides 256 (see [`Alphabet::divides_byte_range`]).
/// For other sizes the symbols with low indices come up more often. Use
/// [`IdGenerator`](crate::IdGenerator) for unbiased identifiers over any
/// alphabet.
///
/// # Example
///
/// ```
/// use randpool::Alphabet;
///
/// let hex = Alphabet::new("0123456789abcdef")?;
/// assert_eq!(hex.encode(&[0, 15, 16, 255]), "0f0f");
/// # Ok::<(), randpool::RandomError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Alphabet {
    symbols: Box<[char]>,
}

impl Alphabet {
    /// Creates an alphabet from the characters of `symbols`, in order.
    ///
    /// # Errors
    ///
    /// Returns [`RandomError::InvalidAlphabet`] if there are fewer than 2 or
    /// more than 256 symbols, or if a symbol repeats.
    pub fn new(symbols: &str) -> Result<Self, RandomError> {
        let symbols: Box<[char]> = symbols.chars().collect();

        if symbols.len() < 2 {
            return Err(RandomError::InvalidAlphabet {
                message: "alphabet needs at least 2 symbols",
            });
        }

        if symbols.len() > MAX_ALPHABET_LEN {
            return Err(RandomError::InvalidAlphabet {
                message: "alphabet cannot exceed 256 symbols",
            });
        }

        let mut seen = HashSet::with_capacity(symbols.len());
        if !symbols.iter().all(|c| seen.insert(*c)) {
            return Err(RandomError::InvalidAlphabet {
                message: "alphabet symbols must be distinct",
            });
        }

        let alphabet = Self { symbols };
        if !alphabet.divides_byte_range() {
            debug!(
                len = alphabet.len(),
                "alphabet size does not divide 256, modulus encoding is biased"
            );
        }
        Ok(alphabet)
    }

    /// The URL-safe alphabet, see [`URL_ALPHABET`].
    pub fn url() -> Self {
        Self {
            symbols: URL_ALPHABET.chars().collect(),
        }
    }

    /// Returns the number of symbols.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Returns the symbols in order.
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// Returns `true` if every symbol is equally likely under
    /// [`Alphabet::encode`], i.e. `256 % len == 0`.
    pub fn divides_byte_range(&self) -> bool {
        256 % self.symbols.len() == 0
    }

    /// Smallest all-ones mask covering every symbol index.
    pub fn mask(&self) -> u8 {
        mask_for(self.symbols.len())
    }

    /// Maps each byte to `symbols[byte % len]`.
    pub fn encode(&self, bytes: &[u8]) -> String {
        let len = self.symbols.len();
        bytes
            .iter()
            .map(|&b| self.symbols[b as usize % len])
            .collect()
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::url()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_alphabet() {
        let url = Alphabet::url();
        assert_eq!(url.len(), 64);
        assert!(url.divides_byte_range());
        assert_eq!(url.mask(), 63);
        assert_eq!(Alphabet::new(URL_ALPHABET).unwrap(), url);
        assert!(
            url.symbols()
                .iter()
                .all(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-')
        );
    }

    #[test]
    fn test_invalid_alphabets() {
        assert!(Alphabet::new("").is_err());
        assert!(Alphabet::new("a").is_err());
        assert!(Alphabet::new("abca").is_err());

        let too_long: String = (0u32..257).filter_map(|i| char::from_u32(0x100 + i)).collect();
        assert!(Alphabet::new(&too_long).is_err());
    }

    #[test]
    fn test_full_byte_alphabet() {
        let symbols: String = (0u32..256).filter_map(|i| char::from_u32(0x100 + i)).collect();
        let alphabet = Alphabet::new(&symbols).unwrap();
        assert_eq!(alphabet.len(), 256);
        assert_eq!(alphabet.mask(), 255);
        assert_eq!(alphabet.encode(&[255]), char::from_u32(0x1FF).unwrap().to_string());
    }

    #[test]
    fn test_encode_modulus() {
        let abc = Alphabet::new("abc").unwrap();
        assert!(!abc.divides_byte_range());
        assert_eq!(abc.encode(&[0, 1, 2, 3, 4, 255]), "abcaba");
        assert_eq!(abc.encode(&[]), "");
    }

    #[test]
    fn test_encode_unicode_symbols() {
        let arrows = Alphabet::new("←↑→↓").unwrap();
        assert_eq!(arrows.encode(&[0, 1, 2, 3, 4]), "←↑→↓←");
    }
}
