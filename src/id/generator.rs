//! Masked rejection sampling over a random supplier.

use crate::alphabet::Alphabet;
use crate::config::IdConfig;
use crate::error::RandomError;
use crate::source::EntropySource;
use crate::supplier::RandomSupplier;
use crate::util::{mask_for, step_for};

/// Generates fixed-size identifiers without modulus bias.
///
/// Each random byte is masked down to the smallest power-of-two range that
/// covers the alphabet. Values that land past the last symbol are thrown
/// away instead of being wrapped around, so every symbol is equally likely
/// whatever the alphabet size.
///
/// Bytes are drawn from a [`RandomSupplier`] in rounds of a fixed size, so
/// repeated generation reuses the same pooled buffer.
///
/// # Example
///
/// ```
/// use randpool::{Alphabet, IdConfig, IdGenerator, RandomSupplier};
///
/// let config = IdConfig::new(10)?.with_alphabet(Alphabet::new("0123456789")?);
/// let generator = IdGenerator::new(config)?;
/// let mut supplier = RandomSupplier::new();
///
/// let id = generator.generate(&mut supplier)?;
/// assert_eq!(id.chars().count(), 10);
/// assert!(id.chars().all(|c| c.is_ascii_digit()));
/// # Ok::<(), randpool::RandomError>(())
/// ```
#[derive(Debug, Clone)]
pub struct IdGenerator {
    config: IdConfig,
    mask: u8,
    step: usize,
}

impl IdGenerator {
    /// Creates a generator for the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`RandomError::InvalidConfig`] if the configuration does not
    /// validate.
    pub fn new(config: IdConfig) -> Result<Self, RandomError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: IdConfig) -> Self {
        let len = config.alphabet().len();
        let mask = mask_for(len);
        let step = step_for(mask, config.size(), len);
        Self { config, mask, step }
    }

    /// Generates one identifier.
    ///
    /// # Errors
    ///
    /// Propagates [`RandomError::EntropyUnavailable`] from the supplier.
    pub fn generate<S: EntropySource>(
        &self,
        supplier: &mut RandomSupplier<S>,
    ) -> Result<String, RandomError> {
        let symbols = self.config.alphabet().symbols();
        let size = self.config.size();
        let mut id = String::with_capacity(size);
        let mut count = 0;

        loop {
            let bytes = supplier.random(self.step)?;
            for &b in bytes.iter() {
                let index = (b & self.mask) as usize;
                if index >= symbols.len() {
                    continue;
                }
                id.push(symbols[index]);
                count += 1;
                if count == size {
                    return Ok(id);
                }
            }
        }
    }

    /// Returns the identifier size in symbols.
    pub fn size(&self) -> usize {
        self.config.size()
    }

    /// Returns the alphabet.
    pub fn alphabet(&self) -> &Alphabet {
        self.config.alphabet()
    }

    /// Returns how many random bytes are requested per round.
    pub fn step(&self) -> usize {
        self.step
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::build(IdConfig::default())
    }
}

/// Generates a URL-safe identifier of `size` symbols.
///
/// The URL alphabet has 64 symbols, so `byte & 63` indexes it directly
/// and one random byte is spent per symbol. A `size` of zero yields an
/// empty string.
///
/// # Example
///
/// ```
/// use randpool::{RandomSupplier, generate_id};
///
/// let mut supplier = RandomSupplier::new();
/// assert_eq!(generate_id(&mut supplier, 21)?.len(), 21);
/// # Ok::<(), randpool::RandomError>(())
/// ```
pub fn generate_id<S: EntropySource>(
    supplier: &mut RandomSupplier<S>,
    size: usize,
) -> Result<String, RandomError> {
    let symbols = crate::alphabet::URL_ALPHABET.as_bytes();
    let bytes = supplier.random(size)?;
    Ok(bytes
        .iter()
        .map(|&b| symbols[(b & 63) as usize] as char)
        .collect())
}
