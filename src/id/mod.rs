//! Identifier generation.
//!
//! - [`IdGenerator`] - Unbiased identifiers over any [`Alphabet`](crate::Alphabet)
//! - [`generate_id`] - URL-safe identifier of a given size

mod generator;

pub use generator::{IdGenerator, generate_id};
