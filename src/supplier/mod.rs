//! Random byte supplier.
//!
//! - [`RandomSupplier`] - Pool plus source, hands out freshly filled buffers
//! - [`RandomBytes`] - Borrowed view of one request's bytes

mod engine;

pub use engine::{RandomBytes, RandomSupplier};
