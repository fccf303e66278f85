//! Buffer management for repeated fixed-size requests.
//!
//! Small lengths get one buffer each, allocated on first use and reused for
//! the lifetime of the pool. Large lengths are allocated per request.

mod pool;

pub use pool::{BufferPool, PooledBuffer};
