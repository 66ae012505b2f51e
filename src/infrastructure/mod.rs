//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `keys/` - Key source implementations (HTTP, in-memory)
//! - `fs/` - Atomic document output

pub mod fs;
pub mod keys;

// Re-export for convenience
pub use fs::write_atomic;
pub use keys::{HttpKeySource, StaticKeySource};
