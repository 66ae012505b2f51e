//! Key Source Implementations
//!
//! Concrete implementations of the KeySource port.

mod http;
mod static_keys;

pub use http::{parse_keys, HttpKeySource};
pub use static_keys::StaticKeySource;
