//! Common test utilities for blueprint CLI and scenario tests.
//!
//! - `TestEnv`: isolated project and home directories plus CLI helpers
//! - Fixtures: reusable manifests

pub mod env;
pub mod fixtures;

#[allow(unused_imports)]
pub use env::*;
#[allow(unused_imports)]
pub use fixtures::*;
