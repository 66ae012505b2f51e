//! Property tests for blueprint.
//!
//! Properties use randomized input generation to protect invariants like
//! "never panics", "identifiers are stable" and "ranges are validated".
//!
//! Run with: `cargo test --test properties`

#[path = "properties/identity.rs"]
mod identity;

#[path = "properties/manifest_parsing.rs"]
mod manifest_parsing;

#[path = "properties/port_range.rs"]
mod port_range;
