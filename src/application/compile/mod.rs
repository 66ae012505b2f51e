//! Compile Module
//!
//! Turns manifests into compiled documents.
//!
//! ## Structure
//!
//! - `builder` - Applies a manifest to a deployment graph (`DeploymentBuilder`)
//! - `options` - Configuration types (`CompileOptions`)
//! - `result` - Result types (`CompileResult`)
//! - `use_case` - Core use case logic (`CompileUseCase`)

mod builder;
mod options;
mod result;
mod use_case;

pub use builder::DeploymentBuilder;
pub use options::CompileOptions;
pub use result::CompileResult;
pub use use_case::CompileUseCase;
