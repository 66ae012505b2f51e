//! Presentation Layer
//!
//! - `cli` - argument parsing (via clap)
//! - `factory` - creates use cases with their infrastructure dependencies
//! - `output` - text and NDJSON rendering

pub mod cli;
pub mod factory;
pub mod output;

pub use cli::{Cli, Commands};
pub use factory::{compile_options, create_compile_use_case, ConcreteCompileUseCase};
pub use output::{emit, error_event, format_error, write_event, Icons};
