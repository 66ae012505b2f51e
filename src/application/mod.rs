//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `CompileUseCase` - Load a manifest, build the graph, compile it
//! - `inspect_document` - Read back and summarise a compiled document

pub mod compile;
pub mod inspect;
pub mod summary;

pub use compile::{CompileOptions, CompileResult, CompileUseCase, DeploymentBuilder};
pub use inspect::{inspect_document, InspectResult};
pub use summary::{DocumentSummary, LabelSummary};
