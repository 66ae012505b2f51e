//! Domain Entities
//!
//! The deployable graph and the document it compiles to.
//! - `Machine` - A virtual machine to boot
//! - `Image` / `Container` - What runs on the machines
//! - `Service` - A named group of containers with network and placement rules
//! - `Invariant` / `Assertion` - Topology properties checked at compile time
//! - `Deployment` - The graph itself
//! - `Document` - The flattened wire format

mod assertion;
mod container;
mod deployment;
mod document;
mod image;
mod machine;
mod placement;
mod service;

pub use assertion::{Assertion, Invariant, InvariantForm};
pub use container::Container;
pub use deployment::{
    Deployable, Deployment, DeploymentOptions, GraphState, DEFAULT_NAMESPACE,
};
pub use document::{
    ConnectionRecord, ContainerRecord, Document, LabelRecord, MachineRecord, PlacementRecord,
};
pub use image::Image;
pub use machine::{Machine, MachineAttrs, MASTER_ROLE, WORKER_ROLE};
pub use placement::{MachineConstraint, PlacementRule};
pub use service::{Connection, Service};
