//! Topology manifests
//!
//! A manifest is the declarative, file-based way to describe a deployment:
//! machines, services with their containers, connections, placements and
//! assertions. It is read from TOML, YAML or JSON (chosen by file
//! extension) and applied through the public graph API by
//! [`crate::application::DeploymentBuilder`].

mod loader;
mod types;

pub use loader::{load, parse, ManifestFormat};
pub use types::{
    AssertionSpec, ConnectionSpec, ContainerSpec, DeploymentSection, MachineSpec, Manifest,
    PlacementSpec, PortSpec, ResourceSpec, ServiceSpec, MAX_REPLICAS,
};
