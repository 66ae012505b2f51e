//! Blueprint - declarative deployment compiler
//!
//! Describe machines, containerized services, the connections between them
//! and placement constraints, then compile the graph into a single
//! self-contained document that a cluster manager can act on.
//!
//! ```ignore
//! use blueprint::{Context, Deployment, Endpoint};
//!
//! let ctx = Context::new();
//! let mut web = ctx.service("web", ctx.container("nginx").replicate(2));
//! web.allow_from(Endpoint::Public, 80)?;
//!
//! let mut deployment = Deployment::default();
//! deployment.deploy(web)?;
//! let document = deployment.compile()?;
//! ```
//!
//! ## Layers
//!
//! - `domain` - graph entities, identity, vetting, export, invariants
//! - `application` - compile and inspect use cases
//! - `infrastructure` - HTTP key retrieval, atomic file output
//! - `manifest` - TOML/YAML/JSON front-end for the graph API
//! - `presentation` - CLI parsing and output rendering

pub mod application;
pub mod config;
pub mod context;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod manifest;
pub mod presentation;

pub use config::Config;
pub use context::Context;
pub use domain::entities::{
    Assertion, Container, Deployable, Deployment, DeploymentOptions, Document, Image, Invariant,
    InvariantForm, Machine, MachineAttrs, MachineConstraint, PlacementRule, Service,
};
pub use domain::ports::KeySource;
pub use domain::value_objects::{Endpoint, PortRange, ResourceRange};
pub use error::{BlueprintError, BlueprintResult, ErrorKind};
