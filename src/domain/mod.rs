//! Domain Layer
//!
//! The core of blueprint - the deployment graph and its compiler, without
//! I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Graph entities (Machine, Container, Service, Deployment, Document)
//! - `value_objects/` - Immutable value types (PortRange, Endpoint, EntityId)
//! - `services/` - Domain services (identity, vetting, export, invariants)
//! - `ports/` - Interface definitions for infrastructure
//!
//! Nothing in here touches the file system or the network; remote key
//! lookups go through the [`ports::KeySource`] port.

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
