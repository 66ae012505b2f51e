//! Domain Services
//!
//! Pure business logic over the deployment graph. No I/O.
//!
//! - `identity` - content-derived identifiers for machines and containers
//! - `vetting` - consistency checks run before export
//! - `exporter` - flattening into the wire [`Document`](crate::domain::entities::Document)
//! - `invariant_checker` - evaluation of assertions against the exported topology

mod exporter;
mod identity;
mod invariant_checker;
mod vetting;

pub use exporter::{export, public_port_exclusions};
pub use identity::{assign_ids, Identifiable};
pub use invariant_checker::{check_invariants, TopologyGraph, ACL_ANNOTATION};
pub use vetting::vet;
