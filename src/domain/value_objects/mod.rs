//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod config_warning;
mod endpoint;
mod hash;
mod instance_tag;
mod port_range;
mod resource_range;

pub use config_warning::ConfigWarning;
pub use endpoint::{Endpoint, PUBLIC_INTERNET_LABEL};
pub use hash::EntityId;
pub use instance_tag::InstanceTag;
pub use port_range::PortRange;
pub use resource_range::ResourceRange;
