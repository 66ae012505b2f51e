//! Endpoint value object - either a named service or the public internet

use std::fmt;

use crate::domain::entities::Service;

/// Label used for connections with the public internet
pub const PUBLIC_INTERNET_LABEL: &str = "public";

/// One side of a connection rule or an invariant node
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// The public-internet sentinel
    Public,
    /// A service, referenced by its (deduplicated) name
    Service(String),
}

impl Endpoint {
    /// Reference a service by name without holding the service itself
    pub fn service(name: impl Into<String>) -> Self {
        Endpoint::Service(name.into())
    }

    /// Parse a label as written in a manifest or document
    pub fn from_label(label: &str) -> Self {
        if label == PUBLIC_INTERNET_LABEL {
            Endpoint::Public
        } else {
            Endpoint::Service(label.to_string())
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Endpoint::Public => PUBLIC_INTERNET_LABEL,
            Endpoint::Service(name) => name,
        }
    }

    pub fn is_public(&self) -> bool {
        matches!(self, Endpoint::Public)
    }
}

impl From<&Service> for Endpoint {
    fn from(service: &Service) -> Self {
        Endpoint::Service(service.name().to_string())
    }
}

impl From<&mut Service> for Endpoint {
    fn from(service: &mut Service) -> Self {
        Endpoint::Service(service.name().to_string())
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
