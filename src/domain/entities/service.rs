//! Service entity - a named group of containers sharing network and
//! placement policy
//!
//! Services are created through [`Context::service`](crate::Context::service),
//! which deduplicates the name. Connection rules are recorded as given;
//! whether the services they mention are actually deployed is only checked
//! when the deployment is compiled.

use crate::domain::value_objects::{Endpoint, PortRange};
use crate::error::BlueprintResult;

use super::{Container, Invariant, PlacementRule};

/// Permission for `from` to reach `to` on `ports`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connection {
    pub from: String,
    pub to: String,
    pub ports: PortRange,
}

/// A service in the deployment
#[derive(Debug, Clone)]
pub struct Service {
    name: String,
    containers: Vec<Container>,
    annotations: Vec<String>,
    placements: Vec<PlacementRule>,
    connections: Vec<Connection>,
    outgoing_public: Vec<PortRange>,
    incoming_public: Vec<PortRange>,
}

impl Service {
    pub(crate) fn new(name: String, containers: Vec<Container>) -> Self {
        Self {
            name,
            containers,
            annotations: Vec::new(),
            placements: Vec::new(),
            connections: Vec::new(),
            outgoing_public: Vec::new(),
            incoming_public: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn containers(&self) -> &[Container] {
        &self.containers
    }

    pub fn containers_mut(&mut self) -> &mut [Container] {
        &mut self.containers
    }

    pub fn annotations(&self) -> &[String] {
        &self.annotations
    }

    pub fn placements(&self) -> &[PlacementRule] {
        &self.placements
    }

    /// Rules between this service and other named services
    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    pub fn outgoing_public(&self) -> &[PortRange] {
        &self.outgoing_public
    }

    pub fn incoming_public(&self) -> &[PortRange] {
        &self.incoming_public
    }

    /// Addressable names of the containers: `1.<name>`, `2.<name>`, ...
    pub fn children(&self) -> Vec<String> {
        (1..=self.containers.len())
            .map(|i| format!("{}.{}", i, self.name))
            .collect()
    }

    pub fn annotate(&mut self, annotation: impl Into<String>) {
        self.annotations.push(annotation.into());
    }

    /// Allow `source` to reach this service on `ports`
    ///
    /// Traffic from the public internet must use a single port.
    pub fn allow_from(
        &mut self,
        source: impl Into<Endpoint>,
        ports: impl Into<PortRange>,
    ) -> BlueprintResult<()> {
        let ports = ports.into();
        match source.into() {
            Endpoint::Public => {
                self.incoming_public.push(ports.require_single()?);
            }
            Endpoint::Service(from) => {
                self.connections.push(Connection {
                    from,
                    to: self.name.clone(),
                    ports: ports.validated()?,
                });
            }
        }
        Ok(())
    }

    /// Allow this service to reach `target` on `ports`
    ///
    /// Traffic to the public internet must use a single port.
    pub fn connect(
        &mut self,
        target: impl Into<Endpoint>,
        ports: impl Into<PortRange>,
    ) -> BlueprintResult<()> {
        let ports = ports.into();
        match target.into() {
            Endpoint::Public => {
                self.outgoing_public.push(ports.require_single()?);
            }
            Endpoint::Service(to) => {
                self.connections.push(Connection {
                    from: self.name.clone(),
                    to,
                    ports: ports.validated()?,
                });
            }
        }
        Ok(())
    }

    /// Add a placement rule; conflicts are only detected at compile time
    pub fn place(&mut self, rule: PlacementRule) {
        self.placements.push(rule);
    }

    /// Name of the other end of a connection rule
    pub(crate) fn peer_of<'a>(&self, connection: &'a Connection) -> &'a str {
        if connection.from == self.name {
            &connection.to
        } else {
            &connection.from
        }
    }

    pub fn can_reach(&self, target: impl Into<Endpoint>) -> Invariant {
        Invariant::reach(self, target)
    }

    pub fn can_reach_acl(&self, target: impl Into<Endpoint>) -> Invariant {
        Invariant::reach_acl(self, target)
    }

    pub fn neighbor_of(&self, target: impl Into<Endpoint>) -> Invariant {
        Invariant::reach_direct(self, target)
    }

    /// Every path from `from` to `to` passes through this service
    pub fn between(&self, from: impl Into<Endpoint>, to: impl Into<Endpoint>) -> Invariant {
        Invariant::between(from, to, self)
    }
}
