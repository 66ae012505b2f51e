//! Deployment entity - the graph everything is deployed into
//!
//! A deployment owns machines, services (and through them containers) and
//! assertions. `deploy` is the only way in; `compile` is the only way out.

use serde::{Deserialize, Serialize};

use crate::domain::services::{check_invariants, export, vet};
use crate::error::BlueprintResult;

use super::{Assertion, Document, Invariant, Machine, Service};

/// Namespace used when none is configured
pub const DEFAULT_NAMESPACE: &str = "default-namespace";

/// Anything that can add itself to a deployment
///
/// Composite specs implement this by deploying each of their parts.
pub trait Deployable {
    fn deploy(self, deployment: &mut Deployment) -> BlueprintResult<()>;
}

/// Deployment-wide policy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeploymentOptions {
    pub namespace: String,
    pub admin_acl: Vec<String>,
    pub max_price: f64,
}

impl Default for DeploymentOptions {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_string(),
            admin_acl: Vec::new(),
            max_price: 0.0,
        }
    }
}

/// Lifecycle of a deployment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphState {
    Empty,
    Accumulating,
    Compiled,
}

/// The deployment graph
#[derive(Debug, Clone)]
pub struct Deployment {
    options: DeploymentOptions,
    machines: Vec<Machine>,
    services: Vec<Service>,
    invariants: Vec<Assertion>,
    state: GraphState,
}

impl Default for Deployment {
    fn default() -> Self {
        Self::new(DeploymentOptions::default())
    }
}

impl Deployment {
    pub fn new(options: DeploymentOptions) -> Self {
        Self {
            options,
            machines: Vec::new(),
            services: Vec::new(),
            invariants: Vec::new(),
            state: GraphState::Empty,
        }
    }

    pub fn options(&self) -> &DeploymentOptions {
        &self.options
    }

    pub fn namespace(&self) -> &str {
        &self.options.namespace
    }

    pub fn machines(&self) -> &[Machine] {
        &self.machines
    }

    pub fn services(&self) -> &[Service] {
        &self.services
    }

    pub fn invariants(&self) -> &[Assertion] {
        &self.invariants
    }

    pub fn state(&self) -> GraphState {
        self.state
    }

    /// Add a machine, a service, a list of them, or a composite
    ///
    /// Deploying the same instance twice is tolerated: it is appended again
    /// and collapses to one identity at compile time.
    pub fn deploy(&mut self, item: impl Deployable) -> BlueprintResult<()> {
        item.deploy(self)
    }

    /// Record that `invariant` must evaluate to `desired`
    pub fn assert(&mut self, invariant: Invariant, desired: bool) {
        self.invariants.push(Assertion::new(invariant, desired));
    }

    pub(crate) fn push_machine(&mut self, machine: Machine) {
        self.state = GraphState::Accumulating;
        self.machines.push(machine);
    }

    pub(crate) fn push_service(&mut self, service: Service) {
        self.state = GraphState::Accumulating;
        self.services.push(service);
    }

    /// Vet the graph, assign identities and flatten it into a [`Document`]
    ///
    /// Fails on the first consistency violation; nothing is exported in
    /// that case.
    pub fn compile(&mut self) -> BlueprintResult<Document> {
        self.state = GraphState::Compiled;
        tracing::debug!(
            machines = self.machines.len(),
            services = self.services.len(),
            "compiling deployment"
        );

        vet(&self.services)?;
        let document = export(self);
        check_invariants(&document)?;
        Ok(document)
    }
}

impl Deployable for Machine {
    fn deploy(self, deployment: &mut Deployment) -> BlueprintResult<()> {
        deployment.push_machine(self);
        Ok(())
    }
}

impl Deployable for Service {
    fn deploy(self, deployment: &mut Deployment) -> BlueprintResult<()> {
        deployment.push_service(self);
        Ok(())
    }
}

impl<T: Deployable> Deployable for Vec<T> {
    fn deploy(self, deployment: &mut Deployment) -> BlueprintResult<()> {
        for item in self {
            item.deploy(deployment)?;
        }
        Ok(())
    }
}

impl<T: Deployable, const N: usize> Deployable for [T; N] {
    fn deploy(self, deployment: &mut Deployment) -> BlueprintResult<()> {
        for item in self {
            item.deploy(deployment)?;
        }
        Ok(())
    }
}
