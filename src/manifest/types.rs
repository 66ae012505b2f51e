//! Manifest type definitions

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::entities::{InvariantForm, MachineConstraint};
use crate::domain::value_objects::{PortRange, ResourceRange};

/// Upper bound on a machine `count` or container `replicas`
pub const MAX_REPLICAS: usize = 1024;

/// Root of a topology manifest
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Manifest {
    pub deployment: DeploymentSection,
    pub machines: Vec<MachineSpec>,
    pub services: Vec<ServiceSpec>,
    pub connections: Vec<ConnectionSpec>,
    pub placements: Vec<PlacementSpec>,
    pub assertions: Vec<AssertionSpec>,
}

/// Deployment policy; unset fields fall back to configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DeploymentSection {
    pub namespace: Option<String>,
    pub admin_acl: Option<Vec<String>>,
    pub max_price: Option<f64>,
}

/// `cpu = 2`, `cpu = [1, 4]` or `cpu = { min = 1, max = 4 }`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResourceSpec {
    Exact(f64),
    Pair([f64; 2]),
    Range(ResourceRange),
}

impl From<ResourceSpec> for ResourceRange {
    fn from(spec: ResourceSpec) -> Self {
        match spec {
            ResourceSpec::Exact(n) => ResourceRange::exact(n),
            ResourceSpec::Pair([min, max]) => ResourceRange::new(min, max),
            ResourceSpec::Range(range) => range,
        }
    }
}

/// One or more identical machines
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MachineSpec {
    pub provider: String,
    pub role: String,
    pub region: String,
    pub size: String,
    pub floating_ip: String,
    pub disk_size: u32,
    pub ssh_keys: Vec<String>,
    /// Users whose public keys are fetched and appended to `ssh_keys`
    pub github_users: Vec<String>,
    pub cpu: Option<ResourceSpec>,
    pub ram: Option<ResourceSpec>,
    pub preemptible: bool,
    pub count: usize,
}

impl Default for MachineSpec {
    fn default() -> Self {
        Self {
            provider: String::new(),
            role: String::new(),
            region: String::new(),
            size: String::new(),
            floating_ip: String::new(),
            disk_size: 0,
            ssh_keys: Vec::new(),
            github_users: Vec::new(),
            cpu: None,
            ram: None,
            preemptible: false,
            count: 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceSpec {
    pub name: String,
    #[serde(default)]
    pub containers: Vec<ContainerSpec>,
    #[serde(default)]
    pub annotations: Vec<String>,
}

/// A container, replicated `replicas` times
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContainerSpec {
    pub image: String,
    #[serde(default)]
    pub dockerfile: Option<String>,
    #[serde(default)]
    pub command: Vec<String>,
    #[serde(default)]
    pub env: BTreeMap<String, String>,
    #[serde(default)]
    pub files: BTreeMap<String, String>,
    #[serde(default)]
    pub hostname: Option<String>,
    #[serde(default = "default_replicas")]
    pub replicas: usize,
}

fn default_replicas() -> usize {
    1
}

/// `ports = 80` or `ports = [8000, 8080]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PortSpec {
    Single(u16),
    Range([u16; 2]),
}

impl From<PortSpec> for PortRange {
    fn from(spec: PortSpec) -> Self {
        match spec {
            PortSpec::Single(port) => PortRange::single(port),
            PortSpec::Range(bounds) => PortRange::from(bounds),
        }
    }
}

/// Traffic from `from` to `to`; either side may be `public`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConnectionSpec {
    pub from: String,
    pub to: String,
    pub ports: PortSpec,
}

/// Placement of `service`, either against another service (`other`) or
/// against machine attributes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlacementSpec {
    pub service: String,
    #[serde(default)]
    pub exclusive: bool,
    #[serde(default)]
    pub other: Option<String>,
    #[serde(default)]
    pub provider: Option<String>,
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub floating_ip: Option<String>,
}

impl PlacementSpec {
    /// Machine attributes named by this placement, if any
    pub fn machine_constraint(&self) -> Option<MachineConstraint> {
        let constraint = MachineConstraint {
            provider: self.provider.clone(),
            size: self.size.clone(),
            region: self.region.clone(),
            floating_ip: self.floating_ip.clone(),
        };
        (constraint != MachineConstraint::default()).then_some(constraint)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AssertionSpec {
    pub form: InvariantForm,
    #[serde(default)]
    pub nodes: Vec<String>,
    #[serde(default = "default_target")]
    pub target: bool,
}

fn default_target() -> bool {
    true
}
