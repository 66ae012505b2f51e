//! Document - the flattened deployment handed to the orchestrator
//!
//! This is the terminal form produced by compiling a deployment. Field names
//! are camelCase on the wire.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{EntityId, ResourceRange};
use crate::error::BlueprintResult;

use super::{Assertion, Image};

/// A machine with its assigned identifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MachineRecord {
    pub id: EntityId,
    pub role: String,
    pub provider: String,
    pub region: String,
    pub size: String,
    pub floating_ip: String,
    pub disk_size: u32,
    pub ssh_keys: Vec<String>,
    pub cpu: ResourceRange,
    pub ram: ResourceRange,
    pub preemptible: bool,
}

/// A service, flattened to its name and container identifiers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelRecord {
    pub name: String,
    pub ids: Vec<EntityId>,
    #[serde(default)]
    pub annotations: Vec<String>,
}

/// A container with its assigned identifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerRecord {
    pub id: EntityId,
    pub image: Image,
    #[serde(default)]
    pub command: Vec<String>,
    #[serde(default)]
    pub env: BTreeMap<String, String>,
    #[serde(default)]
    pub filepath_to_content: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
}

/// A directional connection permission between two labels
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionRecord {
    pub from: String,
    pub to: String,
    pub min_port: u16,
    pub max_port: u16,
}

/// A placement rule bound to its target label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacementRecord {
    pub target_label: String,
    pub exclusive: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub other_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub floating_ip: Option<String>,
}

/// The compiled deployment
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    #[serde(default)]
    pub machines: Vec<MachineRecord>,
    #[serde(default)]
    pub labels: Vec<LabelRecord>,
    #[serde(default)]
    pub containers: Vec<ContainerRecord>,
    #[serde(default)]
    pub connections: Vec<ConnectionRecord>,
    #[serde(default)]
    pub placements: Vec<PlacementRecord>,
    #[serde(default)]
    pub invariants: Vec<Assertion>,
    #[serde(default)]
    pub namespace: String,
    #[serde(default, rename = "adminACL")]
    pub admin_acl: Vec<String>,
    #[serde(default)]
    pub max_price: f64,
}

impl Document {
    /// Parse a previously compiled document
    pub fn from_json(json: &str) -> BlueprintResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> BlueprintResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> BlueprintResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Look up a label by name
    pub fn label(&self, name: &str) -> Option<&LabelRecord> {
        self.labels.iter().find(|l| l.name == name)
    }

    /// Look up a container by identifier
    pub fn container(&self, id: &EntityId) -> Option<&ContainerRecord> {
        self.containers.iter().find(|c| &c.id == id)
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}
