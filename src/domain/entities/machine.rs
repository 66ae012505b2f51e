//! Machine entity - a virtual machine the orchestrator should boot
//!
//! Machines are plain records: every attribute may be left at its zero value.
//! Duplicating a machine (`duplicate`, `replicate`, `with_role`) issues a new
//! instantiation tag, while a Rust `Clone` keeps the tag and therefore
//! refers to the same logical machine.

use serde::{Deserialize, Serialize};

use crate::context::Context;
use crate::domain::services::Identifiable;
use crate::domain::value_objects::{InstanceTag, ResourceRange};

/// Role assigned to master machines
pub const MASTER_ROLE: &str = "Master";
/// Role assigned to worker machines
pub const WORKER_ROLE: &str = "Worker";

/// Machine attributes accepted at construction time
///
/// Missing fields fall back to their zero value; construction never fails.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MachineAttrs {
    pub provider: String,
    pub role: String,
    pub region: String,
    pub size: String,
    pub floating_ip: String,
    pub disk_size: u32,
    pub ssh_keys: Vec<String>,
    pub cpu: ResourceRange,
    pub ram: ResourceRange,
    pub preemptible: bool,
}

/// A machine in the deployment
#[derive(Debug, Clone)]
pub struct Machine {
    pub provider: String,
    pub role: String,
    pub region: String,
    pub size: String,
    pub floating_ip: String,
    pub disk_size: u32,
    pub ssh_keys: Vec<String>,
    pub cpu: ResourceRange,
    pub ram: ResourceRange,
    pub preemptible: bool,
    tag: InstanceTag,
    ctx: Context,
}

impl Machine {
    pub(crate) fn new(ctx: Context, attrs: MachineAttrs) -> Self {
        let MachineAttrs {
            provider,
            role,
            region,
            size,
            floating_ip,
            disk_size,
            ssh_keys,
            cpu,
            ram,
            preemptible,
        } = attrs;

        Self {
            provider,
            role,
            region,
            size,
            floating_ip,
            disk_size,
            ssh_keys,
            cpu,
            ram,
            preemptible,
            tag: ctx.next_tag(),
            ctx,
        }
    }

    /// Snapshot of the machine's attributes
    pub fn attrs(&self) -> MachineAttrs {
        MachineAttrs {
            provider: self.provider.clone(),
            role: self.role.clone(),
            region: self.region.clone(),
            size: self.size.clone(),
            floating_ip: self.floating_ip.clone(),
            disk_size: self.disk_size,
            ssh_keys: self.ssh_keys.clone(),
            cpu: self.cpu,
            ram: self.ram,
            preemptible: self.preemptible,
        }
    }

    /// Independent copy with a new instantiation tag
    pub fn duplicate(&self) -> Self {
        Self::new(self.ctx.clone(), self.attrs())
    }

    /// `n` independent copies
    pub fn replicate(&self, n: usize) -> Vec<Self> {
        (0..n).map(|_| self.duplicate()).collect()
    }

    /// Copy with a different role
    pub fn with_role(&self, role: impl Into<String>) -> Self {
        let mut copy = self.duplicate();
        copy.role = role.into();
        copy
    }

    pub fn as_worker(&self) -> Self {
        self.with_role(WORKER_ROLE)
    }

    pub fn as_master(&self) -> Self {
        self.with_role(MASTER_ROLE)
    }

    pub fn is_master(&self) -> bool {
        self.role == MASTER_ROLE
    }
}

impl Identifiable for Machine {
    fn instance_tag(&self) -> InstanceTag {
        self.tag
    }

    // ssh keys are secrets and must not influence identity
    fn content_key(&self) -> String {
        serde_json::json!({
            "provider": self.provider,
            "role": self.role,
            "region": self.region,
            "size": self.size,
            "floatingIp": self.floating_ip,
            "diskSize": self.disk_size,
            "cpu": { "min": self.cpu.min, "max": self.cpu.max },
            "ram": { "min": self.ram.min, "max": self.ram.max },
            "preemptible": self.preemptible,
        })
        .to_string()
    }
}
