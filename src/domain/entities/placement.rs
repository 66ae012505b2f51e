//! Placement rules - constraints on where a service's containers may run

use serde::{Deserialize, Serialize};

use super::Service;

/// Physical machine attributes a machine rule can pin
///
/// `None` leaves the attribute unconstrained.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MachineConstraint {
    pub provider: Option<String>,
    pub size: Option<String>,
    pub region: Option<String>,
    pub floating_ip: Option<String>,
}

/// A placement rule attached to a service
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlacementRule {
    /// Must (exclusive = false) or must not (exclusive = true) share a host
    /// with containers of `other`
    Label { exclusive: bool, other: String },
    /// Must (or must not) land on a machine matching `constraint`
    Machine {
        exclusive: bool,
        constraint: MachineConstraint,
    },
}

impl PlacementRule {
    /// Label rule against an existing service
    pub fn label(exclusive: bool, other: &Service) -> Self {
        Self::label_named(exclusive, other.name())
    }

    /// Label rule against a service referenced by name
    pub fn label_named(exclusive: bool, other: impl Into<String>) -> Self {
        PlacementRule::Label {
            exclusive,
            other: other.into(),
        }
    }

    pub fn machine(exclusive: bool, constraint: MachineConstraint) -> Self {
        PlacementRule::Machine {
            exclusive,
            constraint,
        }
    }

    /// Pin a service to a floating IP
    pub fn floating_ip(ip: impl Into<String>) -> Self {
        Self::machine(
            false,
            MachineConstraint {
                floating_ip: Some(ip.into()),
                ..Default::default()
            },
        )
    }

    pub fn is_exclusive(&self) -> bool {
        match self {
            PlacementRule::Label { exclusive, .. } | PlacementRule::Machine { exclusive, .. } => {
                *exclusive
            }
        }
    }

    /// Name of the service a label rule refers to
    pub fn other_label(&self) -> Option<&str> {
        match self {
            PlacementRule::Label { other, .. } => Some(other),
            PlacementRule::Machine { .. } => None,
        }
    }

    /// True for machine rules that pin a non-empty floating IP
    pub fn requests_floating_ip(&self) -> bool {
        match self {
            PlacementRule::Machine { constraint, .. } => constraint
                .floating_ip
                .as_deref()
                .is_some_and(|ip| !ip.is_empty()),
            PlacementRule::Label { .. } => false,
        }
    }
}
