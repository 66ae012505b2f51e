//! Exporter - flatten a vetted deployment into a [`Document`]
//!
//! Machines and containers are identified in two separate universes.
//! Services are walked in deployment order; each contributes a label record,
//! its connection rules (named services first, then outgoing public, then
//! incoming public) and its placement rules.

use std::collections::{BTreeMap, HashSet};

use crate::domain::entities::{
    ConnectionRecord, ContainerRecord, Deployment, Document, LabelRecord, MachineRecord,
    PlacementRecord, PlacementRule, Service,
};
use crate::domain::value_objects::PUBLIC_INTERNET_LABEL;

use super::assign_ids;

/// Flatten `deployment` into its wire document
///
/// Assumes the deployment has been vetted.
pub fn export(deployment: &Deployment) -> Document {
    let machine_ids = assign_ids(deployment.machines());
    let machines = deployment
        .machines()
        .iter()
        .zip(machine_ids)
        .map(|(m, id)| MachineRecord {
            id,
            role: m.role.clone(),
            provider: m.provider.clone(),
            region: m.region.clone(),
            size: m.size.clone(),
            floating_ip: m.floating_ip.clone(),
            disk_size: m.disk_size,
            ssh_keys: m.ssh_keys.clone(),
            cpu: m.cpu,
            ram: m.ram,
            preemptible: m.preemptible,
        })
        .collect();

    let services = deployment.services();
    let mut container_ids = assign_ids(services.iter().flat_map(Service::containers)).into_iter();

    let mut labels = Vec::with_capacity(services.len());
    let mut containers = Vec::new();
    let mut connections = Vec::new();
    let mut placements = Vec::new();
    let mut seen = HashSet::new();

    for service in services {
        connections.extend(connection_records(service));
        placements.extend(service.placements().iter().map(|p| placement_record(service, p)));

        let mut ids = Vec::with_capacity(service.containers().len());
        for (container, id) in service.containers().iter().zip(container_ids.by_ref()) {
            ids.push(id.clone());
            if seen.insert(id.clone()) {
                containers.push(ContainerRecord {
                    id,
                    image: container.image.clone(),
                    command: container.command.clone(),
                    env: container.env.clone(),
                    filepath_to_content: container.filepath_to_content.clone(),
                    hostname: container.explicit_hostname().map(str::to_string),
                });
            }
        }

        labels.push(LabelRecord {
            name: service.name().to_string(),
            ids,
            annotations: service.annotations().to_vec(),
        });
    }

    placements.extend(public_port_exclusions(&connections));

    let options = deployment.options();
    let document = Document {
        machines,
        labels,
        containers,
        connections,
        placements,
        invariants: deployment.invariants().to_vec(),
        namespace: options.namespace.clone(),
        admin_acl: options.admin_acl.clone(),
        max_price: options.max_price,
    };

    tracing::debug!(
        machines = document.machines.len(),
        labels = document.labels.len(),
        containers = document.containers.len(),
        connections = document.connections.len(),
        "exported document"
    );
    document
}

fn connection_records(service: &Service) -> Vec<ConnectionRecord> {
    let name = service.name();
    let named = service.connections().iter().map(|c| ConnectionRecord {
        from: c.from.clone(),
        to: c.to.clone(),
        min_port: c.ports.min(),
        max_port: c.ports.max(),
    });
    let outgoing = service.outgoing_public().iter().map(|r| ConnectionRecord {
        from: name.to_string(),
        to: PUBLIC_INTERNET_LABEL.to_string(),
        min_port: r.min(),
        max_port: r.max(),
    });
    let incoming = service.incoming_public().iter().map(|r| ConnectionRecord {
        from: PUBLIC_INTERNET_LABEL.to_string(),
        to: name.to_string(),
        min_port: r.min(),
        max_port: r.max(),
    });
    named.chain(outgoing).chain(incoming).collect()
}

fn placement_record(service: &Service, rule: &PlacementRule) -> PlacementRecord {
    let target_label = service.name().to_string();
    match rule {
        PlacementRule::Label { exclusive, other } => PlacementRecord {
            target_label,
            exclusive: *exclusive,
            other_label: Some(other.clone()),
            provider: None,
            size: None,
            region: None,
            floating_ip: None,
        },
        PlacementRule::Machine {
            exclusive,
            constraint,
        } => PlacementRecord {
            target_label,
            exclusive: *exclusive,
            other_label: None,
            provider: constraint.provider.clone(),
            size: constraint.size.clone(),
            region: constraint.region.clone(),
            floating_ip: constraint.floating_ip.clone(),
        },
    }
}

/// Exclusive label placements keeping public listeners on one port apart
///
/// Two containers can't both bind the same public port on one host, so
/// every pair of labels receiving public traffic on the same port
/// (including a label with itself) becomes mutually exclusive. Ports are
/// processed in ascending order.
pub fn public_port_exclusions(connections: &[ConnectionRecord]) -> Vec<PlacementRecord> {
    let mut listeners: BTreeMap<u16, Vec<&str>> = BTreeMap::new();
    for connection in connections {
        if connection.from != PUBLIC_INTERNET_LABEL {
            continue;
        }
        listeners
            .entry(connection.min_port)
            .or_default()
            .push(&connection.to);
    }

    let mut rules = Vec::new();
    for labels in listeners.values() {
        for target in labels {
            for other in labels {
                rules.push(PlacementRecord {
                    target_label: target.to_string(),
                    exclusive: true,
                    other_label: Some(other.to_string()),
                    provider: None,
                    size: None,
                    region: None,
                    floating_ip: None,
                });
            }
        }
    }
    rules
}
