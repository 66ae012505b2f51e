//! Vetting - consistency checks over a fully populated graph
//!
//! Services are checked in deployment order. For each service:
//!
//! 1. every connection rule names a deployed service
//! 2. every label placement names a deployed service
//! 3. a floating IP is not combined with public inbound traffic and
//!    multiple containers
//! 4. containers sharing an image name share its Dockerfile
//! 5. explicit hostnames are unique
//!
//! Image and hostname tables accumulate across services. The first
//! violation is returned; nothing is aggregated.

use std::collections::{HashMap, HashSet};

use crate::domain::entities::Service;
use crate::error::{BlueprintError, BlueprintResult};

/// Check the graph's services for consistency
pub fn vet(services: &[Service]) -> BlueprintResult<()> {
    let labels: HashSet<&str> = services.iter().map(Service::name).collect();
    let mut dockerfiles: HashMap<&str, Option<&str>> = HashMap::new();
    let mut hostnames: HashSet<&str> = HashSet::new();

    for service in services {
        for connection in service.connections() {
            let peer = service.peer_of(connection);
            if !labels.contains(peer) {
                return Err(BlueprintError::UndeployedConnection {
                    service: service.name().to_string(),
                    peer: peer.to_string(),
                });
            }
        }

        for placement in service.placements() {
            if let Some(other) = placement.other_label() {
                if !labels.contains(other) {
                    return Err(BlueprintError::UndeployedPlacement {
                        service: service.name().to_string(),
                        other: other.to_string(),
                    });
                }
            }
        }

        let has_floating_ip = service.placements().iter().any(|p| p.requests_floating_ip());
        if has_floating_ip && !service.incoming_public().is_empty() && service.containers().len() > 1
        {
            return Err(BlueprintError::FloatingIpConflict {
                service: service.name().to_string(),
            });
        }

        for container in service.containers() {
            let image = container.image.name();
            let dockerfile = container.image.dockerfile();
            match dockerfiles.get(image) {
                Some(seen) if *seen != dockerfile => {
                    return Err(BlueprintError::DockerfileConflict {
                        image: image.to_string(),
                    });
                }
                _ => {
                    dockerfiles.insert(image, dockerfile);
                }
            }

            if let Some(hostname) = container.explicit_hostname() {
                if !hostnames.insert(hostname) {
                    return Err(BlueprintError::DuplicateHostname {
                        hostname: hostname.to_string(),
                    });
                }
            }
        }
    }

    tracing::debug!(services = services.len(), "vetting passed");
    Ok(())
}
