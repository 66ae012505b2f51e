//! Invariant checker - evaluate assertions against the exported topology
//!
//! The topology graph has one node per container, named `<i>.<label>` in the
//! same way as `Service::children`, plus a `public` node when the public
//! internet takes part in any connection or assertion. Each connection
//! record links every container of `from` to every container of `to`.

use std::collections::{BTreeSet, HashSet, VecDeque};

use crate::domain::entities::{Assertion, Document, InvariantForm, MASTER_ROLE};
use crate::domain::value_objects::PUBLIC_INTERNET_LABEL;
use crate::error::{BlueprintError, BlueprintResult};

/// Annotation marking a service as an access-control point
pub const ACL_ANNOTATION: &str = "ACL";

#[derive(Debug, Clone)]
struct Node {
    name: String,
    label: String,
}

/// Container-level connectivity graph derived from a [`Document`]
#[derive(Debug, Clone, Default)]
pub struct TopologyGraph {
    nodes: Vec<Node>,
    edges: Vec<BTreeSet<usize>>,
    acl_labels: HashSet<String>,
    exclusive_pairs: HashSet<(String, String)>,
    schedulable_machines: usize,
}

impl TopologyGraph {
    pub fn from_document(document: &Document) -> Self {
        let mut graph = Self::default();

        for label in &document.labels {
            for i in 0..label.ids.len() {
                graph.add_node(format!("{}.{}", i + 1, label.name), &label.name);
            }
            if label.annotations.iter().any(|a| a == ACL_ANNOTATION) {
                graph.acl_labels.insert(label.name.clone());
            }
        }

        let public_referenced = document
            .connections
            .iter()
            .any(|c| c.from == PUBLIC_INTERNET_LABEL || c.to == PUBLIC_INTERNET_LABEL)
            || document
                .invariants
                .iter()
                .any(|a| a.nodes.iter().any(|n| n == PUBLIC_INTERNET_LABEL));
        if public_referenced {
            graph.add_node(PUBLIC_INTERNET_LABEL.to_string(), PUBLIC_INTERNET_LABEL);
        }

        for connection in &document.connections {
            let targets = graph.nodes_labeled(&connection.to);
            for from in graph.nodes_labeled(&connection.from) {
                graph.edges[from].extend(targets.iter().copied());
            }
        }

        for placement in &document.placements {
            if let (true, Some(other)) = (placement.exclusive, &placement.other_label) {
                graph
                    .exclusive_pairs
                    .insert((placement.target_label.clone(), other.clone()));
                graph
                    .exclusive_pairs
                    .insert((other.clone(), placement.target_label.clone()));
            }
        }

        graph.schedulable_machines = document
            .machines
            .iter()
            .filter(|m| m.role != MASTER_ROLE)
            .count();

        graph
    }

    fn add_node(&mut self, name: String, label: &str) {
        self.nodes.push(Node {
            name,
            label: label.to_string(),
        });
        self.edges.push(BTreeSet::new());
    }

    fn nodes_labeled(&self, label: &str) -> Vec<usize> {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, n)| n.label == label)
            .map(|(i, _)| i)
            .collect()
    }

    /// Node names, in insertion order
    pub fn node_names(&self) -> Vec<&str> {
        self.nodes.iter().map(|n| n.name.as_str()).collect()
    }

    /// Nodes reachable from `start` by following one or more edges
    ///
    /// With `respect_acl`, nodes of ACL-annotated labels can be reached but
    /// are not traversed. The start node is always traversed.
    fn reachable(&self, start: usize, respect_acl: bool) -> HashSet<usize> {
        self.reachable_through(start, |node| {
            !respect_acl || !self.acl_labels.contains(&self.nodes[node].label)
        })
    }

    /// Nodes reachable from `start`, traversing only the start node and
    /// nodes accepted by `passable`
    fn reachable_through(&self, start: usize, passable: impl Fn(usize) -> bool) -> HashSet<usize> {
        let mut seen = HashSet::new();
        let mut queue = VecDeque::from([start]);
        while let Some(current) = queue.pop_front() {
            if current != start && !passable(current) {
                continue;
            }
            for &next in &self.edges[current] {
                if seen.insert(next) {
                    queue.push_back(next);
                }
            }
        }
        seen
    }

    /// Greedy partition of container nodes into sets that may share a host
    fn availability_sets(&self) -> usize {
        let mut sets: Vec<Vec<&str>> = Vec::new();
        for node in self.nodes.iter().filter(|n| n.label != PUBLIC_INTERNET_LABEL) {
            let label = node.label.as_str();
            let slot = sets.iter_mut().find(|set| {
                set.iter().all(|other| {
                    !self
                        .exclusive_pairs
                        .contains(&(label.to_string(), other.to_string()))
                })
            });
            match slot {
                Some(set) => set.push(label),
                None => sets.push(vec![label]),
            }
        }
        sets.len()
    }

    /// Evaluate one assertion
    pub fn holds(&self, assertion: &Assertion) -> bool {
        let endpoints = |i: usize| {
            assertion
                .nodes
                .get(i)
                .map(|label| self.nodes_labeled(label))
                .unwrap_or_default()
        };

        match assertion.form {
            InvariantForm::Reach | InvariantForm::ReachAcl => {
                let respect_acl = assertion.form == InvariantForm::ReachAcl;
                let targets = endpoints(1);
                endpoints(0).into_iter().all(|from| {
                    let reachable = self.reachable(from, respect_acl);
                    targets
                        .iter()
                        .all(|to| reachable.contains(to) == assertion.target)
                })
            }
            InvariantForm::ReachDirect => {
                let targets = endpoints(1);
                endpoints(0).into_iter().all(|from| {
                    targets
                        .iter()
                        .all(|to| self.edges[from].contains(to) == assertion.target)
                })
            }
            InvariantForm::Between => {
                let targets = endpoints(1);
                let via: HashSet<usize> = endpoints(2).into_iter().collect();
                endpoints(0).into_iter().all(|from| {
                    targets
                        .iter()
                        .all(|&to| self.between_holds(from, to, &via, assertion.target))
                })
            }
            InvariantForm::Enough => {
                (self.schedulable_machines >= self.availability_sets()) == assertion.target
            }
        }
    }

    /// Whether paths from `from` to `to` cross `via`
    ///
    /// With `target`, every path must cross a via node. Without it, no via
    /// node may sit between a route out of `from` and a route into `to`.
    /// No path at all yields `!target`.
    fn between_holds(&self, from: usize, to: usize, via: &HashSet<usize>, target: bool) -> bool {
        if !self.reachable(from, false).contains(&to) {
            return !target;
        }
        if via.contains(&from) || via.contains(&to) {
            return target;
        }
        if target {
            !self
                .reachable_through(from, |node| !via.contains(&node))
                .contains(&to)
        } else {
            !via.iter().any(|&node| {
                self.reachable_through(from, |n| n != to).contains(&node)
                    && self.reachable_through(node, |n| n != from).contains(&to)
            })
        }
    }
}

/// Check every assertion in `document`, failing on the first that
/// does not hold
pub fn check_invariants(document: &Document) -> BlueprintResult<()> {
    if document.invariants.is_empty() {
        return Ok(());
    }

    let graph = TopologyGraph::from_document(document);
    for assertion in &document.invariants {
        if !graph.holds(assertion) {
            return Err(BlueprintError::InvariantFailed {
                invariant: assertion.to_string(),
            });
        }
    }

    tracing::debug!(count = document.invariants.len(), "invariants hold");
    Ok(())
}
