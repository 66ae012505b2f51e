//! Document summaries shown by `check` and `inspect`

use serde::Serialize;

use crate::domain::entities::{Document, MASTER_ROLE};

/// Per-label container count
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabelSummary {
    pub name: String,
    pub containers: usize,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<String>,
}

/// Counts describing a compiled document
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentSummary {
    pub namespace: String,
    pub machines: usize,
    pub masters: usize,
    pub workers: usize,
    pub labels: Vec<LabelSummary>,
    pub containers: usize,
    pub connections: usize,
    pub placements: usize,
    pub invariants: usize,
    pub max_price: f64,
}

impl From<&Document> for DocumentSummary {
    fn from(document: &Document) -> Self {
        let masters = document
            .machines
            .iter()
            .filter(|m| m.role == MASTER_ROLE)
            .count();

        Self {
            namespace: document.namespace.clone(),
            machines: document.machines.len(),
            masters,
            workers: document.machines.len() - masters,
            labels: document
                .labels
                .iter()
                .map(|l| LabelSummary {
                    name: l.name.clone(),
                    containers: l.ids.len(),
                    annotations: l.annotations.clone(),
                })
                .collect(),
            containers: document.containers.len(),
            connections: document.connections.len(),
            placements: document.placements.len(),
            invariants: document.invariants.len(),
            max_price: document.max_price,
        }
    }
}
