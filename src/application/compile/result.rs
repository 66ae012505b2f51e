//! Compile Result

use crate::application::summary::DocumentSummary;
use crate::domain::entities::Document;

/// A compiled document together with its summary
#[derive(Debug, Clone)]
pub struct CompileResult {
    pub document: Document,
    pub summary: DocumentSummary,
}

impl CompileResult {
    pub fn new(document: Document) -> Self {
        let summary = DocumentSummary::from(&document);
        Self { document, summary }
    }

    /// True when the document carries assertions (all of which held)
    pub fn has_invariants(&self) -> bool {
        !self.document.invariants.is_empty()
    }
}
