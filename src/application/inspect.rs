//! Inspect Use Case
//!
//! Reads a compiled document back and summarises it.

use std::fs;
use std::path::Path;

use crate::domain::entities::Document;
use crate::error::{BlueprintError, BlueprintResult};

use super::summary::DocumentSummary;

/// A parsed document and its summary
#[derive(Debug, Clone)]
pub struct InspectResult {
    pub document: Document,
    pub summary: DocumentSummary,
}

/// Parse the compiled document at `path`
pub fn inspect_document(path: &Path) -> BlueprintResult<InspectResult> {
    let content = fs::read_to_string(path)?;
    let document = Document::from_json(&content).map_err(|e| BlueprintError::InvalidManifest {
        file: path.to_path_buf(),
        message: format!("not a compiled document: {e}"),
    })?;
    let summary = DocumentSummary::from(&document);
    Ok(InspectResult { document, summary })
}
