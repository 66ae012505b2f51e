//! Manifest loading

use std::fs;
use std::path::Path;

use crate::error::{BlueprintError, BlueprintResult};

use super::types::Manifest;

/// Serialization format of a manifest file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestFormat {
    Toml,
    Yaml,
    Json,
}

impl ManifestFormat {
    /// Pick a format from the file extension
    pub fn from_path(path: &Path) -> BlueprintResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("toml") => Ok(Self::Toml),
            Some("yaml" | "yml") => Ok(Self::Yaml),
            Some("json") => Ok(Self::Json),
            _ => Err(BlueprintError::InvalidManifest {
                file: path.to_path_buf(),
                message: "unsupported manifest format (expected .toml, .yaml, .yml or .json)"
                    .to_string(),
            }),
        }
    }
}

/// Read and parse a manifest file
pub fn load(path: &Path) -> BlueprintResult<Manifest> {
    let format = ManifestFormat::from_path(path)?;
    let content = fs::read_to_string(path)?;
    let manifest = parse(&content, format, path)?;
    tracing::debug!(
        path = %path.display(),
        machines = manifest.machines.len(),
        services = manifest.services.len(),
        "loaded manifest"
    );
    Ok(manifest)
}

/// Parse manifest text; `path` is only used in error messages
pub fn parse(content: &str, format: ManifestFormat, path: &Path) -> BlueprintResult<Manifest> {
    let invalid = |message: String| BlueprintError::InvalidManifest {
        file: path.to_path_buf(),
        message,
    };

    match format {
        ManifestFormat::Toml => toml::from_str(content).map_err(|e| invalid(e.to_string())),
        ManifestFormat::Yaml => {
            serde_yaml_ng::from_str(content).map_err(|e| invalid(e.to_string()))
        }
        ManifestFormat::Json => serde_json::from_str(content).map_err(|e| invalid(e.to_string())),
    }
}
