//! Image entity - a container image, optionally built from a Dockerfile

use serde::{Deserialize, Serialize};

/// A Docker image that containers run
///
/// When `dockerfile` is set the orchestrator builds and hosts the image
/// itself. Images are immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Image {
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    dockerfile: Option<String>,
}

impl Image {
    /// Image pulled from a registry
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            dockerfile: None,
        }
    }

    /// Image built from Dockerfile source
    pub fn with_dockerfile(name: impl Into<String>, dockerfile: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            dockerfile: Some(dockerfile.into()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn dockerfile(&self) -> Option<&str> {
        self.dockerfile.as_deref()
    }
}

impl From<&str> for Image {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Image {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

impl From<&Image> for Image {
    fn from(image: &Image) -> Self {
        image.clone()
    }
}
