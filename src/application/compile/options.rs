//! Compile Options

use crate::domain::entities::DeploymentOptions;

/// Options for the compile use case
#[derive(Debug, Clone, Default)]
pub struct CompileOptions {
    /// Policy defaults; the manifest's `[deployment]` section wins
    pub deployment: DeploymentOptions,
}

impl CompileOptions {
    pub fn new(deployment: DeploymentOptions) -> Self {
        Self { deployment }
    }
}
