//! Configuration type definitions

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::entities::{DeploymentOptions, DEFAULT_NAMESPACE};
use crate::error::BlueprintResult;

use super::loader;
use super::ConfigWarning;

/// Default public-key endpoint (`<endpoint>/<user>.keys`)
pub const DEFAULT_KEYS_ENDPOINT: &str = "https://github.com";

/// Default key request timeout in seconds
pub const DEFAULT_KEYS_TIMEOUT_SECS: u64 = 10;

/// Deployment-wide defaults applied when a manifest leaves them out
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeploymentConfig {
    #[serde(default = "default_namespace")]
    pub namespace: String,

    #[serde(default)]
    pub admin_acl: Vec<String>,

    #[serde(default)]
    pub max_price: f64,
}

impl Default for DeploymentConfig {
    fn default() -> Self {
        Self {
            namespace: default_namespace(),
            admin_acl: Vec::new(),
            max_price: 0.0,
        }
    }
}

fn default_namespace() -> String {
    DEFAULT_NAMESPACE.to_string()
}

impl From<&DeploymentConfig> for DeploymentOptions {
    fn from(config: &DeploymentConfig) -> Self {
        Self {
            namespace: config.namespace.clone(),
            admin_acl: config.admin_acl.clone(),
            max_price: config.max_price,
        }
    }
}

/// Key retrieval configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeysConfig {
    #[serde(default = "default_keys_endpoint")]
    pub endpoint: String,

    #[serde(default = "default_keys_timeout")]
    pub timeout_secs: u64,
}

impl Default for KeysConfig {
    fn default() -> Self {
        Self {
            endpoint: default_keys_endpoint(),
            timeout_secs: default_keys_timeout(),
        }
    }
}

fn default_keys_endpoint() -> String {
    DEFAULT_KEYS_ENDPOINT.to_string()
}

fn default_keys_timeout() -> u64 {
    DEFAULT_KEYS_TIMEOUT_SECS
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Pretty-print compiled documents
    #[serde(default = "default_true")]
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { pretty: true }
    }
}

fn default_true() -> bool {
    true
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub deployment: DeploymentConfig,

    #[serde(default)]
    pub keys: KeysConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> BlueprintResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> BlueprintResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from an explicit file, the working directory, user config, or defaults
    pub fn load_or_default(explicit: Option<&Path>) -> BlueprintResult<(Self, Vec<ConfigWarning>)> {
        loader::load_or_default(explicit)
    }

    /// Apply environment variable overrides (BLUEPRINT_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Deployment options seeded from `[deployment]`
    pub fn deployment_options(&self) -> DeploymentOptions {
        DeploymentOptions::from(&self.deployment)
    }
}
