//! Configuration module for blueprint
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (BLUEPRINT_*)
//! 3. `--config <FILE>` or `./blueprint.toml`
//! 4. User config (`<config_dir>/blueprint/config.toml`)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use crate::domain::value_objects::ConfigWarning;

pub use loader::{user_config_path, PROJECT_CONFIG_FILE};
pub use types::{
    Config, DeploymentConfig, KeysConfig, OutputConfig, DEFAULT_KEYS_ENDPOINT,
    DEFAULT_KEYS_TIMEOUT_SECS,
};
