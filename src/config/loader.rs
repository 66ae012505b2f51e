//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{BlueprintError, BlueprintResult};

use super::types::Config;
use super::ConfigWarning;

/// Project config file name, looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = "blueprint.toml";

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> BlueprintResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;
    parse_with_warnings(&content, path)
}

pub(super) fn parse_with_warnings(
    content: &str,
    path: &Path,
) -> BlueprintResult<(Config, Vec<ConfigWarning>)> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| BlueprintError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                line: find_line_number(content, &key),
                suggestion: suggest_key(&key),
                file: path.to_path_buf(),
                key,
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from an explicit config, `./blueprint.toml`, the user config, or defaults
///
/// An explicit path must exist; the implicit locations are skipped when
/// absent. Environment overrides are applied last.
pub fn load_or_default(explicit: Option<&Path>) -> BlueprintResult<(Config, Vec<ConfigWarning>)> {
    if let Some(path) = explicit {
        let (config, warnings) = load_with_warnings(path)?;
        return Ok((with_env_overrides(config), warnings));
    }

    let candidates = [
        Some(PathBuf::from(PROJECT_CONFIG_FILE)),
        user_config_path(),
    ];
    for path in candidates.into_iter().flatten() {
        if path.is_file() {
            tracing::debug!(path = %path.display(), "loading config");
            let (config, warnings) = load_with_warnings(&path)?;
            return Ok((with_env_overrides(config), warnings));
        }
    }

    Ok((with_env_overrides(Config::default()), Vec::new()))
}

/// `<config_dir>/blueprint/config.toml`
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("blueprint").join("config.toml"))
}

/// Apply environment variable overrides (BLUEPRINT_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_overrides(config, |name| std::env::var(name).ok())
}

pub(super) fn apply_overrides(
    mut config: Config,
    lookup: impl Fn(&str) -> Option<String>,
) -> Config {
    if let Some(namespace) = lookup("BLUEPRINT_NAMESPACE") {
        config.deployment.namespace = namespace;
    }

    if let Some(price) = lookup("BLUEPRINT_MAX_PRICE") {
        match price.trim().parse() {
            Ok(price) => config.deployment.max_price = price,
            Err(_) => tracing::warn!(value = %price, "ignoring invalid BLUEPRINT_MAX_PRICE"),
        }
    }

    if let Some(endpoint) = lookup("BLUEPRINT_KEYS_ENDPOINT") {
        config.keys.endpoint = endpoint;
    }

    if let Some(timeout) = lookup("BLUEPRINT_KEYS_TIMEOUT_SECS") {
        match timeout.trim().parse() {
            Ok(secs) => config.keys.timeout_secs = secs,
            Err(_) => {
                tracing::warn!(value = %timeout, "ignoring invalid BLUEPRINT_KEYS_TIMEOUT_SECS")
            }
        }
    }

    if let Some(pretty) = lookup("BLUEPRINT_OUTPUT_PRETTY") {
        config.output.pretty = pretty.to_lowercase() != "false" && pretty != "0";
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "deployment",
        "namespace",
        "admin_acl",
        "max_price",
        "keys",
        "endpoint",
        "timeout_secs",
        "output",
        "pretty",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            Some((_, best_dist)) if dist >= best_dist => best,
            _ => Some((candidate, dist)),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let b_bytes = b.as_bytes();
    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a.as_bytes().iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
