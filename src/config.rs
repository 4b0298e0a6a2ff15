use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Root configuration structure, deserialized from `.license-csv/config.toml`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub output: OutputConfig,
    pub resolve: ResolveConfig,
    /// License overrides keyed by module path. Values are SPDX identifiers
    /// (common spellings like `"MIT License"` are normalized).
    pub overrides: HashMap<String, String>,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Where the CSV report is written. Overwritten if it exists.
    pub path: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            path: PathBuf::from("license-report.csv"),
        }
    }
}

/// Settings for the registry lookups.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ResolveConfig {
    /// Base URL of a deps.dev-compatible API.
    pub registry: String,
    /// Number of lookups in flight at once.
    pub batch_size: usize,
    pub timeout_secs: u64,
}

impl Default for ResolveConfig {
    fn default() -> Self {
        ResolveConfig {
            registry: "https://api.deps.dev".to_string(),
            batch_size: 75,
            timeout_secs: 10,
        }
    }
}

/// Load the configuration, searching in order:
///
/// 1. `config_override` — path passed via `--config`
/// 2. `<project_path>/.license-csv/config.toml`
/// 3. `~/.config/license-csv/config.toml`
/// 4. Built-in [`Config::default`]
pub fn load_config(project_path: &Path, config_override: Option<&Path>) -> Result<Config> {
    if let Some(path) = config_override {
        return read_config(path);
    }

    let project_config = project_path.join(".license-csv").join("config.toml");
    if project_config.exists() {
        return read_config(&project_config);
    }

    if let Some(home) = dirs::home_dir() {
        let home_config = home.join(".config").join("license-csv").join("config.toml");
        if home_config.exists() {
            return read_config(&home_config);
        }
    }

    Ok(Config::default())
}

fn read_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    let config: Config = toml::from_str(&content)
        .with_context(|| format!("failed to parse config: {}", path.display()))?;
    log::debug!("loaded config from {}", path.display());
    Ok(config)
}
