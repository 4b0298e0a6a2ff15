use std::collections::BTreeSet;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::models::Module;

#[derive(Debug, Deserialize)]
struct CargoLock {
    #[serde(default)]
    package: Vec<CargoLockPackage>,
}

#[derive(Debug, Deserialize)]
struct CargoLockPackage {
    name: String,
    version: String,
    /// Packages without a `source` field are local workspace members.
    source: Option<String>,
}

pub struct RustAnalyzer;

impl RustAnalyzer {
    pub fn new() -> Self {
        Self
    }
}

impl super::Analyzer for RustAnalyzer {
    fn analyze(&self, path: &Path) -> Result<Vec<Module>> {
        let lock_path = path.join("Cargo.lock");
        if !lock_path.exists() {
            return Ok(Vec::new());
        }

        let content = std::fs::read_to_string(&lock_path)
            .with_context(|| format!("failed to read {}", lock_path.display()))?;
        parse_cargo_lock(&content)
            .with_context(|| format!("failed to parse {}", lock_path.display()))
    }
}

fn parse_cargo_lock(content: &str) -> Result<Vec<Module>> {
    let lock: CargoLock = toml::from_str(content)?;

    let modules: BTreeSet<Module> = lock
        .package
        .into_iter()
        .filter(|p| p.source.is_some())
        .map(|p| Module::new(p.name, p.version))
        .collect();

    Ok(modules.into_iter().collect())
}
