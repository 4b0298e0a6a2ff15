use std::path::Path;

use crate::models::Ecosystem;

/// Auto-detect supported ecosystems by scanning for known manifest files.
pub fn detect_ecosystems(path: &Path) -> Vec<Ecosystem> {
    let mut ecosystems = Vec::new();

    if path.join("go.mod").exists() {
        ecosystems.push(Ecosystem::Go);
    }

    if path.join("Cargo.toml").exists() || path.join("Cargo.lock").exists() {
        ecosystems.push(Ecosystem::Rust);
    }

    ecosystems
}
