use std::collections::HashMap;

/// A single dependency, identified by its module path and version.
///
/// Two values with the same `(path, version)` are the same module.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Module {
    pub path: String,
    pub version: String,
}

impl Module {
    pub fn new(path: impl Into<String>, version: impl Into<String>) -> Self {
        Module {
            path: path.into(),
            version: version.into(),
        }
    }
}

impl std::fmt::Display for Module {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}@{}", self.path, self.version)
    }
}

/// A resolved license. Either field may be empty; both empty means the
/// lookup ran but identified nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct License {
    pub spdx: String,
    pub name: String,
}

impl License {
    pub fn new(spdx: impl Into<String>, name: impl Into<String>) -> Self {
        License {
            spdx: spdx.into(),
            name: name.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.spdx.is_empty() && self.name.is_empty()
    }
}

/// What a worker reported for a module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    License(License),
    /// The lookup failed. The cause is logged by the worker, not stored.
    LookupError,
    /// Resolution started but no terminal outcome was ever reported.
    Pending,
}

/// Point-in-time copy of every module's outcome.
pub type Snapshot = HashMap<Module, Outcome>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ecosystem {
    Go,
    Rust,
}

impl Ecosystem {
    /// System name used by the deps.dev API.
    pub fn system(&self) -> &'static str {
        match self {
            Ecosystem::Go => "go",
            Ecosystem::Rust => "cargo",
        }
    }
}

impl std::fmt::Display for Ecosystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Ecosystem::Go => write!(f, "Go"),
            Ecosystem::Rust => write!(f, "Rust"),
        }
    }
}
