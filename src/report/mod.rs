//! Turning collected outcomes into the CSV report.
//!
//! - [`build`] classifies every snapshot entry into a [`Record`] and orders them.
//! - [`csv`] writes those records to disk.

pub mod csv;

use std::path::PathBuf;

use thiserror::Error;

use crate::models::{Module, Outcome, Snapshot};

const NOT_FOUND_SPDX: &str = "NOT-FOUND";
/// License column for a failed lookup.
const LOOKUP_FAILED: &str = "not found";
/// License column for a lookup that ran but identified nothing.
const UNIDENTIFIED: &str = "not-found";

/// One row of the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub dependency: String,
    pub version: String,
    pub spdx: String,
    pub license: String,
}

impl Record {
    pub fn to_row(&self) -> [&str; 4] {
        [
            self.dependency.as_str(),
            self.version.as_str(),
            self.spdx.as_str(),
            self.license.as_str(),
        ]
    }
}

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("no terminal outcome was reported for {module}")]
    InvalidOutcomeKind { module: Module },

    #[error("failed to create file: {}", path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write headers to {}", path.display())]
    WriteHeader {
        path: PathBuf,
        #[source]
        source: ::csv::Error,
    },

    #[error("failed to write row for {dependency} to {}", path.display())]
    WriteRow {
        path: PathBuf,
        dependency: String,
        #[source]
        source: ::csv::Error,
    },

    #[error("failed to flush {}", path.display())]
    Flush {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Classify every entry in `snapshot` and sort by module path.
///
/// Each module yields exactly one record. A [`Outcome::Pending`] entry means a
/// worker never finished, and fails the whole build rather than being skipped.
pub fn build(snapshot: &Snapshot) -> Result<Vec<Record>, ReportError> {
    let mut modules: Vec<(&Module, &Outcome)> = snapshot.iter().collect();
    // Version only matters when one path appears at several versions.
    modules.sort_by(|a, b| {
        a.0.path
            .as_bytes()
            .cmp(b.0.path.as_bytes())
            .then_with(|| a.0.version.as_bytes().cmp(b.0.version.as_bytes()))
    });

    modules
        .into_iter()
        .map(|(module, outcome)| classify(module, outcome))
        .collect()
}

fn classify(module: &Module, outcome: &Outcome) -> Result<Record, ReportError> {
    let (spdx, license) = match outcome {
        Outcome::LookupError => (NOT_FOUND_SPDX.to_string(), LOOKUP_FAILED.to_string()),
        Outcome::License(l) if l.is_empty() => {
            (NOT_FOUND_SPDX.to_string(), UNIDENTIFIED.to_string())
        }
        Outcome::License(l) => (l.spdx.clone(), l.name.clone()),
        Outcome::Pending => {
            return Err(ReportError::InvalidOutcomeKind {
                module: module.clone(),
            });
        }
    };

    Ok(Record {
        dependency: module.path.clone(),
        version: module.version.clone(),
        spdx,
        license,
    })
}
