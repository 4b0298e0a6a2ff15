use std::fs::File;
use std::path::Path;

use csv::WriterBuilder;

use super::{build, Record, ReportError};
use crate::models::Snapshot;

const HEADERS: [&str; 4] = ["Dependency", "Version", "SPDX", "License"];

/// Build records from `snapshot` and write them to `out_path`.
///
/// Classification happens before the file is touched, so a snapshot that
/// cannot be classified leaves no file behind.
pub fn render(snapshot: &Snapshot, out_path: &Path) -> Result<Vec<Record>, ReportError> {
    let records = build(snapshot)?;
    write(&records, out_path)?;
    Ok(records)
}

/// Write `records` as CSV, truncating any existing file at `out_path`.
pub fn write(records: &[Record], out_path: &Path) -> Result<(), ReportError> {
    let file = File::create(out_path).map_err(|source| ReportError::Create {
        path: out_path.to_path_buf(),
        source,
    })?;

    let mut w = WriterBuilder::new().has_headers(false).from_writer(file);

    w.write_record(HEADERS)
        .map_err(|source| ReportError::WriteHeader {
            path: out_path.to_path_buf(),
            source,
        })?;

    for r in records {
        w.write_record(r.to_row())
            .map_err(|source| ReportError::WriteRow {
                path: out_path.to_path_buf(),
                dependency: r.dependency.clone(),
                source,
            })?;
    }

    let flush_err = |source| ReportError::Flush {
        path: out_path.to_path_buf(),
        source,
    };
    w.flush().map_err(flush_err)?;
    let file = w.into_inner().map_err(|e| flush_err(e.into_error()))?;
    file.sync_all().map_err(flush_err)?;

    log::info!("wrote {} rows to {}", records.len(), out_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{License, Module, Outcome};

    fn scenario() -> Snapshot {
        let mut snap = Snapshot::new();
        snap.insert(
            Module::new("zlib", "1.2"),
            Outcome::License(License::new("MIT", "MIT License")),
        );
        snap.insert(Module::new("alpha", "0.1"), Outcome::LookupError);
        snap
    }

    #[test]
    fn test_render_scenario() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("report.csv");

        let records = render(&scenario(), &out).unwrap();
        assert_eq!(records.len(), 2);

        let content = std::fs::read_to_string(&out).unwrap();
        assert_eq!(
            content,
            "Dependency,Version,SPDX,License\n\
             alpha,0.1,NOT-FOUND,not found\n\
             zlib,1.2,MIT,MIT License\n"
        );
    }

    #[test]
    fn test_empty_snapshot_writes_header_only() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("report.csv");

        render(&Snapshot::new(), &out).unwrap();
        let content = std::fs::read_to_string(&out).unwrap();
        assert_eq!(content, "Dependency,Version,SPDX,License\n");
    }

    #[test]
    fn test_render_twice_is_identical() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("a.csv");
        let second = dir.path().join("b.csv");
        let snap = scenario();

        render(&snap, &first).unwrap();
        render(&snap, &second).unwrap();
        assert_eq!(std::fs::read(&first).unwrap(), std::fs::read(&second).unwrap());
    }

    #[test]
    fn test_existing_file_is_truncated() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("report.csv");
        std::fs::write(
            &out,
            "stale content that is much longer than the new report\n".repeat(10),
        )
        .unwrap();

        render(&Snapshot::new(), &out).unwrap();
        let content = std::fs::read_to_string(&out).unwrap();
        assert_eq!(content, "Dependency,Version,SPDX,License\n");
    }

    #[test]
    fn test_fields_are_quoted() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("report.csv");
        let records = vec![Record {
            dependency: "example.com/a,b".into(),
            version: "v1".into(),
            spdx: "X".into(),
            license: "The \"Best\"\nLicense".into(),
        }];

        write(&records, &out).unwrap();
        let content = std::fs::read_to_string(&out).unwrap();
        assert_eq!(
            content,
            "Dependency,Version,SPDX,License\n\
             \"example.com/a,b\",v1,X,\"The \"\"Best\"\"\nLicense\"\n"
        );
    }

    #[test]
    fn test_pending_outcome_writes_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("report.csv");
        let mut snap = scenario();
        snap.insert(Module::new("beta", "0.2"), Outcome::Pending);

        let err = render(&snap, &out).unwrap_err();
        assert!(matches!(err, ReportError::InvalidOutcomeKind { .. }));
        assert!(!out.exists());
    }

    #[test]
    fn test_create_failure_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("missing").join("report.csv");

        let err = render(&scenario(), &out).unwrap_err();
        match &err {
            ReportError::Create { path, .. } => assert_eq!(path, &out),
            other => panic!("expected Create, got {:?}", other),
        }
        assert!(err.to_string().contains("report.csv"));
    }
}
