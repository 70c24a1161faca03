//! # Seed Loading
//!
//! Reads the initial record set from a JSON file at startup and
//! deduplicates it by id before it becomes the store contents.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::application::Application;

/// Seed loading failures. Any of these aborts startup.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read seed file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse seed file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Load seed records from a JSON array file.
///
/// Duplicate ids are collapsed: the last occurrence wins, at the position
/// where the id first appeared.
pub fn load(path: &Path) -> Result<Vec<Application>, SeedError> {
    let raw = fs::read_to_string(path).map_err(|source| SeedError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let records: Vec<Application> =
        serde_json::from_str(&raw).map_err(|source| SeedError::Parse {
            path: path.display().to_string(),
            source,
        })?;

    Ok(dedup_by_id(records))
}

fn dedup_by_id(records: Vec<Application>) -> Vec<Application> {
    let mut out: Vec<Application> = Vec::with_capacity(records.len());

    for record in records {
        match out.iter().position(|existing| existing.id == record.id) {
            Some(index) => out[index] = record,
            None => out.push(record),
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::Status;
    use std::io::Write;

    fn seed_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_parses_records() {
        let file = seed_file(
            r#"[
                {"id": "1", "name": "Solar Install", "description": "Install panels", "status": "approved"},
                {"id": "2", "name": "Roof Audit", "description": "Inspect roof", "status": "in_review"}
            ]"#,
        );

        let records = load(file.path()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "Solar Install");
        assert_eq!(records[1].status, Status::InReview);
    }

    #[test]
    fn test_duplicate_ids_last_occurrence_wins() {
        let file = seed_file(
            r#"[
                {"id": "1", "name": "First", "description": "d", "status": "in_review"},
                {"id": "2", "name": "Other", "description": "d", "status": "approved"},
                {"id": "1", "name": "Second", "description": "d", "status": "rejected"}
            ]"#,
        );

        let records = load(file.path()).unwrap();
        assert_eq!(records.len(), 2);
        // Position of the first occurrence, value of the last.
        assert_eq!(records[0].id, "1");
        assert_eq!(records[0].name, "Second");
        assert_eq!(records[0].status, Status::Rejected);
        assert_eq!(records[1].id, "2");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load(Path::new("/nonexistent/seed.json")).unwrap_err();
        assert!(matches!(err, SeedError::Io { .. }));
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        let file = seed_file("not json");
        let err = load(file.path()).unwrap_err();
        assert!(matches!(err, SeedError::Parse { .. }));
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        let file = seed_file(
            r#"[{"id": "1", "name": "X", "description": "d", "status": "pending"}]"#,
        );
        assert!(matches!(load(file.path()), Err(SeedError::Parse { .. })));
    }
}
