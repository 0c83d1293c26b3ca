//! Lenient loading of the static JSON data files.
//!
//! Nothing here fails: a missing or malformed file is logged and read as
//! an empty collection.

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use ekz_core::Record;
use serde_json::Value;

/// Field the vendor-scoped files are grouped on.
pub const VENDOR_KEY: &str = "vendor_id";

/// Records partitioned by the integer value of a key field. Records
/// without a usable key land under `None`.
pub type GroupedRecords = HashMap<Option<i64>, Vec<Record>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    Loaded,
    Missing,
    Unreadable,
    Malformed,
}

impl fmt::Display for LoadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LoadStatus::Loaded => "loaded",
            LoadStatus::Missing => "missing",
            LoadStatus::Unreadable => "unreadable",
            LoadStatus::Malformed => "malformed",
        };
        f.write_str(s)
    }
}

#[derive(Debug)]
pub struct LoadOutcome {
    pub status: LoadStatus,
    pub records: Vec<Record>,
}

impl LoadOutcome {
    fn empty(status: LoadStatus) -> Self {
        Self {
            status,
            records: Vec::new(),
        }
    }
}

/// Reads a JSON array of objects from `path`, returning an empty list on
/// any failure.
pub fn load_data(path: impl AsRef<Path>) -> Vec<Record> {
    read_records(path).records
}

/// Like [`load_data`], grouped by the integer value of `key`.
pub fn load_grouped_data(path: impl AsRef<Path>, key: &str) -> GroupedRecords {
    group_records(load_data(path), key)
}

/// Reads `path` and reports how the read went alongside the records.
pub fn read_records(path: impl AsRef<Path>) -> LoadOutcome {
    let path = path.as_ref();

    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::error!(path = %path.display(), "Data file not found");
            return LoadOutcome::empty(LoadStatus::Missing);
        }
        Err(e) => {
            tracing::error!(path = %path.display(), error = %e, "Data file could not be read");
            return LoadOutcome::empty(LoadStatus::Unreadable);
        }
    };

    let items = match serde_json::from_str::<Value>(&contents) {
        Ok(Value::Array(items)) => items,
        Ok(_) => {
            tracing::error!(path = %path.display(), "Data file is not a JSON array");
            return LoadOutcome::empty(LoadStatus::Malformed);
        }
        Err(e) => {
            tracing::error!(path = %path.display(), error = %e, "Data file is not valid JSON");
            return LoadOutcome::empty(LoadStatus::Malformed);
        }
    };

    let mut records = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        match item {
            Value::Object(record) => records.push(record),
            _ => tracing::warn!(path = %path.display(), index, "Skipping non-object element"),
        }
    }

    LoadOutcome {
        status: LoadStatus::Loaded,
        records,
    }
}

/// Partitions `records` by `key`, preserving order within each group.
pub fn group_records(records: Vec<Record>, key: &str) -> GroupedRecords {
    let mut grouped: GroupedRecords = HashMap::new();
    for record in records {
        let group = record.get(key).and_then(Value::as_i64);
        grouped.entry(group).or_default().push(record);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_loads_array_of_objects() {
        let file = write_file(
            r#"[{"vendor_id": 1, "name": "Evergreen"}, {"vendor_id": 2, "name": "Northwind"}]"#,
        );
        let records = load_data(file.path());

        assert_eq!(records.len(), 2);
        assert_eq!(records[1]["name"], "Northwind");
    }

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let outcome = read_records(dir.path().join("nope.json"));

        assert_eq!(outcome.status, LoadStatus::Missing);
        assert!(outcome.records.is_empty());
    }

    #[test]
    fn test_malformed_json_is_empty() {
        let file = write_file("[{\"vendor_id\": 1,");
        let outcome = read_records(file.path());

        assert_eq!(outcome.status, LoadStatus::Malformed);
        assert!(outcome.records.is_empty());
    }

    #[test]
    fn test_non_array_document_is_malformed() {
        let file = write_file(r#"{"vendor_id": 1}"#);
        assert_eq!(read_records(file.path()).status, LoadStatus::Malformed);
    }

    #[test]
    fn test_non_object_elements_are_skipped() {
        let file = write_file(r#"[1, {"vendor_id": 3}, "x"]"#);
        let outcome = read_records(file.path());

        assert_eq!(outcome.status, LoadStatus::Loaded);
        assert_eq!(outcome.records.len(), 1);
    }

    #[test]
    fn test_grouping_preserves_order_and_keeps_keyless_records() {
        let file = write_file(
            r#"[
                {"vendor_id": 2, "name": "a"},
                {"vendor_id": 1, "name": "b"},
                {"vendor_id": 2, "name": "c"},
                {"name": "orphan"},
                {"vendor_id": null, "name": "null-key"}
            ]"#,
        );
        let grouped = load_grouped_data(file.path(), VENDOR_KEY);

        let names = |key: Option<i64>| -> Vec<String> {
            grouped[&key]
                .iter()
                .map(|r| r["name"].as_str().unwrap().to_string())
                .collect()
        };
        assert_eq!(names(Some(2)), vec!["a", "c"]);
        assert_eq!(names(Some(1)), vec!["b"]);
        assert_eq!(names(None), vec!["orphan", "null-key"]);
    }

    #[test]
    fn test_grouping_on_custom_key() {
        let file = write_file(r#"[{"brand_id": 5}, {"brand_id": 5}, {"brand_id": 6}]"#);
        let grouped = load_grouped_data(file.path(), "brand_id");

        assert_eq!(grouped[&Some(5)].len(), 2);
        assert_eq!(grouped[&Some(6)].len(), 1);
    }

    #[test]
    fn test_grouping_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_grouped_data(dir.path().join("absent.json"), VENDOR_KEY).is_empty());
    }
}
