//! JSON-file split store.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use crate::error::{Result, SeverError};

use super::record::SplitRecord;
use super::SplitStore;

/// Store keeping all records in a single pretty-printed JSON file.
///
/// Every `add` is a read-modify-write of the whole file; fine for the
/// interactive volumes this tool sees.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store backed by `path`. The file is created on first add.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    fn load(&self) -> Result<Vec<SplitRecord>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.path).map_err(|e| {
            SeverError::Persistence(format!(
                "failed to open file '{}': {}",
                self.path.display(),
                e
            ))
        })?;

        let reader = BufReader::new(file);
        serde_json::from_reader(reader).map_err(|e| {
            SeverError::Persistence(format!(
                "failed to parse store '{}': {}",
                self.path.display(),
                e
            ))
        })
    }

    fn save(&self, records: &[SplitRecord]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| {
                    SeverError::Persistence(format!(
                        "failed to create directory '{}': {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
        }

        let file = File::create(&self.path).map_err(|e| {
            SeverError::Persistence(format!(
                "failed to create file '{}': {}",
                self.path.display(),
                e
            ))
        })?;

        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, records).map_err(|e| {
            SeverError::Persistence(format!("failed to serialize store: {}", e))
        })
    }
}

impl SplitStore for JsonFileStore {
    fn add(&self, record: SplitRecord) -> Result<()> {
        let mut records = self.load()?;
        records.push(record);
        self.save(&records)
    }

    fn get(&self) -> Result<Vec<SplitRecord>> {
        self.load()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_is_empty_store() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("splits.json"));
        assert!(store.get().unwrap().is_empty());
    }

    #[test]
    fn test_add_then_get_round_trip() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("splits.json"));

        store
            .add(SplitRecord::new("//a_0", "<x/>", "<a>1</a>", "//a"))
            .unwrap();
        store
            .add(SplitRecord::new("//a_1", "<y/>", "<a>2</a>", "//a"))
            .unwrap();

        let records = store.get().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, "//a_0");
        assert_eq!(records[1].id, "//a_1");
    }

    #[test]
    fn test_parent_directory_created() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("nested/deep/splits.json"));
        store
            .add(SplitRecord::new("id", "<x/>", "<a/>", "//a"))
            .unwrap();
        assert_eq!(store.get().unwrap().len(), 1);
    }

    #[test]
    fn test_corrupt_file_is_persistence_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("splits.json");
        std::fs::write(&path, "not json at all").unwrap();
        let store = JsonFileStore::new(&path);
        assert!(matches!(
            store.get(),
            Err(SeverError::Persistence(_))
        ));
    }
}
