//! In-memory split store for tests and store-less runs.

use std::sync::Mutex;

use crate::error::{Result, SeverError};

use super::record::SplitRecord;
use super::SplitStore;

/// Store keeping records in memory only.
pub struct MemoryStore {
    records: Mutex<Vec<SplitRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SplitStore for MemoryStore {
    fn add(&self, record: SplitRecord) -> Result<()> {
        let mut records = self
            .records
            .lock()
            .map_err(|_| SeverError::Persistence("store lock poisoned".to_string()))?;
        records.push(record);
        Ok(())
    }

    fn get(&self) -> Result<Vec<SplitRecord>> {
        let records = self
            .records
            .lock()
            .map_err(|_| SeverError::Persistence("store lock poisoned".to_string()))?;
        Ok(records.clone())
    }
}
