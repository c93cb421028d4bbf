//! In-memory record store with insertion-order iteration.

use std::collections::HashSet;

use crate::error::SawError;

use super::types::Record;

/// Session-local store of validated records.
///
/// Names are case-sensitive unique keys. The store is append-oriented: a
/// session adds records one at a time and occasionally removes a batch by
/// name. Lookup volume is small (per-keystroke user interaction), so a plain
/// vector with linear duplicate checks is deliberate.
#[derive(Debug, Clone, Default)]
pub struct DatasetStore {
    records: Vec<Record>,
}

impl DatasetStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a record, rejecting duplicates by name.
    pub fn add(&mut self, record: Record) -> Result<(), SawError> {
        if self.records.iter().any(|r| r.name == record.name) {
            return Err(SawError::DuplicateKey { name: record.name });
        }
        self.records.push(record);
        Ok(())
    }

    /// Removes every record whose name appears in `names`.
    ///
    /// Removing a name that is not present is a no-op, not an error.
    pub fn remove(&mut self, names: &HashSet<String>) {
        self.records.retain(|r| !names.contains(&r.name));
    }

    /// Returns a restartable iterator over records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    /// Returns the records as a slice, in insertion order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Returns the number of stored records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` when the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
