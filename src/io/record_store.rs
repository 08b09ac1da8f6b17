//! Typed read/append/rewrite over a storage backend
//!
//! `RecordStore` joins a [`RecordStorage`] backend with the line format from
//! `record_format`. It holds no state of its own: every call goes back to the
//! backend, so reads always reflect what is currently stored.

use crate::io::record_format::{format_records, parse_records, Record};
use crate::io::storage::RecordStorage;
use crate::types::PlantError;

/// Typed view over a storage backend
#[derive(Clone, Copy)]
pub struct RecordStore<'a> {
    storage: &'a dyn RecordStorage,
}

impl<'a> RecordStore<'a> {
    pub fn new(storage: &'a dyn RecordStorage) -> Self {
        RecordStore { storage }
    }

    /// Read every well-formed record of a kind
    ///
    /// A collection that was never written reads as empty.
    pub fn read_all<R: Record>(&self) -> Result<Vec<R>, PlantError> {
        Ok(self
            .storage
            .load(R::COLLECTION)?
            .map(|bytes| parse_records(&bytes))
            .unwrap_or_default())
    }

    /// Append one record as a new line
    pub fn append<R: Record>(&self, record: &R) -> Result<(), PlantError> {
        let line = format_records(std::slice::from_ref(record))?;
        self.storage.append(R::COLLECTION, &line)
    }

    /// Replace a collection with exactly `records`
    pub fn rewrite<R: Record>(&self, records: &[R]) -> Result<(), PlantError> {
        let contents = format_records(records)?;
        self.storage.replace(R::COLLECTION, &contents)
    }
}
