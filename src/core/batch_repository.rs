//! Batch repository
//!
//! This module provides the `BatchRepository`, the only component that
//! creates or changes bean batches.
//!
//! The repository is responsible for:
//! - Looking batches up by ID (linear scan, first match wins)
//! - Adding new batches after validation and a duplicate check
//! - Updating a batch's status by rewriting the whole inventory
//! - Recording each successful mutation in the operations log
//!
//! No index or cache is kept: every call re-reads the inventory.

use crate::core::operations_log::OperationsLog;
use crate::io::RecordStore;
use crate::types::batch::storable_text;
use crate::types::{Batch, BatchDraft, PlantError};
use tracing::{info, warn};

/// Operations over the batch inventory
#[derive(Clone, Copy)]
pub struct BatchRepository<'a> {
    store: RecordStore<'a>,
    journal: OperationsLog<'a>,
}

impl<'a> BatchRepository<'a> {
    pub fn new(store: RecordStore<'a>, journal: OperationsLog<'a>) -> Self {
        BatchRepository { store, journal }
    }

    /// Every batch in the inventory, in file order
    pub fn all(&self) -> Result<Vec<Batch>, PlantError> {
        self.store.read_all()
    }

    /// Find a batch by ID
    ///
    /// Surrounding whitespace in `batch_id` is ignored, as it is for stored IDs.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(Batch))` - The first batch with this ID
    /// * `Ok(None)` - No such batch, or no inventory at all
    pub fn find_by_id(&self, batch_id: &str) -> Result<Option<Batch>, PlantError> {
        let batch_id = batch_id.trim();
        Ok(self
            .all()?
            .into_iter()
            .find(|batch| batch.batch_id == batch_id))
    }

    /// Add a new batch to the inventory
    ///
    /// Validates the draft, rejects duplicate IDs, appends the batch and logs
    /// an `add_batch` operation. Nothing is written when validation fails.
    ///
    /// # Errors
    ///
    /// - `MissingField` / `InvalidField` if the draft is incomplete or unstorable
    /// - `DuplicateBatch` if the ID is already in the inventory
    /// - `IoError` if the inventory cannot be read or written
    pub fn add_batch(&self, draft: BatchDraft) -> Result<Batch, PlantError> {
        let batch = draft.validate()?;

        if self.find_by_id(&batch.batch_id)?.is_some() {
            return Err(PlantError::duplicate_batch(&batch.batch_id));
        }

        self.store.append(&batch)?;
        info!(batch_id = %batch.batch_id, "batch added");

        self.journal_operation("add_batch", &format!("Added batch {}", batch.batch_id));
        Ok(batch)
    }

    /// Set the status of an existing batch
    ///
    /// Reads the full inventory, changes `status` on the first batch with this
    /// ID and writes the whole inventory back. No other field changes.
    ///
    /// # Returns
    ///
    /// The batch as stored after the update.
    ///
    /// # Errors
    ///
    /// - `MissingField` / `InvalidField` if the new status is blank or unstorable
    /// - `BatchNotFound` if no batch has this ID
    /// - `IoError` if the inventory cannot be read or written
    pub fn update_status(&self, batch_id: &str, new_status: &str) -> Result<Batch, PlantError> {
        let batch_id = batch_id.trim();
        let new_status = new_status.trim();
        if new_status.is_empty() {
            return Err(PlantError::missing_field("status"));
        }
        storable_text("status", new_status)?;

        let mut inventory = self.all()?;
        let batch = inventory
            .iter_mut()
            .find(|batch| batch.batch_id == batch_id)
            .ok_or_else(|| PlantError::batch_not_found(batch_id))?;
        batch.status = new_status.to_string();
        let updated = batch.clone();

        self.store.rewrite(&inventory)?;
        info!(batch_id, status = new_status, "batch status updated");

        self.journal_operation(
            "update_status",
            &format!("Updated batch {} status to {}", batch_id, new_status),
        );
        Ok(updated)
    }

    /// Log a completed mutation
    ///
    /// The mutation is already persisted, so a failed log write is reported as
    /// a warning instead of failing the operation.
    fn journal_operation(&self, operation: &str, details: &str) {
        if let Err(e) = self.journal.log_operation(operation, details) {
            warn!(operation, error = %e, "failed to write operations log entry");
        }
    }
}
