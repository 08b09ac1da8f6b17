//! Processing log
//!
//! Append-only record of completed processing stages. Recording a stage also
//! moves the batch to a status named after the stage.

use crate::core::batch_repository::BatchRepository;
use crate::core::operations_log::OperationsLog;
use crate::io::RecordStore;
use crate::types::{PlantError, ProcessingRecord, StageDraft, StageOutcome};
use tracing::warn;

#[derive(Clone, Copy)]
pub struct ProcessingLog<'a> {
    store: RecordStore<'a>,
    batches: BatchRepository<'a>,
    journal: OperationsLog<'a>,
}

impl<'a> ProcessingLog<'a> {
    pub fn new(
        store: RecordStore<'a>,
        batches: BatchRepository<'a>,
        journal: OperationsLog<'a>,
    ) -> Self {
        ProcessingLog {
            store,
            batches,
            journal,
        }
    }

    /// Every processing record, in file order
    pub fn all(&self) -> Result<Vec<ProcessingRecord>, PlantError> {
        self.store.read_all()
    }

    /// Record a completed processing stage
    ///
    /// Appends the record, then sets the batch status to the stage's process
    /// type and logs a `record_processing` operation. The batch is not required
    /// to exist: if the status update fails the record stays appended and the
    /// failure is reported in `StageOutcome::status_update`.
    ///
    /// # Errors
    ///
    /// - `MissingField` / `InvalidField` if the draft is incomplete or unstorable
    /// - `IoError` if the record cannot be appended
    pub fn record_stage(&self, draft: StageDraft) -> Result<StageOutcome, PlantError> {
        let record = draft.validate()?;
        self.store.append(&record)?;

        let status_update = self
            .batches
            .update_status(&record.batch_id, &record.process_type);
        if let Err(e) = &status_update {
            warn!(batch_id = %record.batch_id, error = %e, "stage recorded but batch status not updated");
        }

        let details = format!(
            "Recorded {} for batch {}",
            record.process_type, record.batch_id
        );
        if let Err(e) = self.journal.log_operation("record_processing", &details) {
            warn!(error = %e, "failed to write operations log entry");
        }

        Ok(StageOutcome {
            record,
            status_update,
        })
    }
}
