//! Coffee plant facade
//!
//! This module provides the `CoffeePlant` that owns a storage backend and a
//! clock and wires the core components over them on demand:
//!
//! - `BatchRepository` for batch lookups and mutations
//! - `ProcessingLog` for processing stages
//! - `Analytics` for inventory and yield reports
//! - `OperationsLog` for the audit trail
//!
//! Components are cheap borrowed views; none of them caches data, so every
//! call works against what is currently stored.

use crate::core::analytics::Analytics;
use crate::core::batch_repository::BatchRepository;
use crate::core::operations_log::OperationsLog;
use crate::core::processing_log::ProcessingLog;
use crate::core::sample_data::seed_sample_data;
use crate::core::traits::{Clock, SystemClock};
use crate::io::{FileStorage, RecordStorage, RecordStore, StoreConfig};
use crate::types::{
    Batch, BatchDraft, InventorySummary, LogEntry, PlantError, ProcessingRecord,
    ProcessingYields, StageDraft, StageOutcome,
};
use tracing::info;

/// Entry point to every tracker operation
pub struct CoffeePlant {
    storage: Box<dyn RecordStorage>,
    clock: Box<dyn Clock>,
}

impl CoffeePlant {
    /// Create a plant over any storage backend and clock
    pub fn new(storage: Box<dyn RecordStorage>, clock: Box<dyn Clock>) -> Self {
        CoffeePlant { storage, clock }
    }

    /// Create a plant over the record files in `config`, using the system clock
    pub fn open(config: StoreConfig) -> Self {
        CoffeePlant::new(Box::new(FileStorage::new(config)), Box::new(SystemClock))
    }

    pub fn store(&self) -> RecordStore<'_> {
        RecordStore::new(self.storage.as_ref())
    }

    pub fn journal(&self) -> OperationsLog<'_> {
        OperationsLog::new(self.store(), self.clock.as_ref())
    }

    pub fn batches(&self) -> BatchRepository<'_> {
        BatchRepository::new(self.store(), self.journal())
    }

    pub fn processing(&self) -> ProcessingLog<'_> {
        ProcessingLog::new(self.store(), self.batches(), self.journal())
    }

    pub fn analytics(&self) -> Analytics<'_> {
        Analytics::new(self.store(), self.batches())
    }

    pub fn find_batch(&self, batch_id: &str) -> Result<Option<Batch>, PlantError> {
        self.batches().find_by_id(batch_id)
    }

    pub fn all_batches(&self) -> Result<Vec<Batch>, PlantError> {
        self.batches().all()
    }

    pub fn add_batch(&self, draft: BatchDraft) -> Result<Batch, PlantError> {
        self.batches().add_batch(draft)
    }

    pub fn update_status(&self, batch_id: &str, new_status: &str) -> Result<Batch, PlantError> {
        self.batches().update_status(batch_id, new_status)
    }

    pub fn record_stage(&self, draft: StageDraft) -> Result<StageOutcome, PlantError> {
        self.processing().record_stage(draft)
    }

    pub fn processing_records(&self) -> Result<Vec<ProcessingRecord>, PlantError> {
        self.processing().all()
    }

    pub fn inventory_summary(&self) -> Result<Option<InventorySummary>, PlantError> {
        self.analytics().inventory_summary()
    }

    pub fn processing_yields(&self) -> Result<ProcessingYields, PlantError> {
        self.analytics().processing_yields()
    }

    pub fn log_operation(&self, operation: &str, details: &str) -> Result<LogEntry, PlantError> {
        self.journal().log_operation(operation, details)
    }

    pub fn recent_logs(&self, count: usize) -> Result<Vec<LogEntry>, PlantError> {
        self.journal().recent_logs(count)
    }

    /// Replace batches and processing records with the demonstration data set
    pub fn seed_sample_data(&self) -> Result<(), PlantError> {
        seed_sample_data(self.store())?;
        info!("sample data written");
        Ok(())
    }
}
