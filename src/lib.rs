//! Coffee Plant Tracker Library
//! # Overview
//!
//! This library tracks coffee bean batches through processing stages using
//! flat, comma-delimited record files, and derives inventory and yield reports
//! plus an operations audit trail.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Batch, ProcessingRecord, LogEntry, reports)
//! - [`cli`] - CLI arguments parsing and command dispatch
//! - [`core`] - Business logic components:
//!   - [`core::batch_repository`] - Batch lookup, creation and status updates
//!   - [`core::processing_log`] - Processing-stage recording
//!   - [`core::analytics`] - Inventory totals and processing yields
//!   - [`core::operations_log`] - Timestamped audit trail
//!   - [`core::plant`] - Facade wiring the components together
//! - [`io`] - Record persistence over pluggable storage, and report output
//!
//! # Record Files
//!
//! - `bean_inventory.txt`: `batch_id,date,farmer_id,bean_type,weight_kg,status`
//! - `processing_records.txt`: `batch_id,process_type,start_date,end_date,weight_after`
//! - `operations_log.txt`: `timestamp,operation,details`
//!
//! # Batch Lifecycle
//!
//! A batch is added with a caller-chosen status (usually `received`). Recording
//! a processing stage appends the stage and sets the batch status to the
//! stage's process type. Status is free text; any value may follow any other.

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod types;

pub use core::{CoffeePlant, SystemClock};
pub use io::{FileStorage, InMemoryStorage, RecordStorage, StoreConfig};
pub use types::{
    Batch, BatchDraft, BatchId, InventorySummary, LogEntry, PlantError, ProcessYield,
    ProcessingRecord, ProcessingYields, StageDraft, StageOutcome,
};
