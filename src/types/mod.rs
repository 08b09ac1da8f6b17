//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `batch`: Bean batches and their drafts
//! - `processing`: Processing-stage records, drafts and outcomes
//! - `log_entry`: Operations log entries
//! - `report`: Inventory summary and yield statistics
//! - `error`: Error types for the tracker

pub mod batch;
pub mod error;
pub mod log_entry;
pub mod processing;
pub mod report;

pub use batch::{Batch, BatchDraft, BatchId, DEFAULT_STATUS};
pub use error::PlantError;
pub use log_entry::{LogEntry, TIMESTAMP_FORMAT};
pub use processing::{ProcessingRecord, StageDraft, StageOutcome};
pub use report::{InventorySummary, ProcessYield, ProcessingYields, WeightGroup};
