//! Core business logic module
//!
//! This module contains the tracker's components:
//! - `traits` - Seams for substitute collaborators (the clock)
//! - `batch_repository` - Batch lookup, creation and status updates
//! - `processing_log` - Processing-stage recording
//! - `analytics` - Inventory totals and processing yields
//! - `operations_log` - Timestamped audit trail of mutations
//! - `sample_data` - Demonstration data set
//! - `plant` - Facade wiring the components over one storage backend

pub mod analytics;
pub mod batch_repository;
pub mod operations_log;
pub mod plant;
pub mod processing_log;
pub mod sample_data;
pub mod traits;

pub use analytics::Analytics;
pub use batch_repository::BatchRepository;
pub use operations_log::OperationsLog;
pub use plant::CoffeePlant;
pub use processing_log::ProcessingLog;
pub use traits::{Clock, FixedClock, SystemClock};
