//! I/O module
//!
//! Handles record persistence and report output.
//!
//! # Components
//!
//! - `storage` - Storage backends (flat files, in-memory) and file locations
//! - `record_format` - Line format handling (record decoding and encoding)
//! - `record_store` - Typed read/append/rewrite over a storage backend
//! - `report` - Human-readable report writers

pub mod record_format;
pub mod record_store;
pub mod report;
pub mod storage;

pub use record_format::{format_records, parse_records, Record};
pub use record_store::RecordStore;
pub use report::{write_batch, write_inventory_summary, write_processing_yields, write_recent_logs};
pub use storage::{Collection, FileStorage, InMemoryStorage, RecordStorage, StoreConfig};
