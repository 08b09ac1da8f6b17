//! Demonstration data set
//!
//! Three batches from two farmers and one processing record per batch.

use crate::io::RecordStore;
use crate::types::{Batch, PlantError, ProcessingRecord};

fn batch(id: &str, date: &str, farmer: &str, bean_type: &str, weight: f64, status: &str) -> Batch {
    Batch {
        batch_id: id.to_string(),
        date: date.to_string(),
        farmer_id: farmer.to_string(),
        bean_type: bean_type.to_string(),
        weight_kg: weight,
        status: status.to_string(),
    }
}

fn stage(id: &str, process: &str, start: &str, end: &str, weight_after: f64) -> ProcessingRecord {
    ProcessingRecord {
        batch_id: id.to_string(),
        process_type: process.to_string(),
        start_date: start.to_string(),
        end_date: end.to_string(),
        weight_after,
    }
}

pub fn sample_batches() -> Vec<Batch> {
    vec![
        batch("B001", "2023-05-15", "F042", "Arabica", 250.0, "received"),
        batch("B002", "2023-05-16", "F036", "Robusta", 300.0, "washing"),
        batch("B003", "2023-05-17", "F042", "Arabica", 175.0, "drying"),
    ]
}

pub fn sample_processing_records() -> Vec<ProcessingRecord> {
    vec![
        stage("B001", "washing", "2023-05-16", "2023-05-17", 245.0),
        stage("B002", "washing", "2023-05-17", "2023-05-18", 294.0),
        stage("B003", "drying", "2023-05-18", "2023-05-20", 160.0),
    ]
}

/// Overwrite the batch and processing collections with the sample data
///
/// The operations log is left as it is.
pub fn seed_sample_data(store: RecordStore<'_>) -> Result<(), PlantError> {
    store.rewrite(&sample_batches())?;
    store.rewrite(&sample_processing_records())?;
    Ok(())
}
