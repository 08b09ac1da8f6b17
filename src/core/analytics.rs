//! Inventory and yield analytics
//!
//! Read-only aggregation over the batch and processing collections.
//!
//! # Yield Baseline
//!
//! A stage's yield is measured against the batch's *current* stored weight,
//! not the weight the batch had when that stage ran. Stages never change the
//! stored weight, so every stage of a batch is compared with its received weight.

use crate::core::batch_repository::BatchRepository;
use crate::io::RecordStore;
use crate::types::{
    InventorySummary, PlantError, ProcessYield, ProcessingRecord, ProcessingYields, WeightGroup,
};
use std::collections::HashMap;
use tracing::{debug, warn};

#[derive(Clone, Copy)]
pub struct Analytics<'a> {
    store: RecordStore<'a>,
    batches: BatchRepository<'a>,
}

impl<'a> Analytics<'a> {
    pub fn new(store: RecordStore<'a>, batches: BatchRepository<'a>) -> Self {
        Analytics { store, batches }
    }

    /// Totals over the whole inventory
    ///
    /// # Returns
    ///
    /// * `Ok(None)` - The inventory is empty or missing
    /// * `Ok(Some(summary))` - Batch count, total weight, and weight grouped by
    ///   bean type and by status in first-appearance order
    pub fn inventory_summary(&self) -> Result<Option<InventorySummary>, PlantError> {
        let inventory = self.batches.all()?;
        if inventory.is_empty() {
            return Ok(None);
        }

        let mut bean_types = Vec::new();
        let mut stages = Vec::new();
        for batch in &inventory {
            add_weight(&mut bean_types, &batch.bean_type, batch.weight_kg);
            add_weight(&mut stages, &batch.status, batch.weight_kg);
        }

        Ok(Some(InventorySummary {
            total_batches: inventory.len(),
            total_weight: inventory.iter().map(|batch| batch.weight_kg).sum(),
            bean_types,
            stages,
        }))
    }

    /// Average yield per process type
    ///
    /// For each processing record whose batch is in the inventory, computes
    /// `weight_after / batch weight * 100` and averages per process type,
    /// rounded to 2 decimal places. Records whose batch is missing, or whose
    /// ratio is not finite (a zero batch weight), are left out. Process types
    /// with no remaining records are omitted.
    pub fn processing_yields(&self) -> Result<ProcessingYields, PlantError> {
        let records = self.store.read_all::<ProcessingRecord>()?;
        let inventory = self.batches.all()?;

        let mut weights: HashMap<&str, f64> = HashMap::new();
        for batch in &inventory {
            weights
                .entry(batch.batch_id.as_str())
                .or_insert(batch.weight_kg);
        }

        // (process type, sum of yield percentages, contributing records)
        let mut totals: Vec<(&str, f64, usize)> = Vec::new();
        for record in &records {
            let index = match totals
                .iter()
                .position(|(process_type, _, _)| *process_type == record.process_type)
            {
                Some(index) => index,
                None => {
                    totals.push((record.process_type.as_str(), 0.0, 0));
                    totals.len() - 1
                }
            };

            let Some(&original_weight) = weights.get(record.batch_id.as_str()) else {
                debug!(batch_id = %record.batch_id, "no batch for processing record, excluded from yields");
                continue;
            };

            let yield_pct = record.weight_after / original_weight * 100.0;
            if !yield_pct.is_finite() {
                warn!(
                    batch_id = %record.batch_id,
                    original_weight,
                    "batch weight gives no usable yield, excluded from yields"
                );
                continue;
            }

            let entry = &mut totals[index];
            entry.1 += yield_pct;
            entry.2 += 1;
        }

        let groups = totals
            .into_iter()
            .filter(|(_, _, count)| *count > 0)
            .map(|(process_type, sum, count)| ProcessYield {
                process_type: process_type.to_string(),
                average_yield_percentage: round_to_hundredths(sum / count as f64),
                count,
            })
            .collect();

        Ok(ProcessingYields::new(groups))
    }
}

fn add_weight(groups: &mut Vec<WeightGroup>, name: &str, weight_kg: f64) {
    match groups.iter_mut().find(|group| group.name == name) {
        Some(group) => group.weight_kg += weight_kg,
        None => groups.push(WeightGroup {
            name: name.to_string(),
            weight_kg,
        }),
    }
}

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
