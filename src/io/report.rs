//! Human-readable report output
//!
//! Writers for the CLI. Like the record format they do no file I/O of their
//! own: each takes a `&mut dyn Write` so tests can capture the text.

use crate::types::{Batch, InventorySummary, LogEntry, PlantError, ProcessingYields};
use std::io::Write;

/// Write the inventory summary
///
/// `None` (an empty inventory) prints a single notice line.
pub fn write_inventory_summary(
    summary: Option<&InventorySummary>,
    output: &mut dyn Write,
) -> Result<(), PlantError> {
    let Some(summary) = summary else {
        writeln!(output, "No inventory data available.")?;
        return Ok(());
    };

    writeln!(output, "=== INVENTORY SUMMARY ===")?;
    writeln!(output, "Total Batches: {}", summary.total_batches)?;
    writeln!(output, "Total Weight: {:.1} kg", summary.total_weight)?;

    writeln!(output)?;
    writeln!(output, "By Bean Type:")?;
    for group in &summary.bean_types {
        writeln!(
            output,
            "{}: {:.1} kg ({:.1}%)",
            group.name,
            group.weight_kg,
            group.percentage_of(summary.total_weight)
        )?;
    }

    writeln!(output)?;
    writeln!(output, "By Processing Stage:")?;
    for group in &summary.stages {
        writeln!(
            output,
            "{}: {:.1} kg ({:.1}%)",
            group.name,
            group.weight_kg,
            group.percentage_of(summary.total_weight)
        )?;
    }

    output.flush()?;
    Ok(())
}

/// Write average yields per process type
pub fn write_processing_yields(
    yields: &ProcessingYields,
    output: &mut dyn Write,
) -> Result<(), PlantError> {
    if yields.is_empty() {
        writeln!(output, "No processing yield data available.")?;
        return Ok(());
    }

    writeln!(output, "=== PROCESSING YIELDS ===")?;
    for stats in yields.iter() {
        writeln!(output, "{}:", stats.process_type.to_uppercase())?;
        writeln!(
            output,
            "  Average Yield: {}%",
            format_percentage(stats.average_yield_percentage)
        )?;
        writeln!(output, "  Number of Batches: {}", stats.count)?;
    }

    output.flush()?;
    Ok(())
}

/// Shortest form of an already rounded value, keeping one decimal for whole numbers
///
/// `98.0` prints as `98.0`, `98.33` as `98.33`.
fn format_percentage(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        value.to_string()
    }
}

/// Write log entries in the order given (newest first from `recent_logs`)
pub fn write_recent_logs(entries: &[LogEntry], output: &mut dyn Write) -> Result<(), PlantError> {
    if entries.is_empty() {
        writeln!(output, "No log entries found.")?;
        return Ok(());
    }

    writeln!(output, "=== RECENT OPERATIONS ===")?;
    for entry in entries {
        writeln!(
            output,
            "{} - {} - {}",
            entry.timestamp, entry.operation, entry.details
        )?;
    }

    output.flush()?;
    Ok(())
}

/// Write one batch as `key: value` lines
pub fn write_batch(batch: &Batch, output: &mut dyn Write) -> Result<(), PlantError> {
    writeln!(output, "batch_id: {}", batch.batch_id)?;
    writeln!(output, "date: {}", batch.date)?;
    writeln!(output, "farmer_id: {}", batch.farmer_id)?;
    writeln!(output, "bean_type: {}", batch.bean_type)?;
    writeln!(output, "weight_kg: {:.1}", batch.weight_kg)?;
    writeln!(output, "status: {}", batch.status)?;
    output.flush()?;
    Ok(())
}
