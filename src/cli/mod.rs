// CLI module
// Command-line interface, argument parsing and command dispatch

mod args;

pub use args::{CliArgs, Command};

use crate::core::CoffeePlant;
use crate::io::{write_batch, write_inventory_summary, write_processing_yields, write_recent_logs};
use crate::types::{BatchDraft, PlantError, StageDraft};
use clap::Parser;
use std::io::Write;

/// Parse command-line arguments using clap
///
/// If parsing fails (e.g., invalid arguments, missing required arguments, or
/// --help flag), clap will display an error message or help text and exit
/// the process.
pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}

/// Open the record files named by the arguments and run the command
pub fn run(args: &CliArgs, output: &mut dyn Write) -> Result<(), PlantError> {
    let plant = CoffeePlant::open(args.store_config());
    run_command(&plant, &args.command, output)
}

/// Run one command against a plant, writing human-readable results to `output`
///
/// # Errors
///
/// Validation, lookup and I/O failures are returned for the caller to report.
/// A processing stage whose batch status could not be updated is still a
/// success; the output says so.
pub fn run_command(
    plant: &CoffeePlant,
    command: &Command,
    output: &mut dyn Write,
) -> Result<(), PlantError> {
    match command {
        Command::Summary => {
            let summary = plant.inventory_summary()?;
            write_inventory_summary(summary.as_ref(), output)
        }
        Command::AddBatch {
            batch_id,
            date,
            farmer_id,
            bean_type,
            weight_kg,
            status,
        } => {
            let batch = plant.add_batch(BatchDraft::new(
                batch_id, date, farmer_id, bean_type, *weight_kg, status,
            ))?;
            writeln!(output, "Batch {} added.", batch.batch_id)?;
            Ok(())
        }
        Command::RecordStage {
            batch_id,
            process_type,
            start_date,
            end_date,
            weight_after,
        } => {
            let outcome = plant.record_stage(StageDraft::new(
                batch_id,
                process_type,
                start_date,
                end_date,
                *weight_after,
            ))?;
            writeln!(
                output,
                "Recorded {} for batch {}.",
                outcome.record.process_type, outcome.record.batch_id
            )?;
            if let Err(e) = &outcome.status_update {
                writeln!(output, "Batch status not updated: {}", e)?;
            }
            Ok(())
        }
        Command::UpdateStatus { batch_id, status } => {
            let batch = plant.update_status(batch_id, status)?;
            writeln!(
                output,
                "Batch {} status set to {}.",
                batch.batch_id, batch.status
            )?;
            Ok(())
        }
        Command::Show { batch_id } => match plant.find_batch(batch_id)? {
            Some(batch) => write_batch(&batch, output),
            None => Err(PlantError::batch_not_found(batch_id)),
        },
        Command::Yields => {
            let yields = plant.processing_yields()?;
            write_processing_yields(&yields, output)
        }
        Command::Logs { count } => {
            let entries = plant.recent_logs(*count)?;
            write_recent_logs(&entries, output)
        }
        Command::Seed => {
            plant.seed_sample_data()?;
            writeln!(output, "Sample data created successfully.")?;
            Ok(())
        }
    }
}
