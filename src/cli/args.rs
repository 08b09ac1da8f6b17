use crate::io::StoreConfig;
use crate::types::DEFAULT_STATUS;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Track coffee bean batches through processing stages
#[derive(Parser, Debug)]
#[command(name = "coffee-plant")]
#[command(about = "Track coffee bean batches through processing stages", long_about = None)]
pub struct CliArgs {
    /// Directory holding the record files
    #[arg(
        long = "data-dir",
        value_name = "DIR",
        env = "COFFEE_PLANT_DATA_DIR",
        default_value = ".",
        global = true
    )]
    pub data_dir: PathBuf,

    /// Inventory file, overriding <DATA_DIR>/bean_inventory.txt
    #[arg(long = "inventory-file", value_name = "PATH", global = true)]
    pub inventory_file: Option<PathBuf>,

    /// Processing file, overriding <DATA_DIR>/processing_records.txt
    #[arg(long = "processing-file", value_name = "PATH", global = true)]
    pub processing_file: Option<PathBuf>,

    /// Operations log file, overriding <DATA_DIR>/operations_log.txt
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Print debug diagnostics to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Tracker operations
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Show inventory totals by bean type and processing stage
    Summary,

    /// Add a newly received batch
    AddBatch {
        #[arg(long = "id", value_name = "BATCH_ID")]
        batch_id: String,

        /// Receiving date (YYYY-MM-DD)
        #[arg(long)]
        date: String,

        #[arg(long = "farmer", value_name = "FARMER_ID")]
        farmer_id: String,

        #[arg(long = "bean-type")]
        bean_type: String,

        /// Weight in kg
        #[arg(long = "weight", value_name = "KG", allow_negative_numbers = true)]
        weight_kg: f64,

        #[arg(long, default_value = DEFAULT_STATUS)]
        status: String,
    },

    /// Record a completed processing stage and move the batch to it
    RecordStage {
        #[arg(long = "batch", value_name = "BATCH_ID")]
        batch_id: String,

        /// washing, drying, roasting, ...
        #[arg(long = "process", value_name = "PROCESS_TYPE")]
        process_type: String,

        #[arg(long = "start", value_name = "DATE")]
        start_date: String,

        #[arg(long = "end", value_name = "DATE")]
        end_date: String,

        /// Weight in kg after the stage
        #[arg(long = "weight-after", value_name = "KG", allow_negative_numbers = true)]
        weight_after: f64,
    },

    /// Set a batch's status
    UpdateStatus { batch_id: String, status: String },

    /// Show a single batch
    Show { batch_id: String },

    /// Show average yield per process type
    Yields,

    /// Show the most recent operations, newest first
    Logs {
        #[arg(long, default_value_t = 5)]
        count: usize,
    },

    /// Replace batches and processing records with sample data
    Seed,
}

impl CliArgs {
    /// Resolve the three record file locations
    ///
    /// Starts from the default file names inside `--data-dir` and applies any
    /// per-file override as given.
    pub fn store_config(&self) -> StoreConfig {
        let defaults = StoreConfig::in_dir(&self.data_dir);
        StoreConfig {
            inventory_path: self
                .inventory_file
                .clone()
                .unwrap_or(defaults.inventory_path),
            processing_path: self
                .processing_file
                .clone()
                .unwrap_or(defaults.processing_path),
            log_path: self.log_file.clone().unwrap_or(defaults.log_path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::path::Path;

    #[rstest]
    #[case::summary(&["program", "summary"], Command::Summary)]
    #[case::yields(&["program", "yields"], Command::Yields)]
    #[case::seed(&["program", "seed"], Command::Seed)]
    #[case::logs_default(&["program", "logs"], Command::Logs { count: 5 })]
    #[case::logs_count(&["program", "logs", "--count", "2"], Command::Logs { count: 2 })]
    #[case::show(&["program", "show", "B001"], Command::Show { batch_id: "B001".to_string() })]
    #[case::update_status(
        &["program", "update-status", "B001", "washing"],
        Command::UpdateStatus { batch_id: "B001".to_string(), status: "washing".to_string() }
    )]
    fn test_command_parsing(#[case] args: &[&str], #[case] expected: Command) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.command, expected);
    }

    #[test]
    fn test_add_batch_parsing() {
        let parsed = CliArgs::try_parse_from([
            "program",
            "add-batch",
            "--id",
            "B500",
            "--date",
            "2023-06-10",
            "--farmer",
            "F100",
            "--bean-type",
            "Arabica",
            "--weight",
            "300",
        ])
        .unwrap();

        assert_eq!(
            parsed.command,
            Command::AddBatch {
                batch_id: "B500".to_string(),
                date: "2023-06-10".to_string(),
                farmer_id: "F100".to_string(),
                bean_type: "Arabica".to_string(),
                weight_kg: 300.0,
                status: "received".to_string(),
            }
        );
    }

    #[test]
    fn test_record_stage_parsing() {
        let parsed = CliArgs::try_parse_from([
            "program",
            "record-stage",
            "--batch",
            "B500",
            "--process",
            "washing",
            "--start",
            "2023-06-11",
            "--end",
            "2023-06-12",
            "--weight-after",
            "295",
        ])
        .unwrap();

        assert_eq!(
            parsed.command,
            Command::RecordStage {
                batch_id: "B500".to_string(),
                process_type: "washing".to_string(),
                start_date: "2023-06-11".to_string(),
                end_date: "2023-06-12".to_string(),
                weight_after: 295.0,
            }
        );
    }

    #[test]
    fn test_negative_weight_is_a_value() {
        let parsed = CliArgs::try_parse_from([
            "program",
            "add-batch",
            "--id",
            "B301",
            "--date",
            "2023-05-25",
            "--farmer",
            "F100",
            "--bean-type",
            "Arabica",
            "--weight",
            "-100",
        ])
        .unwrap();

        assert!(matches!(
            parsed.command,
            Command::AddBatch { weight_kg, .. } if weight_kg == -100.0
        ));
    }

    #[rstest]
    #[case::defaults(&["program", "summary"], "./bean_inventory.txt", "./operations_log.txt")]
    #[case::data_dir(
        &["program", "--data-dir", "/srv/plant", "summary"],
        "/srv/plant/bean_inventory.txt",
        "/srv/plant/operations_log.txt"
    )]
    #[case::file_override(
        &["program", "summary", "--data-dir", "/srv/plant", "--inventory-file", "/tmp/inv.txt"],
        "/tmp/inv.txt",
        "/srv/plant/operations_log.txt"
    )]
    fn test_store_config(#[case] args: &[&str], #[case] inventory: &str, #[case] log: &str) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        let config = parsed.store_config();

        assert_eq!(config.inventory_path, Path::new(inventory));
        assert_eq!(config.log_path, Path::new(log));
    }

    #[rstest]
    #[case::missing_command(&["program"])]
    #[case::unknown_command(&["program", "roast"])]
    #[case::missing_weight(&["program", "add-batch", "--id", "B1", "--date", "d", "--farmer", "F", "--bean-type", "A"])]
    #[case::non_numeric_weight(&["program", "add-batch", "--id", "B1", "--date", "d", "--farmer", "F", "--bean-type", "A", "--weight", "heavy"])]
    #[case::negative_count(&["program", "logs", "--count", "-1"])]
    fn test_parsing_errors(#[case] args: &[&str]) {
        let result = CliArgs::try_parse_from(args);
        assert!(result.is_err());
    }
}
