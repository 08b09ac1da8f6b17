//! Coffee Plant Tracker CLI
//!
//! Command-line interface for tracking coffee bean batches through processing.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- seed
//! cargo run -- summary
//! cargo run -- add-batch --id B500 --date 2023-06-10 --farmer F100 --bean-type Arabica --weight 300
//! cargo run -- record-stage --batch B500 --process washing --start 2023-06-11 --end 2023-06-12 --weight-after 295
//! cargo run -- yields
//! cargo run -- --data-dir /srv/plant logs --count 10
//! ```
//!
//! Reports go to stdout. Diagnostics go to stderr, filtered by `RUST_LOG`
//! (default `warn`, or `debug` with `--verbose`).
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (validation failure, unknown batch, unreadable file, etc.)

use coffee_plant_tracker::cli;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    // Parse command-line arguments using clap
    let args = cli::parse_args();

    let default_level = if args.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let mut output = std::io::stdout();
    if let Err(e) = cli::run(&args, &mut output) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
