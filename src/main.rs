//! Seller performance report CLI
//!
//! Command-line interface for turning a JSON sales data bundle into a
//! per-seller performance report.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- sales.json > report.json
//! cargo run -- --format csv sales.json > report.csv
//! cargo run -- --revenue-strategy gross --bonus-strategy none sales.json
//! RUST_LOG=debug cargo run -- --top-products 3 sales.json
//! ```
//!
//! The report is written to stdout; diagnostics go to stderr and are
//! controlled with `RUST_LOG` (default: `warn`).
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (file not found, malformed input, unknown strategy, unresolved reference, etc.)

use seller_performance_report::{cli, runner};
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();

    let args = cli::parse_args();
    let config = args.to_report_config();

    let mut output = std::io::stdout().lock();
    if let Err(e) = runner::run(&args.input_file, &config, &args.format, &mut output) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
