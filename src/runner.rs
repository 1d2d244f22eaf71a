//! File-to-report orchestration
//!
//! Ties the I/O layer to the core pipeline for the command-line binary:
//! 1. Load the data bundle from a JSON file
//! 2. Generate the report with the given configuration
//! 3. Serialize the report to the output in the requested format
//!
//! Nothing is written unless the whole report was generated successfully.

use crate::cli::OutputFormat;
use crate::core::generate_report;
use crate::io::{read_bundle, write_reports_csv, write_reports_json};
use crate::strategy::ReportConfig;
use crate::types::ReportError;
use std::io::Write;
use std::path::Path;

/// Build a report from `input_path` and write it to `output`
///
/// Returns the number of seller lines written.
///
/// # Examples
///
/// ```no_run
/// use seller_performance_report::cli::OutputFormat;
/// use seller_performance_report::runner::run;
/// use seller_performance_report::strategy::ReportConfig;
/// use std::path::Path;
///
/// let mut output = std::io::stdout();
/// run(
///     Path::new("sales.json"),
///     &ReportConfig::default(),
///     &OutputFormat::Csv,
///     &mut output,
/// )
/// .expect("Report failed");
/// ```
pub fn run(
    input_path: &Path,
    config: &ReportConfig,
    format: &OutputFormat,
    output: &mut dyn Write,
) -> Result<usize, ReportError> {
    let bundle = read_bundle(input_path)?;
    let reports = generate_report(&bundle, config)?;

    match format {
        OutputFormat::Json => write_reports_json(&reports, output)?,
        OutputFormat::Csv => write_reports_csv(&reports, output)?,
    }

    Ok(reports.len())
}
