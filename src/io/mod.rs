//! I/O module
//!
//! Loads the data bundle and writes the finished report. The core pipeline
//! never touches files; everything here sits around it.
//!
//! # Components
//!
//! - `json_reader` - JSON data bundle loader
//! - `report_writer` - CSV and JSON report serialization

pub mod json_reader;
pub mod report_writer;

pub use json_reader::{parse_bundle, read_bundle};
pub use report_writer::{write_reports_csv, write_reports_json};
