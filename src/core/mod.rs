//! Core business logic module
//!
//! This module contains the report pipeline, one submodule per phase:
//! - `validator` - Bundle shape checks and strategy resolution
//! - `indexer` - Seller and product lookup tables
//! - `accumulator` - Per-seller revenue, profit and product tallies
//! - `ranker` - Profit ranking, bonus assignment and top products
//! - `formatter` - Projection into rounded report lines
//! - `pipeline` - The `generate_report` entry point tying the phases together

pub mod accumulator;
pub mod formatter;
pub mod indexer;
pub mod pipeline;
pub mod ranker;
pub mod validator;

pub use formatter::round_money;
pub use indexer::CatalogIndex;
pub use pipeline::generate_report;
