//! Seller Performance Report Library
//! # Overview
//!
//! This library aggregates raw sales transactions into a per-seller
//! performance report: revenue, profit, sales count, top products, and a
//! rank-based bonus.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (catalogs, purchase records, seller stats, reports)
//! - [`strategy`] - Pluggable revenue and bonus calculations, and the report configuration
//! - [`core`] - The report pipeline:
//!   - [`core::validator`] - Input and configuration checks
//!   - [`core::indexer`] - Seller and product lookup tables
//!   - [`core::accumulator`] - Per-seller totals from purchase records
//!   - [`core::ranker`] - Profit ranking, bonus and top products
//!   - [`core::formatter`] - Two-decimal report lines
//! - [`io`] - JSON bundle loading and CSV/JSON report writing
//! - [`cli`] - CLI arguments parsing
//! - [`runner`] - File-to-report orchestration for the binary
//!
//! # Example
//!
//! ```
//! use seller_performance_report::{generate_report, DataBundle, ReportConfig};
//! use seller_performance_report::{Customer, Item, Product, PurchaseRecord, Seller};
//!
//! let bundle = DataBundle {
//!     sellers: vec![Seller {
//!         id: "S1".into(),
//!         first_name: "Ann".into(),
//!         last_name: "Lee".into(),
//!     }],
//!     products: vec![Product { sku: "P1".into(), purchase_price: 10.0, name: None }],
//!     customers: vec![Customer { id: "C1".into(), first_name: None, last_name: None }],
//!     purchase_records: vec![PurchaseRecord {
//!         receipt_id: None,
//!         seller_id: "S1".into(),
//!         customer_id: None,
//!         total_amount: 90.0,
//!         items: vec![Item { sku: "P1".into(), quantity: 2, sale_price: 50.0, discount: 0.0 }],
//!     }],
//! };
//!
//! let report = generate_report(&bundle, &ReportConfig::default()).unwrap();
//! assert_eq!(report[0].profit.to_string(), "80.00");
//! assert_eq!(report[0].bonus.to_string(), "12.00");
//! ```

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod runner;
pub mod strategy;
pub mod types;

#[cfg(test)]
pub(crate) mod test_support;

pub use core::generate_report;
pub use strategy::{BonusStrategy, ReportConfig, RevenueStrategy, StandardCalculation};
pub use types::{
    Customer, DataBundle, Item, Product, PurchaseRecord, ReportError, Seller, SellerReport,
    SellerStat, TopProduct,
};
