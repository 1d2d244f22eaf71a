//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `catalog`: sellers, products and customers
//! - `purchase`: purchase records and line items
//! - `bundle`: the input data bundle
//! - `seller_stat`: per-seller accumulator state
//! - `report`: the output report line
//! - `error`: error types for report generation

pub mod bundle;
pub mod catalog;
pub mod error;
pub mod purchase;
pub mod report;
pub mod seller_stat;

pub use bundle::DataBundle;
pub use catalog::{Customer, Product, Seller, SellerId, Sku};
pub use error::{ReferenceKind, ReportError};
pub use purchase::{Item, PurchaseRecord};
pub use report::SellerReport;
pub use seller_stat::{SellerStat, TopProduct};
