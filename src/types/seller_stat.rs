//! Per-seller running statistics
//!
//! A `SellerStat` is created once per seller when the catalog is indexed,
//! mutated only while purchase records are accumulated, finalized (bonus and
//! top products) by the ranker, and read-only afterwards.

use super::catalog::{SellerId, Sku};
use indexmap::IndexMap;
use serde::Serialize;

/// A best-selling product entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopProduct {
    pub sku: Sku,
    pub quantity: u64,
}

/// Accumulated state for one seller
#[derive(Debug, Clone, PartialEq)]
pub struct SellerStat {
    /// The seller id
    pub id: SellerId,

    /// "first last"
    pub name: String,

    /// Sum of `total_amount` over the seller's purchase records
    pub revenue: f64,

    /// Sum of per-item profit (item revenue minus cost basis)
    pub profit: f64,

    /// Number of purchase records attributed to the seller
    pub sales_count: u64,

    /// Cumulative quantity sold per sku, in order of first sale
    pub products_sold: IndexMap<Sku, u64>,

    /// Assigned by the ranker
    pub bonus: f64,

    /// Assigned by the ranker
    pub top_products: Vec<TopProduct>,
}

impl SellerStat {
    /// Create a seller stat with all counters at zero
    pub fn new(id: SellerId, name: String) -> Self {
        SellerStat {
            id,
            name,
            revenue: 0.0,
            profit: 0.0,
            sales_count: 0,
            products_sold: IndexMap::new(),
            bonus: 0.0,
            top_products: Vec::new(),
        }
    }

    /// Add `quantity` units of `sku` to the tally, starting from zero on first sight
    pub fn record_units(&mut self, sku: &str, quantity: u32) {
        *self.products_sold.entry(sku.to_string()).or_insert(0) += u64::from(quantity);
    }
}
