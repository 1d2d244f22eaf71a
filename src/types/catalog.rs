//! Catalog types: sellers, products and customers
//!
//! These are immutable source records. The report never modifies them; it
//! only looks them up by key while folding purchase records.

use serde::Deserialize;

/// Seller identifier
pub type SellerId = String;

/// Product stock-keeping unit
pub type Sku = String;

/// A seller that purchase records are attributed to
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Seller {
    /// Unique seller id referenced by `PurchaseRecord::seller_id`
    pub id: SellerId,
    pub first_name: String,
    pub last_name: String,
}

impl Seller {
    /// Display name used in the report ("first last")
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A catalog product with its cost basis
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Product {
    /// Unique key referenced by `Item::sku`
    pub sku: Sku,

    /// Cost of one unit; profit is measured against it
    pub purchase_price: f64,

    /// Human readable product name, not used by the calculations
    #[serde(default)]
    pub name: Option<String>,
}

/// A customer record
///
/// Customers are checked for presence in the bundle but are otherwise not
/// consulted when building the report.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Customer {
    pub id: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
}
