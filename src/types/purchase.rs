//! Purchase records and their line items

use super::bundle::null_as_empty;
use super::catalog::{SellerId, Sku};
use serde::Deserialize;

/// A single line entry inside a purchase record
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Item {
    /// Product being sold; must resolve in the product catalog
    pub sku: Sku,

    /// Number of units sold
    pub quantity: u32,

    /// Price of one unit before discount
    pub sale_price: f64,

    /// Discount percentage in the range 0-100
    #[serde(default)]
    pub discount: f64,
}

/// One sales transaction attributed to one seller
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PurchaseRecord {
    /// Receipt identifier, carried through for diagnostics only
    #[serde(default)]
    pub receipt_id: Option<String>,

    /// Seller the sale is attributed to; must resolve in the seller catalog
    pub seller_id: SellerId,

    /// Buyer of the sale, not used by the calculations
    #[serde(default)]
    pub customer_id: Option<String>,

    /// Amount charged for the whole record; summed into seller revenue as-is
    pub total_amount: f64,

    /// Line items in order of appearance
    #[serde(default, deserialize_with = "null_as_empty")]
    pub items: Vec<Item>,
}
