//! Output report shape

use super::catalog::SellerId;
use super::seller_stat::TopProduct;
use rust_decimal::Decimal;
use serde::Serialize;

/// Final per-seller line of the report
///
/// Money fields are rounded to two decimal places. Serialized as JSON
/// numbers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SellerReport {
    pub seller_id: SellerId,
    pub name: String,
    pub revenue: Decimal,
    pub profit: Decimal,
    pub sales_count: u64,
    pub top_products: Vec<TopProduct>,
    pub bonus: Decimal,
}
