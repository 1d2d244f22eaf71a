//! Line-item accumulation
//!
//! Walks every purchase record and its items, joining against the catalog
//! index and folding the results into each seller's running totals:
//!
//! - per record: `sales_count += 1`, `revenue += total_amount`
//! - per item: `cost = purchase_price * quantity`,
//!   `profit += revenue_strategy(item, product) - cost`,
//!   `products_sold[sku] += quantity`
//!
//! Seller revenue comes from the record totals, while profit comes from the
//! strategy's per-item revenue; the two are intentionally independent.
//!
//! Totals only grow or shrink through these additions. A reference that does
//! not resolve aborts the whole accumulation with `UnresolvedReference`; the
//! caller discards the partially updated index.

use super::indexer::CatalogIndex;
use crate::strategy::RevenueStrategy;
use crate::types::{PurchaseRecord, ReportError};

/// Fold all purchase records into the seller stats of `index`
///
/// # Errors
///
/// Returns `UnresolvedReference` for the first record whose seller id, or
/// item sku, is missing from the index.
pub fn accumulate(
    index: &mut CatalogIndex<'_>,
    records: &[PurchaseRecord],
    revenue_strategy: &dyn RevenueStrategy,
) -> Result<(), ReportError> {
    for (position, record) in records.iter().enumerate() {
        let stat = index
            .sellers
            .get_mut(&record.seller_id)
            .ok_or_else(|| ReportError::unresolved_seller(&record.seller_id, position))?;

        stat.sales_count += 1;
        stat.revenue += record.total_amount;

        for item in &record.items {
            let product = index
                .products
                .get(item.sku.as_str())
                .ok_or_else(|| ReportError::unresolved_product(&item.sku, position))?;

            let cost = product.purchase_price * f64::from(item.quantity);
            let item_revenue = revenue_strategy.calculate_revenue(item, product);

            stat.profit += item_revenue - cost;
            stat.record_units(&item.sku, item.quantity);
        }
    }

    tracing::debug!(records = records.len(), "accumulated purchase records");
    Ok(())
}
