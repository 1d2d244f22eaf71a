//! Ranking and bonus assignment
//!
//! Orders sellers by accumulated profit, highest first, and finalizes each
//! seller: the bonus strategy is called with the seller's zero-based rank,
//! and the product tally is reduced to a best-sellers list.
//!
//! Both sorts are stable. Sellers with equal profit stay in catalog order,
//! and products with equal quantity stay in order of first sale.

use crate::strategy::BonusStrategy;
use crate::types::{SellerId, SellerStat, Sku, TopProduct};
use indexmap::IndexMap;

/// Rank sellers by profit and assign bonus and top products
pub fn rank_sellers(
    sellers: IndexMap<SellerId, SellerStat>,
    bonus_strategy: &dyn BonusStrategy,
    top_products_limit: usize,
) -> Vec<SellerStat> {
    let mut ranked: Vec<SellerStat> = sellers.into_values().collect();
    ranked.sort_by(|a, b| b.profit.total_cmp(&a.profit));

    let total = ranked.len();
    for (index, seller) in ranked.iter_mut().enumerate() {
        seller.bonus = bonus_strategy.calculate_bonus(index, total, seller);
        seller.top_products = top_products(&seller.products_sold, top_products_limit);
    }

    tracing::debug!(sellers = total, "ranked sellers by profit");
    ranked
}

/// Best-selling products by quantity, at most `limit` of them
pub fn top_products(products_sold: &IndexMap<Sku, u64>, limit: usize) -> Vec<TopProduct> {
    let mut top: Vec<TopProduct> = products_sold
        .iter()
        .map(|(sku, quantity)| TopProduct {
            sku: sku.clone(),
            quantity: *quantity,
        })
        .collect();

    top.sort_by(|a, b| b.quantity.cmp(&a.quantity));
    top.truncate(limit);
    top
}
