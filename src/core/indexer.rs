//! Catalog indexing
//!
//! Builds the two lookup tables the accumulator joins against:
//! - seller id → freshly initialized `SellerStat`
//! - product sku → `Product`
//!
//! Keys are expected to be unique. When a catalog repeats a key, the later
//! entry silently replaces the earlier one; the seller keeps the position of
//! its first occurrence in the seller index, which only matters for ranking
//! ties. Replacements are logged at `warn` level.

use crate::types::{Product, Seller, SellerId, SellerStat};
use indexmap::IndexMap;
use std::collections::HashMap;

/// Lookup tables built from the seller and product catalogs
#[derive(Debug)]
pub struct CatalogIndex<'a> {
    /// Seller stats in catalog order
    pub sellers: IndexMap<SellerId, SellerStat>,

    /// Products by sku, borrowed from the bundle
    pub products: HashMap<&'a str, &'a Product>,
}

/// Index the seller and product catalogs
pub fn build_index<'a>(sellers: &[Seller], products: &'a [Product]) -> CatalogIndex<'a> {
    let mut seller_index = IndexMap::with_capacity(sellers.len());
    for seller in sellers {
        let stat = SellerStat::new(seller.id.clone(), seller.display_name());
        if seller_index.insert(seller.id.clone(), stat).is_some() {
            tracing::warn!(seller_id = %seller.id, "duplicate seller id, keeping the later entry");
        }
    }

    let mut product_index = HashMap::with_capacity(products.len());
    for product in products {
        if product_index
            .insert(product.sku.as_str(), product)
            .is_some()
        {
            tracing::warn!(sku = %product.sku, "duplicate product sku, keeping the later entry");
        }
    }

    CatalogIndex {
        sellers: seller_index,
        products: product_index,
    }
}
