//! Alternative built-in strategies
//!
//! Selectable by name from the command line to compare report variants
//! without writing code.

use super::{BonusStrategy, RevenueStrategy};
use crate::types::{Item, Product, SellerStat};

/// Revenue at list price: `sale_price * quantity`, discounts ignored
#[derive(Debug, Clone, Copy, Default)]
pub struct GrossRevenue;

impl RevenueStrategy for GrossRevenue {
    fn calculate_revenue(&self, item: &Item, _product: &Product) -> f64 {
        item.sale_price * f64::from(item.quantity)
    }
}

/// No bonus for anyone
#[derive(Debug, Clone, Copy, Default)]
pub struct NoBonus;

impl BonusStrategy for NoBonus {
    fn calculate_bonus(&self, _index: usize, _total: usize, _seller: &SellerStat) -> f64 {
        0.0
    }
}
