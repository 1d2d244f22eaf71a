//! Standard calculation strategy
//!
//! Implements both calculation traits with the formulas used when the caller
//! does not ask for anything else:
//!
//! - revenue of a line item is its discounted sale value:
//!   `sale_price * quantity * (1 - discount / 100)`
//! - bonus is tiered by profit rank:
//!
//! | rank (zero-based)        | bonus          |
//! |--------------------------|----------------|
//! | 0                        | 15% of profit  |
//! | 1 or 2                   | 10% of profit  |
//! | last                     | 0              |
//! | anything else            | 5% of profit   |
//!
//! The tiers are checked top to bottom, so a lone seller (rank 0 and last at
//! the same time) gets the 15% bonus.

use super::{BonusStrategy, RevenueStrategy};
use crate::types::{Item, Product, SellerStat};

const TOP_RATE: f64 = 0.15;
const PODIUM_RATE: f64 = 0.10;
const BASE_RATE: f64 = 0.05;

/// The default revenue and bonus formulas
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardCalculation;

impl RevenueStrategy for StandardCalculation {
    fn calculate_revenue(&self, item: &Item, _product: &Product) -> f64 {
        let discount = 1.0 - item.discount / 100.0;
        item.sale_price * f64::from(item.quantity) * discount
    }
}

impl BonusStrategy for StandardCalculation {
    fn calculate_bonus(&self, index: usize, total: usize, seller: &SellerStat) -> f64 {
        let profit = seller.profit;

        if index == 0 {
            profit * TOP_RATE
        } else if index == 1 || index == 2 {
            profit * PODIUM_RATE
        } else if index + 1 == total {
            0.0
        } else {
            profit * BASE_RATE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn item(sale_price: f64, quantity: u32, discount: f64) -> Item {
        Item {
            sku: "P1".to_string(),
            quantity,
            sale_price,
            discount,
        }
    }

    fn product(purchase_price: f64) -> Product {
        Product {
            sku: "P1".to_string(),
            purchase_price,
            name: None,
        }
    }

    fn seller_with_profit(profit: f64) -> SellerStat {
        let mut stat = SellerStat::new("S1".to_string(), "Ann Lee".to_string());
        stat.profit = profit;
        stat
    }

    #[rstest]
    #[case::half_off(item(100.0, 2, 50.0), 100.0)]
    #[case::no_discount(item(50.0, 2, 0.0), 100.0)]
    #[case::full_discount(item(80.0, 3, 100.0), 0.0)]
    #[case::quarter_off(item(40.0, 1, 25.0), 30.0)]
    fn test_revenue_applies_discount(#[case] item: Item, #[case] expected: f64) {
        let revenue = StandardCalculation.calculate_revenue(&item, &product(10.0));
        assert_eq!(revenue, expected);
    }

    #[test]
    fn test_revenue_ignores_product_cost() {
        let item = item(100.0, 2, 50.0);
        let cheap = StandardCalculation.calculate_revenue(&item, &product(1.0));
        let dear = StandardCalculation.calculate_revenue(&item, &product(1000.0));
        assert_eq!(cheap, dear);
    }

    #[rstest]
    #[case::top(0, 5, 1000.0 * 0.15)]
    #[case::second(1, 5, 1000.0 * 0.10)]
    #[case::third(2, 5, 1000.0 * 0.10)]
    #[case::middle(3, 5, 1000.0 * 0.05)]
    #[case::last(4, 5, 0.0)]
    #[case::second_of_two(1, 2, 1000.0 * 0.10)]
    #[case::third_of_three(2, 3, 1000.0 * 0.10)]
    #[case::last_of_four(3, 4, 0.0)]
    fn test_bonus_tiers(#[case] index: usize, #[case] total: usize, #[case] expected: f64) {
        let bonus = StandardCalculation.calculate_bonus(index, total, &seller_with_profit(1000.0));
        assert_eq!(bonus, expected);
    }

    // Rank 0 is also the last rank here; the top tier has precedence.
    #[test]
    fn test_single_seller_gets_top_tier_not_last_tier() {
        let bonus = StandardCalculation.calculate_bonus(0, 1, &seller_with_profit(80.0));
        assert_eq!(bonus, 80.0 * 0.15);
        assert_ne!(bonus, 0.0);
    }

    #[test]
    fn test_negative_profit_yields_negative_bonus() {
        let bonus = StandardCalculation.calculate_bonus(0, 3, &seller_with_profit(-200.0));
        assert_eq!(bonus, -200.0 * 0.15);
    }
}
