//! Report configuration
//!
//! `ReportConfig` carries the two calculation strategies and the size of
//! each seller's top-products list. Strategy slots are optional so that a
//! partially built configuration is caught by validation rather than by the
//! type system; every constructor here fills both slots.

use super::{BonusStrategy, RevenueStrategy, StrategySlot, STANDARD};

/// Configuration for a single report run
#[derive(Debug)]
pub struct ReportConfig {
    /// Revenue strategy applied to each line item
    pub calculate_revenue: Option<StrategySlot<dyn RevenueStrategy>>,

    /// Bonus strategy applied to each ranked seller
    pub calculate_bonus: Option<StrategySlot<dyn BonusStrategy>>,

    /// Maximum length of each seller's top-products list
    pub top_products_limit: usize,
}

impl ReportConfig {
    /// Default number of top products kept per seller
    pub const DEFAULT_TOP_PRODUCTS: usize = 10;

    /// Create a configuration from built-in strategy names
    ///
    /// A `top_products_limit` of zero falls back to
    /// [`ReportConfig::DEFAULT_TOP_PRODUCTS`].
    pub fn named(revenue: &str, bonus: &str, top_products_limit: usize) -> Self {
        let top_products_limit = if top_products_limit == 0 {
            Self::DEFAULT_TOP_PRODUCTS
        } else {
            top_products_limit
        };

        ReportConfig {
            calculate_revenue: Some(StrategySlot::named(revenue)),
            calculate_bonus: Some(StrategySlot::named(bonus)),
            top_products_limit,
        }
    }

    /// Replace the revenue strategy with a caller-supplied one
    pub fn with_revenue_strategy<S>(mut self, strategy: S) -> Self
    where
        S: RevenueStrategy + 'static,
    {
        self.calculate_revenue = Some(StrategySlot::Custom(Box::new(strategy)));
        self
    }

    /// Replace the bonus strategy with a caller-supplied one
    pub fn with_bonus_strategy<S>(mut self, strategy: S) -> Self
    where
        S: BonusStrategy + 'static,
    {
        self.calculate_bonus = Some(StrategySlot::Custom(Box::new(strategy)));
        self
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self::named(STANDARD, STANDARD, Self::DEFAULT_TOP_PRODUCTS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::NoBonus;
    use rstest::rstest;

    #[test]
    fn test_default_uses_standard_strategies() {
        let config = ReportConfig::default();
        assert!(matches!(
            config.calculate_revenue,
            Some(StrategySlot::Named(ref name)) if name == "standard"
        ));
        assert!(matches!(
            config.calculate_bonus,
            Some(StrategySlot::Named(ref name)) if name == "standard"
        ));
        assert_eq!(config.top_products_limit, 10);
    }

    #[rstest]
    #[case::custom(3, 3)]
    #[case::zero_falls_back(0, 10)]
    #[case::large(50, 50)]
    fn test_top_products_limit(#[case] requested: usize, #[case] expected: usize) {
        let config = ReportConfig::named("standard", "standard", requested);
        assert_eq!(config.top_products_limit, expected);
    }

    #[test]
    fn test_with_bonus_strategy_installs_custom_slot() {
        let config = ReportConfig::default().with_bonus_strategy(NoBonus);
        assert!(matches!(config.calculate_bonus, Some(StrategySlot::Custom(_))));
        assert!(matches!(config.calculate_revenue, Some(StrategySlot::Named(_))));
    }
}
