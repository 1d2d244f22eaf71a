//! Calculation strategy module
//!
//! The report pipeline delegates two formulas to pluggable strategies:
//! how much revenue a line item brings in, and how large a seller's bonus is
//! given their profit rank. Callers can supply their own implementations or
//! pick a built-in one by name.
//!
//! # Built-in strategies
//!
//! | slot               | name       | implementation          |
//! |--------------------|------------|-------------------------|
//! | `calculate_revenue`| `standard` | [`StandardCalculation`] |
//! | `calculate_revenue`| `gross`    | [`GrossRevenue`]        |
//! | `calculate_bonus`  | `standard` | [`StandardCalculation`] |
//! | `calculate_bonus`  | `none`     | [`NoBonus`]             |

use crate::types::{Item, Product, SellerStat};
use std::fmt;

pub mod alternative;
pub mod config;
pub mod standard;

pub use alternative::{GrossRevenue, NoBonus};
pub use config::ReportConfig;
pub use standard::StandardCalculation;

/// Name of the revenue strategy slot, as reported in configuration errors
pub const REVENUE_SLOT: &str = "calculate_revenue";

/// Name of the bonus strategy slot, as reported in configuration errors
pub const BONUS_SLOT: &str = "calculate_bonus";

/// Name of the default strategy in both slots
pub const STANDARD: &str = "standard";

/// Computes the revenue a single line item contributes
pub trait RevenueStrategy: Send + Sync {
    fn calculate_revenue(&self, item: &Item, product: &Product) -> f64;
}

/// Computes a seller's bonus from their zero-based profit rank
///
/// `total` is the number of ranked sellers, so `index == total - 1` is the
/// seller with the lowest profit.
pub trait BonusStrategy: Send + Sync {
    fn calculate_bonus(&self, index: usize, total: usize, seller: &SellerStat) -> f64;
}

/// A configured strategy: either a built-in referred to by name, or a
/// caller-supplied implementation
pub enum StrategySlot<T: ?Sized> {
    Named(String),
    Custom(Box<T>),
}

impl<T: ?Sized> StrategySlot<T> {
    /// Refer to a built-in strategy by name
    pub fn named(name: &str) -> Self {
        StrategySlot::Named(name.to_string())
    }
}

impl<T: ?Sized> fmt::Debug for StrategySlot<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrategySlot::Named(name) => f.debug_tuple("Named").field(name).finish(),
            StrategySlot::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

static STANDARD_CALCULATION: StandardCalculation = StandardCalculation;
static GROSS_REVENUE: GrossRevenue = GrossRevenue;
static NO_BONUS: NoBonus = NoBonus;

/// Look up a built-in revenue strategy by name
pub fn revenue_strategy_by_name(name: &str) -> Option<&'static dyn RevenueStrategy> {
    match name {
        STANDARD => Some(&STANDARD_CALCULATION),
        "gross" => Some(&GROSS_REVENUE),
        _ => None,
    }
}

/// Look up a built-in bonus strategy by name
pub fn bonus_strategy_by_name(name: &str) -> Option<&'static dyn BonusStrategy> {
    match name {
        STANDARD => Some(&STANDARD_CALCULATION),
        "none" => Some(&NO_BONUS),
        _ => None,
    }
}
