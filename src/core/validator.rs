//! Input validation
//!
//! Checks the shape of the data bundle and resolves both calculation
//! strategies before any computation starts. Validation has no side effects;
//! its only output is the pair of strategies the rest of the pipeline calls.

use crate::strategy::{
    bonus_strategy_by_name, revenue_strategy_by_name, BonusStrategy, ReportConfig,
    RevenueStrategy, StrategySlot, BONUS_SLOT, REVENUE_SLOT,
};
use crate::types::{DataBundle, ReportError};

/// The strategies a validated configuration resolved to
pub struct ResolvedStrategies<'a> {
    pub revenue: &'a dyn RevenueStrategy,
    pub bonus: &'a dyn BonusStrategy,
}

/// Validate the bundle and configuration
///
/// # Errors
///
/// Checks run in this order and the first failure is returned:
/// - `InvalidInput` if sellers, products, customers or purchase_records is empty
/// - `MissingConfiguration` if either strategy slot is empty
/// - `InvalidStrategyType` if a named strategy is not a registered built-in
pub fn validate<'a>(
    bundle: &DataBundle,
    config: &'a ReportConfig,
) -> Result<ResolvedStrategies<'a>, ReportError> {
    validate_bundle(bundle)?;

    let revenue_slot = config
        .calculate_revenue
        .as_ref()
        .ok_or_else(|| ReportError::missing_configuration(REVENUE_SLOT))?;
    let bonus_slot = config
        .calculate_bonus
        .as_ref()
        .ok_or_else(|| ReportError::missing_configuration(BONUS_SLOT))?;

    let revenue: &dyn RevenueStrategy = match revenue_slot {
        StrategySlot::Named(name) => revenue_strategy_by_name(name)
            .ok_or_else(|| ReportError::invalid_strategy_type(REVENUE_SLOT, name))?,
        StrategySlot::Custom(strategy) => &**strategy,
    };
    let bonus: &dyn BonusStrategy = match bonus_slot {
        StrategySlot::Named(name) => bonus_strategy_by_name(name)
            .ok_or_else(|| ReportError::invalid_strategy_type(BONUS_SLOT, name))?,
        StrategySlot::Custom(strategy) => &**strategy,
    };

    Ok(ResolvedStrategies { revenue, bonus })
}

fn validate_bundle(bundle: &DataBundle) -> Result<(), ReportError> {
    let sequences = [
        ("sellers", bundle.sellers.is_empty()),
        ("products", bundle.products.is_empty()),
        ("customers", bundle.customers.is_empty()),
        ("purchase_records", bundle.purchase_records.is_empty()),
    ];

    match sequences.iter().find(|(_, empty)| *empty) {
        Some((name, _)) => Err(ReportError::invalid_input(&format!(
            "{} must be a non-empty list",
            name
        ))),
        None => Ok(()),
    }
}
