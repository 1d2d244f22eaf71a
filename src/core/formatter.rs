//! Report formatting
//!
//! Projects finalized seller stats into the output shape. This is the only
//! place rounding happens: revenue, profit and bonus are rounded to two
//! decimal places, half away from zero. Accumulation before this point is
//! full-precision `f64`.

use crate::types::{ReportError, SellerReport, SellerStat};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Decimal places kept for money values
pub const MONEY_DP: u32 = 2;

/// Round a money value to two decimal places, half away from zero
///
/// The float is first converted to its shortest decimal representation and
/// the midpoint is judged on that, so `1.005` rounds to `1.01` and `2.675`
/// to `2.68` even though their binary values sit slightly below the
/// midpoint.
///
/// The result always carries a scale of exactly two, so `80.0` displays as
/// `80.00`. Returns `None` for NaN, infinities and magnitudes beyond the
/// `Decimal` range (about 7.9e28). Negative zero collapses to zero.
pub fn round_money(value: f64) -> Option<Decimal> {
    let mut rounded = Decimal::from_f64(value)?
        .round_dp_with_strategy(MONEY_DP, RoundingStrategy::MidpointAwayFromZero);

    if rounded.is_zero() {
        rounded = Decimal::ZERO;
    }
    rounded.rescale(MONEY_DP);
    Some(rounded)
}

/// Format ranked sellers into report lines, preserving their order
///
/// # Errors
///
/// Returns `NonFiniteAmount` for a NaN or infinite money value and
/// `AmountOutOfRange` for a finite one too large to round.
pub fn format_reports(ranked: &[SellerStat]) -> Result<Vec<SellerReport>, ReportError> {
    ranked.iter().map(format_report).collect()
}

fn format_report(stat: &SellerStat) -> Result<SellerReport, ReportError> {
    let money = |value: f64, field: &str| {
        round_money(value).ok_or_else(|| {
            if value.is_finite() {
                ReportError::amount_out_of_range(&stat.id, field)
            } else {
                ReportError::non_finite_amount(&stat.id, field)
            }
        })
    };

    Ok(SellerReport {
        seller_id: stat.id.clone(),
        name: stat.name.clone(),
        revenue: money(stat.revenue, "revenue")?,
        profit: money(stat.profit, "profit")?,
        sales_count: stat.sales_count,
        top_products: stat.top_products.clone(),
        bonus: money(stat.bonus, "bonus")?,
    })
}
