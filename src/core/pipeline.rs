//! Report pipeline
//!
//! Entry point of the core: runs validation, indexing, accumulation, ranking
//! and formatting in that order. The pipeline is a pure function of its two
//! inputs. It either returns one report line per seller, ordered by profit,
//! or the first error encountered; no partial report is ever produced.

use super::accumulator::accumulate;
use super::formatter::format_reports;
use super::indexer::build_index;
use super::ranker::rank_sellers;
use super::validator::validate;
use crate::strategy::ReportConfig;
use crate::types::{DataBundle, ReportError, SellerReport};

/// Build the seller performance report
///
/// # Errors
///
/// - `InvalidInput` if a required sequence of the bundle is empty
/// - `MissingConfiguration` / `InvalidStrategyType` for a bad strategy configuration
/// - `UnresolvedReference` if a record names an unknown seller or sku
/// - `NonFiniteAmount` if a strategy produced a NaN or infinite amount
/// - `AmountOutOfRange` if a finite amount is too large to round
pub fn generate_report(
    bundle: &DataBundle,
    config: &ReportConfig,
) -> Result<Vec<SellerReport>, ReportError> {
    let strategies = validate(bundle, config)?;

    let mut index = build_index(&bundle.sellers, &bundle.products);
    tracing::debug!(
        sellers = index.sellers.len(),
        products = index.products.len(),
        "indexed catalogs"
    );

    accumulate(&mut index, &bundle.purchase_records, strategies.revenue)?;

    let ranked = rank_sellers(index.sellers, strategies.bonus, config.top_products_limit);
    let reports = format_reports(&ranked)?;

    tracing::info!(
        sellers = reports.len(),
        purchase_records = bundle.purchase_records.len(),
        "seller report generated"
    );
    Ok(reports)
}
