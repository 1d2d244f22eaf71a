//! Report serialization
//!
//! Two output formats:
//! - JSON: an array of report objects, money fields as numbers
//! - CSV: one row per seller with columns
//!   `seller_id,name,revenue,profit,sales_count,bonus,top_products`,
//!   money printed with two decimals and top products as `SKU:QTY` pairs
//!   joined by `;`
//!
//! Rows are written in the order given, which is profit rank.

use crate::core::formatter::MONEY_DP;
use crate::types::{ReportError, SellerReport, TopProduct};
use std::io::Write;

/// Write reports as a pretty-printed JSON array followed by a newline
pub fn write_reports_json(
    reports: &[SellerReport],
    output: &mut dyn Write,
) -> Result<(), ReportError> {
    serde_json::to_writer_pretty(&mut *output, reports).map_err(|e| ReportError::OutputError {
        message: e.to_string(),
    })?;
    writeln!(output)?;
    output.flush()?;
    Ok(())
}

/// Write reports as CSV with a header row
pub fn write_reports_csv(
    reports: &[SellerReport],
    output: &mut dyn Write,
) -> Result<(), ReportError> {
    let mut writer = csv::Writer::from_writer(output);

    writer.write_record([
        "seller_id",
        "name",
        "revenue",
        "profit",
        "sales_count",
        "bonus",
        "top_products",
    ])?;

    let dp = MONEY_DP as usize;
    for report in reports {
        writer.write_record(&[
            report.seller_id.clone(),
            report.name.clone(),
            format!("{:.*}", dp, report.revenue),
            format!("{:.*}", dp, report.profit),
            report.sales_count.to_string(),
            format!("{:.*}", dp, report.bonus),
            join_top_products(&report.top_products),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

fn join_top_products(top_products: &[TopProduct]) -> String {
    top_products
        .iter()
        .map(|p| format!("{}:{}", p.sku, p.quantity))
        .collect::<Vec<_>>()
        .join(";")
}
