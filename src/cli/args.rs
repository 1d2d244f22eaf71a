use crate::strategy::{ReportConfig, STANDARD};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Build a per-seller performance report from sales data
#[derive(Parser, Debug)]
#[command(name = "seller-report")]
#[command(about = "Build a per-seller performance report from sales data", long_about = None)]
pub struct CliArgs {
    /// Input JSON file containing sellers, products, customers and purchase records
    #[arg(value_name = "INPUT", help = "Path to the input JSON data bundle")]
    pub input_file: PathBuf,

    /// Output format for the report
    #[arg(
        long = "format",
        value_name = "FORMAT",
        default_value = "json",
        help = "Report format: 'json' or 'csv'"
    )]
    pub format: OutputFormat,

    /// Revenue strategy applied to each line item
    #[arg(
        long = "revenue-strategy",
        value_name = "NAME",
        default_value = STANDARD,
        help = "Revenue strategy: 'standard' (discounted) or 'gross'"
    )]
    pub revenue_strategy: String,

    /// Bonus strategy applied to each ranked seller
    #[arg(
        long = "bonus-strategy",
        value_name = "NAME",
        default_value = STANDARD,
        help = "Bonus strategy: 'standard' (rank tiers) or 'none'"
    )]
    pub bonus_strategy: String,

    /// Maximum number of top products listed per seller
    #[arg(
        long = "top-products",
        value_name = "COUNT",
        help = "Number of top products per seller (default: 10)"
    )]
    pub top_products: Option<usize>,
}

/// Available report output formats
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Csv,
}

impl CliArgs {
    /// Create a ReportConfig from CLI arguments
    ///
    /// Strategy names are passed through unchecked; unknown names are
    /// rejected when the report is generated. A missing or zero
    /// `--top-products` falls back to the default.
    pub fn to_report_config(&self) -> ReportConfig {
        ReportConfig::named(
            &self.revenue_strategy,
            &self.bonus_strategy,
            self.top_products
                .unwrap_or(ReportConfig::DEFAULT_TOP_PRODUCTS),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::StrategySlot;
    use rstest::rstest;

    #[rstest]
    #[case::default_format(&["program", "input.json"], OutputFormat::Json)]
    #[case::explicit_json(&["program", "--format", "json", "input.json"], OutputFormat::Json)]
    #[case::explicit_csv(&["program", "--format", "csv", "input.json"], OutputFormat::Csv)]
    fn test_format_parsing(#[case] args: &[&str], #[case] expected: OutputFormat) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.format, expected);
    }

    #[rstest]
    #[case::defaults(&["program", "input.json"], "standard", "standard")]
    #[case::gross(&["program", "--revenue-strategy", "gross", "input.json"], "gross", "standard")]
    #[case::no_bonus(&["program", "--bonus-strategy", "none", "input.json"], "standard", "none")]
    #[case::unknown_passes_through(&["program", "--bonus-strategy", "magic", "input.json"], "standard", "magic")]
    fn test_strategy_names(
        #[case] args: &[&str],
        #[case] revenue: &str,
        #[case] bonus: &str,
    ) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        let config = parsed.to_report_config();

        assert!(matches!(
            config.calculate_revenue,
            Some(StrategySlot::Named(ref name)) if name == revenue
        ));
        assert!(matches!(
            config.calculate_bonus,
            Some(StrategySlot::Named(ref name)) if name == bonus
        ));
    }

    #[rstest]
    #[case::default(&["program", "input.json"], 10)]
    #[case::custom(&["program", "--top-products", "3", "input.json"], 3)]
    #[case::zero_falls_back(&["program", "--top-products", "0", "input.json"], 10)]
    fn test_top_products_config(#[case] args: &[&str], #[case] expected: usize) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.to_report_config().top_products_limit, expected);
    }

    #[rstest]
    #[case::missing_input(&["program"])]
    #[case::invalid_format(&["program", "--format", "xml", "input.json"])]
    #[case::negative_top_products(&["program", "--top-products", "-1", "input.json"])]
    fn test_parsing_errors(#[case] args: &[&str]) {
        let result = CliArgs::try_parse_from(args);
        assert!(result.is_err());
    }
}
