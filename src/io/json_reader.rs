//! JSON loader for the data bundle
//!
//! Reads the whole bundle into memory; the report needs every catalog entry
//! before the first purchase record can be joined.
//!
//! # Error Handling
//!
//! - A missing file is reported as `FileNotFound`
//! - Other open/read failures become `IoError`
//! - Malformed JSON becomes `ParseError` with the offending line
//! - A literal `null` document is rejected as `InvalidInput`

use crate::types::{DataBundle, ReportError};
use std::fs::File;
use std::io::{BufReader, ErrorKind, Read};
use std::path::Path;

/// Load a data bundle from a JSON file
pub fn read_bundle(path: &Path) -> Result<DataBundle, ReportError> {
    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ReportError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => ReportError::from(e),
    })?;

    let bundle = parse_bundle(BufReader::new(file))?;
    tracing::debug!(
        path = %path.display(),
        sellers = bundle.sellers.len(),
        products = bundle.products.len(),
        customers = bundle.customers.len(),
        purchase_records = bundle.purchase_records.len(),
        "loaded data bundle"
    );
    Ok(bundle)
}

/// Parse a data bundle from any JSON reader
pub fn parse_bundle<R: Read>(reader: R) -> Result<DataBundle, ReportError> {
    let bundle: Option<DataBundle> = serde_json::from_reader(reader)?;
    bundle.ok_or_else(|| ReportError::invalid_input("data bundle is null"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const BUNDLE: &str = r#"{
        "sellers": [{"id": "S1", "first_name": "Ann", "last_name": "Lee", "position": "Senior"}],
        "products": [{"sku": "P1", "purchase_price": 10, "name": "Lamp", "category": "Home"}],
        "customers": [{"id": "C1", "first_name": "Max", "last_name": "Doe"}],
        "purchase_records": [{
            "receipt_id": "R1",
            "date": "2023-12-04",
            "seller_id": "S1",
            "customer_id": "C1",
            "items": [{"sku": "P1", "quantity": 2, "sale_price": 50, "discount": 0}],
            "total_amount": 90,
            "total_discount": 10
        }]
    }"#;

    #[test]
    fn test_parse_bundle_ignores_unknown_fields() {
        let bundle = parse_bundle(BUNDLE.as_bytes()).unwrap();

        assert_eq!(bundle.sellers[0].id, "S1");
        assert_eq!(bundle.products[0].purchase_price, 10.0);
        assert_eq!(bundle.products[0].name.as_deref(), Some("Lamp"));
        assert_eq!(bundle.customers.len(), 1);

        let record = &bundle.purchase_records[0];
        assert_eq!(record.receipt_id.as_deref(), Some("R1"));
        assert_eq!(record.total_amount, 90.0);
        assert_eq!(record.items[0].quantity, 2);
        assert_eq!(record.items[0].sale_price, 50.0);
    }

    #[test]
    fn test_missing_sequences_default_to_empty() {
        let bundle = parse_bundle(r#"{"sellers": []}"#.as_bytes()).unwrap();
        assert!(bundle.products.is_empty());
        assert!(bundle.customers.is_empty());
        assert!(bundle.purchase_records.is_empty());
    }

    #[test]
    fn test_null_sequences_default_to_empty() {
        let json = r#"{"sellers": null, "products": null, "customers": null,
            "purchase_records": [{"seller_id": "S1", "total_amount": 1, "items": null}]}"#;
        let bundle = parse_bundle(json.as_bytes()).unwrap();

        assert!(bundle.sellers.is_empty());
        assert!(bundle.products.is_empty());
        assert!(bundle.customers.is_empty());
        assert!(bundle.purchase_records[0].items.is_empty());
    }

    #[test]
    fn test_missing_discount_defaults_to_zero() {
        let json = r#"{"purchase_records": [{"seller_id": "S1", "total_amount": 1,
            "items": [{"sku": "P1", "quantity": 1, "sale_price": 1}]}]}"#;
        let bundle = parse_bundle(json.as_bytes()).unwrap();
        assert_eq!(bundle.purchase_records[0].items[0].discount, 0.0);
    }

    #[test]
    fn test_null_bundle_is_invalid_input() {
        let result = parse_bundle("null".as_bytes());
        assert_eq!(result, Err(ReportError::invalid_input("data bundle is null")));
    }

    #[rstest]
    #[case::truncated(r#"{"sellers": ["#)]
    #[case::wrong_type(r#"{"sellers": 5}"#)]
    #[case::negative_quantity(
        r#"{"purchase_records": [{"seller_id": "S1", "total_amount": 1,
            "items": [{"sku": "P1", "quantity": -1, "sale_price": 1}]}]}"#
    )]
    #[case::not_json("sellers,products")]
    fn test_malformed_json_is_parse_error(#[case] json: &str) {
        let result = parse_bundle(json.as_bytes());
        assert!(matches!(result, Err(ReportError::ParseError { .. })));
    }

    #[test]
    fn test_read_bundle_from_file() {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(BUNDLE.as_bytes()).unwrap();
        file.flush().unwrap();

        let bundle = read_bundle(file.path()).unwrap();

        assert_eq!(bundle.sellers.len(), 1);
        assert_eq!(bundle.purchase_records.len(), 1);
    }

    #[test]
    fn test_read_bundle_missing_file() {
        let result = read_bundle(Path::new("does/not/exist.json"));
        assert_eq!(
            result,
            Err(ReportError::FileNotFound {
                path: "does/not/exist.json".to_string()
            })
        );
    }
}
