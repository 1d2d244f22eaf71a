//! Error types for the seller performance report
//!
//! This module defines every error that can abort report generation.
//! None of them are recoverable: the pipeline either returns a complete
//! report or one of these errors, never a partial result.
//!
//! # Error Categories
//!
//! - **Input Errors**: malformed or empty data bundle, unresolved seller/product references
//! - **Configuration Errors**: missing or unknown calculation strategies
//! - **Arithmetic Errors**: non-finite money values produced by a strategy
//! - **File I/O Errors**: file not found, unreadable input, unwritable output

use std::fmt;
use thiserror::Error;

/// Which catalog a purchase record failed to resolve against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceKind {
    Seller,
    Product,
}

impl fmt::Display for ReferenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReferenceKind::Seller => f.write_str("seller"),
            ReferenceKind::Product => f.write_str("product"),
        }
    }
}

/// Main error type for report generation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ReportError {
    /// The data bundle is null, or one of its required sequences is missing or empty
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// What is wrong with the bundle
        reason: String,
    },

    /// A required calculation strategy was not supplied
    #[error("Missing configuration: strategy '{strategy}' is required")]
    MissingConfiguration {
        /// Name of the absent strategy slot
        strategy: String,
    },

    /// A supplied strategy does not resolve to anything that can be invoked
    #[error("Invalid strategy for '{strategy}': '{name}' is not a known strategy")]
    InvalidStrategyType {
        /// Name of the strategy slot
        strategy: String,
        /// The value that was supplied for it
        name: String,
    },

    /// A purchase record references a seller or product that is not in the catalog
    ///
    /// `record` is the zero-based position of the purchase record in the bundle.
    #[error("Unresolved {kind} reference '{key}' in purchase record {record}")]
    UnresolvedReference {
        /// Catalog the lookup went against
        kind: ReferenceKind,
        /// The seller id or sku that was not found
        key: String,
        /// Position of the offending purchase record
        record: usize,
    },

    /// A money value is NaN or infinite and cannot be rounded for output
    #[error("Non-finite {field} for seller {seller_id}")]
    NonFiniteAmount {
        /// Seller whose report could not be formatted
        seller_id: String,
        /// Field that held the bad value
        field: String,
    },

    /// A finite money value is too large to be represented with two decimal places
    #[error("{field} for seller {seller_id} is out of range")]
    AmountOutOfRange {
        /// Seller whose report could not be formatted
        seller_id: String,
        /// Field that held the value
        field: String,
    },

    /// File not found at the specified path
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error occurred while reading or writing files
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// The input could not be parsed as a data bundle
    #[error("JSON parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    ParseError {
        /// Line number where the error occurred (if available)
        line: Option<usize>,
        /// Description of the parsing error
        message: String,
    },

    /// The report could not be serialized to the output
    #[error("Failed to write report: {message}")]
    OutputError {
        /// Description of the write failure
        message: String,
    },
}

impl From<std::io::Error> for ReportError {
    fn from(error: std::io::Error) -> Self {
        ReportError::IoError {
            message: error.to_string(),
        }
    }
}

impl From<serde_json::Error> for ReportError {
    fn from(error: serde_json::Error) -> Self {
        // serde_json reports line 0 for errors that have no position
        let line = Some(error.line()).filter(|&l| l > 0);

        ReportError::ParseError {
            line,
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for ReportError {
    fn from(error: csv::Error) -> Self {
        ReportError::OutputError {
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl ReportError {
    /// Create an InvalidInput error
    pub fn invalid_input(reason: &str) -> Self {
        ReportError::InvalidInput {
            reason: reason.to_string(),
        }
    }

    /// Create a MissingConfiguration error
    pub fn missing_configuration(strategy: &str) -> Self {
        ReportError::MissingConfiguration {
            strategy: strategy.to_string(),
        }
    }

    /// Create an InvalidStrategyType error
    pub fn invalid_strategy_type(strategy: &str, name: &str) -> Self {
        ReportError::InvalidStrategyType {
            strategy: strategy.to_string(),
            name: name.to_string(),
        }
    }

    /// Create an UnresolvedReference error for a seller id
    pub fn unresolved_seller(seller_id: &str, record: usize) -> Self {
        ReportError::UnresolvedReference {
            kind: ReferenceKind::Seller,
            key: seller_id.to_string(),
            record,
        }
    }

    /// Create an UnresolvedReference error for a product sku
    pub fn unresolved_product(sku: &str, record: usize) -> Self {
        ReportError::UnresolvedReference {
            kind: ReferenceKind::Product,
            key: sku.to_string(),
            record,
        }
    }

    /// Create a NonFiniteAmount error
    pub fn non_finite_amount(seller_id: &str, field: &str) -> Self {
        ReportError::NonFiniteAmount {
            seller_id: seller_id.to_string(),
            field: field.to_string(),
        }
    }

    /// Create an AmountOutOfRange error
    pub fn amount_out_of_range(seller_id: &str, field: &str) -> Self {
        ReportError::AmountOutOfRange {
            seller_id: seller_id.to_string(),
            field: field.to_string(),
        }
    }
}
