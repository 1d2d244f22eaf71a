//! The input data bundle

use super::catalog::{Customer, Product, Seller};
use super::purchase::PurchaseRecord;
use serde::{Deserialize, Deserializer};

/// Everything the report is computed from
///
/// A sequence that is absent from the JSON input, or given as `null`,
/// deserializes as empty, so the validator reports it the same way as an
/// explicitly empty one.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DataBundle {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub sellers: Vec<Seller>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub products: Vec<Product>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub customers: Vec<Customer>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub purchase_records: Vec<PurchaseRecord>,
}

pub(crate) fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
