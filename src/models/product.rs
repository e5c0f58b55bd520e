//! Product records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::lenient::deserialize_opt_timestamp;

/// A catalog product as returned by `/api/products`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// The unique identifier of the product.
    pub id: i64,

    /// The product name.
    pub name: String,

    /// Free-form description. Some backends send `null` for an empty one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Unit price.
    pub price: f64,

    /// Units in stock.
    pub stock: i64,

    /// When the product was created.
    #[serde(
        default,
        deserialize_with = "deserialize_opt_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<DateTime<Utc>>,
}

/// Request body for creating a product.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NewProduct<'a> {
    /// The product name.
    pub name: &'a str,
    /// The product description.
    pub description: &'a str,
    /// Unit price.
    pub price: f64,
    /// Initial stock.
    pub stock: i64,
}
