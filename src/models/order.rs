//! Order records and their line items.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::lenient::{deserialize_opt_amount, deserialize_opt_timestamp};

/// An order as returned by `/api/orders`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    /// The unique identifier of the order.
    pub id: i64,

    /// The user who placed the order.
    pub user_id: i64,

    /// Line items. Absent on backends that return order headers only.
    #[serde(default)]
    pub items: Vec<OrderItem>,

    /// Order status as assigned by the backend (e.g. `"pending"`).
    pub status: String,

    /// Order total, when the backend computes one. Numeric strings are
    /// accepted.
    #[serde(
        default,
        deserialize_with = "deserialize_opt_amount",
        skip_serializing_if = "Option::is_none"
    )]
    pub total_amount: Option<f64>,

    /// When the order was created.
    #[serde(
        default,
        deserialize_with = "deserialize_opt_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<DateTime<Utc>>,
}

impl Order {
    /// Sum of `quantity * price` over all line items.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn items_total(&self) -> f64 {
        self.items
            .iter()
            .map(|item| item.quantity as f64 * item.price)
            .sum()
    }
}

/// A persisted order line item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderItem {
    /// Line item identifier, if the backend exposes one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Owning order, if the backend exposes it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_id: Option<i64>,

    /// The ordered product.
    pub product_id: i64,

    /// Number of units.
    pub quantity: i64,

    /// Unit price at the time of ordering.
    pub price: f64,
}

/// A line item in an order creation request.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct OrderItemInput {
    /// The product to order.
    pub product_id: i64,
    /// Number of units.
    pub quantity: i64,
    /// Unit price.
    pub price: f64,
}

/// Request body for creating an order.
///
/// `status` is left out of the JSON entirely when `None`, so the backend
/// applies its own default.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NewOrder<'a> {
    /// The user placing the order.
    pub user_id: i64,
    /// Line items.
    pub items: &'a [OrderItemInput],
    /// Initial status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<&'a str>,
}
