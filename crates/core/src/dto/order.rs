//! Order DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{CartId, CustomerId, OrderId, OrderStatus, Price};

/// An order as the backend returns it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub customer_id: CustomerId,
    pub status: OrderStatus,
    /// Grand total including any redeemed coupon discount.
    pub total: Price,
    /// Number of line items captured from the cart.
    pub item_count: u32,
    pub created_at: DateTime<Utc>,
    /// Set when the order reaches `cancelled`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cancelled_at: Option<DateTime<Utc>>,
}

/// Body for `POST /orders`: converts a cart into an order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCreate {
    /// Cart to check out; must belong to the calling customer.
    pub cart_id: CartId,
    /// Free-form note shown to fulfillment staff.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Body for `PUT /orders/{id}`. Status transitions the backend considers
/// illegal (e.g. delivered back to pending) are rejected with an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Body for `POST /orders/search`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderSearch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderStatus>,
    /// Only orders with a total at or above this amount.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_total: Option<Price>,
}
