//! Cart and cart-item DTOs.
//!
//! Items are a nested resource: `carts/{cart_id}/items/{item_id}`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{CartId, CartItemId, CustomerId, Price, ProductId};

/// A shopping cart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cart {
    pub id: CartId,
    /// Owner; `None` for a guest cart.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<CustomerId>,
    /// Running total across all items.
    pub total: Price,
    pub created_at: DateTime<Utc>,
}

/// Body for `POST /carts`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CartCreate {
    /// Attach the cart to a customer; omit for a guest cart.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<CustomerId>,
}

/// A line item inside a cart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartItem {
    pub id: CartItemId,
    pub cart_id: CartId,
    pub product_id: ProductId,
    /// Product name snapshot taken at add time.
    pub name: String,
    /// Quantity, at least 1.
    pub quantity: u32,
    pub unit_price: Price,
}

/// Body for `POST /carts/{cart_id}/items`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartItemCreate {
    pub product_id: ProductId,
    pub name: String,
    pub quantity: u32,
    pub unit_price: Price,
}

/// Body for `PUT /carts/{cart_id}/items/{item_id}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CartItemUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
}
