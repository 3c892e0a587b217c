//! Declared shapes for each mall resource.
//!
//! These mirror the entity DTOs in `galleria-core`, but as runtime
//! descriptors: the probes decode a response, serialize it back to JSON,
//! and check conformance so a silently-lossy DTO field would still be
//! caught.

use serde_json::Value;

use crate::assertions::{FieldKind, Shape, ShapeError, assert_conforms};

/// Customer entity shape.
#[must_use]
pub fn customer() -> Shape {
    Shape::new("customer")
        .field("id", FieldKind::Uuid)
        .field("email", FieldKind::String)
        .field("nickname", FieldKind::String)
        .field("mobile", FieldKind::String)
        .field("created_at", FieldKind::DateTime)
        .optional("deleted_at", FieldKind::DateTime)
}

/// Administrator entity shape.
#[must_use]
pub fn administrator() -> Shape {
    Shape::new("administrator")
        .field("id", FieldKind::Uuid)
        .field("email", FieldKind::String)
        .field("name", FieldKind::String)
        .field("created_at", FieldKind::DateTime)
        .optional("deleted_at", FieldKind::DateTime)
}

/// Order entity shape.
#[must_use]
pub fn order() -> Shape {
    Shape::new("order")
        .field("id", FieldKind::Uuid)
        .field("customer_id", FieldKind::Uuid)
        .field("status", FieldKind::String)
        .field("total", FieldKind::Decimal)
        .field("item_count", FieldKind::Integer)
        .field("created_at", FieldKind::DateTime)
        .optional("cancelled_at", FieldKind::DateTime)
}

/// Cart entity shape.
#[must_use]
pub fn cart() -> Shape {
    Shape::new("cart")
        .field("id", FieldKind::Uuid)
        .optional("customer_id", FieldKind::Uuid)
        .field("total", FieldKind::Decimal)
        .field("created_at", FieldKind::DateTime)
}

/// Cart line-item shape.
#[must_use]
pub fn cart_item() -> Shape {
    Shape::new("cart_item")
        .field("id", FieldKind::Uuid)
        .field("cart_id", FieldKind::Uuid)
        .field("product_id", FieldKind::Uuid)
        .field("name", FieldKind::String)
        .field("quantity", FieldKind::Integer)
        .field("unit_price", FieldKind::Decimal)
}

/// Coupon entity shape.
#[must_use]
pub fn coupon() -> Shape {
    Shape::new("coupon")
        .field("id", FieldKind::Uuid)
        .field("code", FieldKind::String)
        .field("discount", FieldKind::Decimal)
        .field("expires_at", FieldKind::DateTime)
        .field("created_at", FieldKind::DateTime)
}

/// Coupon ticket shape.
#[must_use]
pub fn coupon_ticket() -> Shape {
    Shape::new("coupon_ticket")
        .field("id", FieldKind::Uuid)
        .field("coupon_id", FieldKind::Uuid)
        .field("customer_id", FieldKind::Uuid)
        .field("status", FieldKind::String)
        .field("issued_at", FieldKind::DateTime)
        .optional("redeemed_at", FieldKind::DateTime)
}

/// Review entity shape.
#[must_use]
pub fn review() -> Shape {
    Shape::new("review")
        .field("id", FieldKind::Uuid)
        .field("product_id", FieldKind::Uuid)
        .field("customer_id", FieldKind::Uuid)
        .field("rating", FieldKind::Integer)
        .field("title", FieldKind::String)
        .field("body", FieldKind::String)
        .field("created_at", FieldKind::DateTime)
        .optional("updated_at", FieldKind::DateTime)
}

/// `POST /customers` body shape.
#[must_use]
pub fn customer_create() -> Shape {
    Shape::new("customer_create")
        .field("email", FieldKind::String)
        .field("nickname", FieldKind::String)
        .field("mobile", FieldKind::String)
        .field("password", FieldKind::String)
}

/// `POST /administrators` body shape.
#[must_use]
pub fn administrator_create() -> Shape {
    Shape::new("administrator_create")
        .field("email", FieldKind::String)
        .field("name", FieldKind::String)
        .field("password", FieldKind::String)
}

/// `POST /carts/{cart_id}/items` body shape.
#[must_use]
pub fn cart_item_create() -> Shape {
    Shape::new("cart_item_create")
        .field("product_id", FieldKind::Uuid)
        .field("name", FieldKind::String)
        .field("quantity", FieldKind::Integer)
        .field("unit_price", FieldKind::Decimal)
}

/// `POST /orders` body shape.
#[must_use]
pub fn order_create() -> Shape {
    Shape::new("order_create")
        .field("cart_id", FieldKind::Uuid)
        .optional("note", FieldKind::String)
}

/// `POST /coupons` body shape.
#[must_use]
pub fn coupon_create() -> Shape {
    Shape::new("coupon_create")
        .field("code", FieldKind::String)
        .field("discount", FieldKind::Decimal)
        .field("expires_at", FieldKind::DateTime)
}

/// `POST /coupons/{coupon_id}/tickets` body shape.
#[must_use]
pub fn ticket_issue() -> Shape {
    Shape::new("ticket_issue").field("customer_id", FieldKind::Uuid)
}

/// `POST /reviews` body shape.
#[must_use]
pub fn review_create() -> Shape {
    Shape::new("review_create")
        .field("product_id", FieldKind::Uuid)
        .field("rating", FieldKind::Integer)
        .field("title", FieldKind::String)
        .field("body", FieldKind::String)
}

/// Pagination metadata shape, shared by every search envelope.
#[must_use]
pub fn pagination() -> Shape {
    Shape::new("pagination")
        .field("current", FieldKind::Integer)
        .field("limit", FieldKind::Integer)
        .field("pages", FieldKind::Integer)
        .field("records", FieldKind::Integer)
}

/// Check a `{ data, pagination }` page envelope: the envelope itself, the
/// pagination block, and every element of `data` against `inner`.
///
/// # Errors
///
/// Returns the first mismatch found anywhere in the envelope.
pub fn check_page(value: &Value, inner: &Shape) -> Result<(), ShapeError> {
    let envelope = Shape::new("page")
        .field("data", FieldKind::Array)
        .field("pagination", FieldKind::Object);
    envelope.check(value)?;

    pagination().check(value.get("pagination").unwrap_or(&Value::Null))?;

    if let Some(items) = value.get("data").and_then(Value::as_array) {
        for item in items {
            inner.check(item)?;
        }
    }

    Ok(())
}

/// Panicking form of [`check_page`], for direct use in probes.
///
/// # Panics
///
/// Panics with the mismatch description if any part of the envelope fails.
#[track_caller]
pub fn assert_page_conforms(value: &Value, inner: &Shape) {
    if let Err(e) = check_page(value, inner) {
        panic!("structural assertion failed: {e}");
    }
}

/// Serialize a DTO back to JSON and assert it against a shape.
///
/// # Panics
///
/// Panics if serialization fails or the shape check does.
#[track_caller]
pub fn assert_dto_conforms<T: serde::Serialize>(dto: &T, shape: &Shape) {
    let value = serde_json::to_value(dto).expect("DTOs always serialize to JSON");
    assert_conforms(&value, shape);
}
