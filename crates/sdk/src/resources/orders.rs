//! Order resource operations.

use galleria_core::{Order, OrderCreate, OrderId, OrderSearch, OrderUpdate, Page};

use crate::connection::Connection;
use crate::error::Error;

/// `POST /orders` — check out a cart into an order.
///
/// # Errors
///
/// Fails if the cart is empty, already checked out, or owned by someone
/// other than the calling customer.
pub async fn create(conn: &Connection, body: &OrderCreate) -> Result<Order, Error> {
    conn.post("orders", body).await
}

/// `GET /orders/{id}`.
pub async fn at(conn: &Connection, id: OrderId) -> Result<Order, Error> {
    conn.get(&format!("orders/{id}")).await
}

/// `PUT /orders/{id}` — status/note update.
///
/// Illegal status transitions (e.g. delivered back to pending) are rejected
/// by the backend.
pub async fn update(conn: &Connection, id: OrderId, body: &OrderUpdate) -> Result<Order, Error> {
    conn.put(&format!("orders/{id}"), body).await
}

/// `DELETE /orders/{id}` — cancel and soft-delete a pending order.
pub async fn erase(conn: &Connection, id: OrderId) -> Result<(), Error> {
    conn.delete(&format!("orders/{id}")).await
}

/// `GET /orders` — the calling customer's orders, newest first.
pub async fn index(conn: &Connection) -> Result<Page<Order>, Error> {
    conn.get("orders").await
}

/// `POST /orders/search`.
pub async fn search(conn: &Connection, body: &OrderSearch) -> Result<Page<Order>, Error> {
    conn.post("orders/search", body).await
}
