//! Customer resource operations.

use galleria_core::{Customer, CustomerCreate, CustomerId, CustomerSearch, CustomerUpdate, Page};

use crate::connection::Connection;
use crate::error::Error;

/// `POST /customers` — join as a new customer.
///
/// # Errors
///
/// Fails on duplicate email (conflict) or an invalid body.
pub async fn create(conn: &Connection, body: &CustomerCreate) -> Result<Customer, Error> {
    conn.post("customers", body).await
}

/// `GET /customers/{id}` — fetch one customer.
pub async fn at(conn: &Connection, id: CustomerId) -> Result<Customer, Error> {
    conn.get(&format!("customers/{id}")).await
}

/// `PUT /customers/{id}` — partial update; unset fields are kept.
pub async fn update(
    conn: &Connection,
    id: CustomerId,
    body: &CustomerUpdate,
) -> Result<Customer, Error> {
    conn.put(&format!("customers/{id}"), body).await
}

/// `DELETE /customers/{id}` — soft delete.
///
/// The backend stamps `deleted_at` but offers no read-back of erased
/// accounts, so post-conditions on the timestamp are unverifiable here.
pub async fn erase(conn: &Connection, id: CustomerId) -> Result<(), Error> {
    conn.delete(&format!("customers/{id}")).await
}

/// `GET /customers` — summary listing with default pagination.
pub async fn index(conn: &Connection) -> Result<Page<Customer>, Error> {
    conn.get("customers").await
}

/// `POST /customers/search` — filtered pagination.
pub async fn search(conn: &Connection, body: &CustomerSearch) -> Result<Page<Customer>, Error> {
    conn.post("customers/search", body).await
}
