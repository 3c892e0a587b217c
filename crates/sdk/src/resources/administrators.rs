//! Administrator resource operations.
//!
//! All of these require the admin bearer token; the backend answers
//! forbidden for customer tokens and unauthorized for anonymous calls.

use galleria_core::{
    Administrator, AdministratorCreate, AdministratorId, AdministratorSearch, AdministratorUpdate,
    Page,
};

use crate::connection::Connection;
use crate::error::Error;

/// `POST /administrators` — invite a new administrator.
pub async fn create(conn: &Connection, body: &AdministratorCreate) -> Result<Administrator, Error> {
    conn.post("administrators", body).await
}

/// `GET /administrators/{id}`.
pub async fn at(conn: &Connection, id: AdministratorId) -> Result<Administrator, Error> {
    conn.get(&format!("administrators/{id}")).await
}

/// `PUT /administrators/{id}`.
pub async fn update(
    conn: &Connection,
    id: AdministratorId,
    body: &AdministratorUpdate,
) -> Result<Administrator, Error> {
    conn.put(&format!("administrators/{id}"), body).await
}

/// `DELETE /administrators/{id}` — soft delete.
pub async fn erase(conn: &Connection, id: AdministratorId) -> Result<(), Error> {
    conn.delete(&format!("administrators/{id}")).await
}

/// `GET /administrators` — summary listing.
pub async fn index(conn: &Connection) -> Result<Page<Administrator>, Error> {
    conn.get("administrators").await
}

/// `POST /administrators/search`.
pub async fn search(
    conn: &Connection,
    body: &AdministratorSearch,
) -> Result<Page<Administrator>, Error> {
    conn.post("administrators/search", body).await
}
