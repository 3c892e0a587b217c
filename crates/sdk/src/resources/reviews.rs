//! Product review resource operations.

use galleria_core::{Page, Review, ReviewCreate, ReviewId, ReviewSearch, ReviewUpdate};

use crate::connection::Connection;
use crate::error::Error;

/// `POST /reviews` — publish a review.
///
/// # Errors
///
/// Fails on a rating outside 1..=5 or an empty title.
pub async fn create(conn: &Connection, body: &ReviewCreate) -> Result<Review, Error> {
    conn.post("reviews", body).await
}

/// `GET /reviews/{id}`.
pub async fn at(conn: &Connection, id: ReviewId) -> Result<Review, Error> {
    conn.get(&format!("reviews/{id}")).await
}

/// `PUT /reviews/{id}` — authors may revise their own review.
pub async fn update(conn: &Connection, id: ReviewId, body: &ReviewUpdate) -> Result<Review, Error> {
    conn.put(&format!("reviews/{id}"), body).await
}

/// `DELETE /reviews/{id}` — hard delete.
pub async fn erase(conn: &Connection, id: ReviewId) -> Result<(), Error> {
    conn.delete(&format!("reviews/{id}")).await
}

/// `GET /reviews` — recent reviews across all products.
pub async fn index(conn: &Connection) -> Result<Page<Review>, Error> {
    conn.get("reviews").await
}

/// `POST /reviews/search`.
pub async fn search(conn: &Connection, body: &ReviewSearch) -> Result<Page<Review>, Error> {
    conn.post("reviews/search", body).await
}
