//! Cart resource operations, with items nested underneath.

use galleria_core::{Cart, CartCreate, CartId, Page};

use crate::connection::Connection;
use crate::error::Error;

/// `POST /carts` — open a new (possibly guest) cart.
pub async fn create(conn: &Connection, body: &CartCreate) -> Result<Cart, Error> {
    conn.post("carts", body).await
}

/// `GET /carts/{id}`.
pub async fn at(conn: &Connection, id: CartId) -> Result<Cart, Error> {
    conn.get(&format!("carts/{id}")).await
}

/// `DELETE /carts/{id}` — discard a cart and everything in it.
pub async fn erase(conn: &Connection, id: CartId) -> Result<(), Error> {
    conn.delete(&format!("carts/{id}")).await
}

/// `GET /carts` — the calling customer's open carts.
pub async fn index(conn: &Connection) -> Result<Page<Cart>, Error> {
    conn.get("carts").await
}

/// Line items nested under a cart: `carts/{cart_id}/items/{item_id}`.
pub mod items {
    use galleria_core::{CartItem, CartItemCreate, CartItemId, CartItemUpdate};

    use super::{CartId, Connection, Error};

    /// `POST /carts/{cart_id}/items` — add a line item.
    ///
    /// # Errors
    ///
    /// Fails on zero quantity or a non-positive unit price.
    pub async fn create(
        conn: &Connection,
        cart_id: CartId,
        body: &CartItemCreate,
    ) -> Result<CartItem, Error> {
        conn.post(&format!("carts/{cart_id}/items"), body).await
    }

    /// `GET /carts/{cart_id}/items/{item_id}`.
    pub async fn at(
        conn: &Connection,
        cart_id: CartId,
        item_id: CartItemId,
    ) -> Result<CartItem, Error> {
        conn.get(&format!("carts/{cart_id}/items/{item_id}")).await
    }

    /// `PUT /carts/{cart_id}/items/{item_id}` — change the quantity.
    pub async fn update(
        conn: &Connection,
        cart_id: CartId,
        item_id: CartItemId,
        body: &CartItemUpdate,
    ) -> Result<CartItem, Error> {
        conn.put(&format!("carts/{cart_id}/items/{item_id}"), body)
            .await
    }

    /// `DELETE /carts/{cart_id}/items/{item_id}` — remove a line item.
    pub async fn erase(
        conn: &Connection,
        cart_id: CartId,
        item_id: CartItemId,
    ) -> Result<(), Error> {
        conn.delete(&format!("carts/{cart_id}/items/{item_id}"))
            .await
    }

    /// `GET /carts/{cart_id}/items` — all line items in the cart.
    ///
    /// Returns a plain array; cart items are never paginated.
    pub async fn index(conn: &Connection, cart_id: CartId) -> Result<Vec<CartItem>, Error> {
        conn.get(&format!("carts/{cart_id}/items")).await
    }
}
