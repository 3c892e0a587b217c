//! Coupon resource operations, with tickets nested underneath.
//!
//! Coupon definitions are admin-managed; tickets are issued to customers
//! and move `issued -> redeemed`. Reverting a redeemed ticket is an illegal
//! state transition the backend rejects.

use galleria_core::{Coupon, CouponCreate, CouponId, CouponSearch, CouponUpdate, Page};

use crate::connection::Connection;
use crate::error::Error;

/// `POST /coupons` — define a new coupon (admin only).
///
/// # Errors
///
/// Fails on a duplicate code (conflict) or a non-positive discount.
pub async fn create(conn: &Connection, body: &CouponCreate) -> Result<Coupon, Error> {
    conn.post("coupons", body).await
}

/// `GET /coupons/{id}`.
pub async fn at(conn: &Connection, id: CouponId) -> Result<Coupon, Error> {
    conn.get(&format!("coupons/{id}")).await
}

/// `PUT /coupons/{id}` (admin only).
pub async fn update(conn: &Connection, id: CouponId, body: &CouponUpdate) -> Result<Coupon, Error> {
    conn.put(&format!("coupons/{id}"), body).await
}

/// `DELETE /coupons/{id}` — retire a coupon (admin only).
pub async fn erase(conn: &Connection, id: CouponId) -> Result<(), Error> {
    conn.delete(&format!("coupons/{id}")).await
}

/// `GET /coupons` — currently active coupons.
pub async fn index(conn: &Connection) -> Result<Page<Coupon>, Error> {
    conn.get("coupons").await
}

/// `POST /coupons/search`.
pub async fn search(conn: &Connection, body: &CouponSearch) -> Result<Page<Coupon>, Error> {
    conn.post("coupons/search", body).await
}

/// Tickets nested under a coupon: `coupons/{coupon_id}/tickets/{ticket_id}`.
pub mod tickets {
    use galleria_core::{CouponTicket, CouponTicketId, TicketIssue};

    use super::{Connection, CouponId, Error};

    /// `POST /coupons/{coupon_id}/tickets` — issue a ticket to a customer.
    ///
    /// # Errors
    ///
    /// Fails once the coupon has expired.
    pub async fn issue(
        conn: &Connection,
        coupon_id: CouponId,
        body: &TicketIssue,
    ) -> Result<CouponTicket, Error> {
        conn.post(&format!("coupons/{coupon_id}/tickets"), body).await
    }

    /// `GET /coupons/{coupon_id}/tickets/{ticket_id}`.
    pub async fn at(
        conn: &Connection,
        coupon_id: CouponId,
        ticket_id: CouponTicketId,
    ) -> Result<CouponTicket, Error> {
        conn.get(&format!("coupons/{coupon_id}/tickets/{ticket_id}"))
            .await
    }

    /// `POST /coupons/{coupon_id}/tickets/{ticket_id}/redeem` — spend the
    /// ticket. Redeeming twice is a conflict.
    pub async fn redeem(
        conn: &Connection,
        coupon_id: CouponId,
        ticket_id: CouponTicketId,
    ) -> Result<CouponTicket, Error> {
        conn.post(
            &format!("coupons/{coupon_id}/tickets/{ticket_id}/redeem"),
            &serde_json::json!({}),
        )
        .await
    }

    /// `POST /coupons/{coupon_id}/tickets/{ticket_id}/revert` — put an
    /// issued-but-expiring ticket back into circulation (admin only).
    ///
    /// # Errors
    ///
    /// The backend rejects reverting a ticket that was already redeemed.
    pub async fn revert(
        conn: &Connection,
        coupon_id: CouponId,
        ticket_id: CouponTicketId,
    ) -> Result<CouponTicket, Error> {
        conn.post(
            &format!("coupons/{coupon_id}/tickets/{ticket_id}/revert"),
            &serde_json::json!({}),
        )
        .await
    }
}
