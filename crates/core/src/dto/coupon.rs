//! Coupon and coupon-ticket DTOs.
//!
//! A coupon is the discount definition an administrator manages; a ticket
//! is one customer's claim on it, nested under
//! `coupons/{coupon_id}/tickets/{ticket_id}`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{CouponId, CouponTicketId, CustomerId, Price, TicketStatus};

/// A coupon definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Coupon {
    pub id: CouponId,
    /// Unique human-readable code (e.g. "SUMMER25").
    pub code: String,
    /// Flat discount applied at checkout.
    pub discount: Price,
    /// Tickets issued after this instant are rejected.
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// Body for `POST /coupons`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CouponCreate {
    pub code: String,
    pub discount: Price,
    pub expires_at: DateTime<Utc>,
}

/// Body for `PUT /coupons/{id}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CouponUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount: Option<Price>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
}

/// Body for `POST /coupons/search`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CouponSearch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Exact match on code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

/// One customer's issued ticket for a coupon.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CouponTicket {
    pub id: CouponTicketId,
    pub coupon_id: CouponId,
    pub customer_id: CustomerId,
    pub status: TicketStatus,
    pub issued_at: DateTime<Utc>,
    /// Set once the ticket is spent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redeemed_at: Option<DateTime<Utc>>,
}

/// Body for `POST /coupons/{coupon_id}/tickets` (issue).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TicketIssue {
    /// Customer the ticket is issued to.
    pub customer_id: CustomerId,
}
