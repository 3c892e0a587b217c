//! Product review DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{CustomerId, ProductId, ReviewId};

/// A product review.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    pub id: ReviewId,
    pub product_id: ProductId,
    pub customer_id: CustomerId,
    /// Star rating, 1 through 5 inclusive (backend-enforced).
    pub rating: u8,
    pub title: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Body for `POST /reviews`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewCreate {
    pub product_id: ProductId,
    pub rating: u8,
    pub title: String,
    pub body: String,
}

/// Body for `PUT /reviews/{id}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReviewUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

/// Body for `POST /reviews/search`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReviewSearch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<ProductId>,
    /// Only reviews at or above this rating.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_rating: Option<u8>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_update_body_omits_unset_fields() {
        let body = ReviewUpdate {
            rating: Some(4),
            ..ReviewUpdate::default()
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json, serde_json::json!({ "rating": 4 }));
    }

    #[test]
    fn test_review_decodes_without_updated_at() {
        let json = serde_json::json!({
            "id": "4b1e3f5c-0b2a-4e1f-9c8d-7a6b5c4d3e2f",
            "product_id": "0e9d8c7b-6a5f-4e3d-2c1b-0a9f8e7d6c5b",
            "customer_id": "1a2b3c4d-5e6f-4a8b-9c0d-1e2f3a4b5c6d",
            "rating": 5,
            "title": "Great",
            "body": "Arrived fast.",
            "created_at": "2026-08-01T12:00:00Z"
        });

        let review: Review = serde_json::from_value(json).unwrap();
        assert_eq!(review.rating, 5);
        assert!(review.updated_at.is_none());
    }
}
