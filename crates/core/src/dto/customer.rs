//! Customer DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{CustomerId, Email};

/// A customer record as the backend returns it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    /// Backend-assigned id.
    pub id: CustomerId,
    /// Unique login email.
    pub email: Email,
    /// Public display name.
    pub nickname: String,
    /// Mobile number in E.164-ish form (e.g. "+82-10-1234-5678").
    pub mobile: String,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
    /// Soft-delete timestamp; `None` while the account is active.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Body for `POST /customers` (join).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerCreate {
    pub email: Email,
    pub nickname: String,
    pub mobile: String,
    pub password: String,
}

/// Body for `PUT /customers/{id}`. Unset fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomerUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<Email>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,
}

/// Body for `POST /customers/search`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomerSearch {
    /// 1-based page number; backend defaults to 1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Page size; backend defaults to 10.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Substring match on nickname.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    /// Exact match on email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<Email>,
}
