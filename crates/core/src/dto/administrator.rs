//! Administrator DTOs.
//!
//! Administrator endpoints require the admin bearer token; customer-scoped
//! or anonymous calls are rejected by the backend.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{AdministratorId, Email};

/// An administrator account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Administrator {
    pub id: AdministratorId,
    /// Unique login email.
    pub email: Email,
    /// Full display name.
    pub name: String,
    pub created_at: DateTime<Utc>,
    /// Soft-delete timestamp; `None` while the account is active.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Body for `POST /administrators`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdministratorCreate {
    pub email: Email,
    pub name: String,
    pub password: String,
}

/// Body for `PUT /administrators/{id}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AdministratorUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<Email>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Body for `POST /administrators/search`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AdministratorSearch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Substring match on name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}
