//! Paginated search envelope.

use serde::{Deserialize, Serialize};

/// Pagination metadata returned by every search endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// Current page number (1-based).
    pub current: u32,
    /// Page size the backend applied.
    pub limit: u32,
    /// Total number of pages.
    pub pages: u32,
    /// Total number of matching records across all pages.
    pub records: u64,
}

/// A page of search results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    /// Records on this page.
    pub data: Vec<T>,
    /// Pagination metadata.
    pub pagination: Pagination,
}

impl<T> Page<T> {
    /// Whether the result set is empty across all pages.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.pagination.records == 0
    }
}
