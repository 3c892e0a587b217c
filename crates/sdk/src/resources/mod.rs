//! Per-resource operation modules.
//!
//! Each module mirrors one REST resource with the standard operations the
//! backend offers: `create`, `at` (fetch by id), `update`, `erase`,
//! `index` (summary listing) and `search` (filtered pagination). Nested
//! resources sit inside their parent module (`carts::items`,
//! `coupons::tickets`). Every operation issues exactly one request and
//! returns `Err` on any non-success status.

pub mod administrators;
pub mod carts;
pub mod coupons;
pub mod customers;
pub mod orders;
pub mod reviews;
