//! Request and response shapes for each mall resource.
//!
//! These are pass-through DTOs: the backend owns their invariants, this
//! suite only instantiates plausible values and decodes what comes back.
//! Entity structs mirror responses; `*Create`/`*Update` structs mirror
//! request bodies; `*Search` structs mirror the filtered-search bodies.

pub mod administrator;
pub mod cart;
pub mod coupon;
pub mod customer;
pub mod order;
pub mod page;
pub mod review;

pub use administrator::*;
pub use cart::*;
pub use coupon::*;
pub use customer::*;
pub use order::*;
pub use page::*;
pub use review::*;
