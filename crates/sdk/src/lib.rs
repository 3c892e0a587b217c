//! Galleria SDK - typed call surface for the shopping-mall backend.
//!
//! Mirrors the backend's REST API one module per resource. Every operation
//! takes a [`Connection`] (transport configuration plus auth headers),
//! issues exactly one request, and returns the decoded DTO or an [`Error`].
//! Non-success statuses always become `Err`, so contract probes assert on
//! failure by matching the `Result`, never a status flag:
//!
//! ```no_run
//! # async fn demo(conn: &galleria_sdk::Connection) -> Result<(), galleria_sdk::Error> {
//! use galleria_core::CustomerId;
//! use galleria_sdk::customers;
//!
//! // Fetching a random, unknown id must fail.
//! assert!(customers::at(conn, CustomerId::random()).await.is_err());
//! # Ok(())
//! # }
//! ```
//!
//! The [`raw`] module is the one loosely-typed door, reserved for
//! negative-test payload tampering.

#![cfg_attr(not(test), forbid(unsafe_code))]

mod connection;
mod error;
mod resources;

pub mod raw;

pub use connection::Connection;
pub use error::Error;
pub use resources::{administrators, carts, coupons, customers, orders, reviews};
