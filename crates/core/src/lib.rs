//! Galleria Core - Shared types library.
//!
//! This crate provides the types exchanged between the contract-test suite
//! and the shopping-mall backend:
//! - `sdk` - HTTP call surface over these types
//! - `harness` - fixture builders and structural assertions
//! - `e2e` - per-resource contract probes
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients. The suite
//! does not own the backend's invariants; these DTOs mirror its schema so
//! responses can be decoded and echoed fields compared.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe ids, emails, prices, and statuses
//! - [`dto`] - Entity, request-body, and page-envelope shapes per resource

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod dto;
pub mod types;

pub use dto::*;
pub use types::*;
