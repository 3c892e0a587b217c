//! Galleria Harness - the reusable core of the contract suite.
//!
//! Every e2e probe follows the same three-step pattern this crate exists
//! to serve: build fixture(s), invoke one or more SDK calls in sequence,
//! assert on the result or on the expected failure.
//!
//! ```no_run
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! use galleria_harness::{config::TestConfig, fixtures, negative, shapes};
//! use galleria_sdk::customers;
//!
//! let conn = TestConfig::from_env()?.as_customer()?;
//!
//! // Positive: create, then check the response shape and echo.
//! let body = fixtures::customer_create();
//! let created = customers::create(&conn, &body).await?;
//! shapes::assert_dto_conforms(&created, &shapes::customer());
//! assert_eq!(created.email, body.email);
//!
//! // Negative: the same email a second time must be rejected.
//! negative::expect_error("duplicate email on join", customers::create(&conn, &body)).await;
//! # Ok(())
//! # }
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod assertions;
pub mod config;
pub mod fixtures;
pub mod negative;
pub mod postcondition;
pub mod shapes;

pub use assertions::{FieldKind, Shape, ShapeError, assert_conforms};
pub use negative::expect_error;
pub use postcondition::unverifiable;
