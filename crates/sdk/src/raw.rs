//! Loosely-typed escape hatch for negative-path probes.
//!
//! The typed resource modules cannot express a deliberately broken payload
//! (missing required field, wrong field type). Negative tests build a
//! [`serde_json::Value`], tamper with it, and send it through here. Nothing
//! on the production path uses this module.

use serde_json::Value;

use crate::connection::Connection;
use crate::error::Error;

/// `POST {base}/{path}` with an arbitrary JSON body.
///
/// # Errors
///
/// Returns an error on any non-success status or transport failure, which
/// is usually the point of calling it.
pub async fn post(conn: &Connection, path: &str, body: &Value) -> Result<Value, Error> {
    conn.post(path, body).await
}

/// `PUT {base}/{path}` with an arbitrary JSON body.
///
/// # Errors
///
/// Returns an error on any non-success status or transport failure.
pub async fn put(conn: &Connection, path: &str, body: &Value) -> Result<Value, Error> {
    conn.put(path, body).await
}
