//! Error types for the mall backend SDK.

use thiserror::Error;

/// Errors that can occur when calling the mall backend.
///
/// The contract suite never matches on the *kind* of backend failure
/// (not-found vs. forbidden vs. validation); scenario labels document the
/// intent and the probes only assert that an `Err` came back. `Status` still
/// carries the code and body so a failing test prints something useful.
#[derive(Debug, Error)]
pub enum Error {
    /// Transport-level failure (connection refused, timeout, TLS).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend answered with a non-success status.
    #[error("backend returned {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, truncated for diagnostics.
        body: String,
    },

    /// Response body did not decode into the expected DTO.
    #[error("decode error: {0}")]
    Decode(String),

    /// The configured base URL could not be parsed.
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),
}

impl Error {
    /// The HTTP status code, if the backend answered at all.
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::Status {
            status: 404,
            body: "no such customer".to_string(),
        };
        assert_eq!(err.to_string(), "backend returned 404: no such customer");

        let err = Error::InvalidBaseUrl("not a url".to_string());
        assert_eq!(err.to_string(), "invalid base URL: not a url");
    }

    #[test]
    fn test_status_code_accessor() {
        let err = Error::Status {
            status: 422,
            body: String::new(),
        };
        assert_eq!(err.status_code(), Some(422));

        let err = Error::Decode("unexpected EOF".to_string());
        assert_eq!(err.status_code(), None);
    }
}
