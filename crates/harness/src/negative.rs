//! The "expect failure" wrapper for negative probes.
//!
//! A negative probe succeeds only if the operation under test fails. The
//! wrapper makes no distinction between failure kinds (not-found vs.
//! forbidden vs. validation); the scenario label documents intent and the
//! check is existence-of-error only.

use core::fmt::Display;
use std::future::Future;

use thiserror::Error;

/// The operation a negative probe expected to fail resolved successfully.
#[derive(Debug, Error)]
#[error("expected failure: `{0}` resolved successfully")]
pub struct UnexpectedSuccess(String);

impl UnexpectedSuccess {
    /// The scenario label the probe was run under.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.0
    }
}

/// Run `operation` and report whether it failed as expected.
///
/// Any `Err` counts as success regardless of kind; the swallowed error is
/// logged at debug so a curious run can still see what the backend said.
///
/// # Errors
///
/// Returns [`UnexpectedSuccess`] if the operation resolved `Ok`.
pub async fn outcome<T, E, F>(label: &str, operation: F) -> Result<(), UnexpectedSuccess>
where
    F: Future<Output = Result<T, E>>,
    E: Display,
{
    match operation.await {
        Ok(_) => Err(UnexpectedSuccess(label.to_string())),
        Err(e) => {
            tracing::debug!(scenario = label, error = %e, "expected failure observed");
            Ok(())
        }
    }
}

/// Run `operation`, failing the enclosing test if it does NOT fail.
///
/// # Panics
///
/// Panics with the scenario label when the operation resolves `Ok`.
pub async fn expect_error<T, E, F>(label: &str, operation: F)
where
    F: Future<Output = Result<T, E>>,
    E: Display,
{
    if let Err(e) = outcome(label, operation).await {
        panic!("{e}");
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[derive(Debug, thiserror::Error)]
    #[error("boom")]
    struct Boom;

    #[tokio::test]
    async fn test_outcome_rejects_a_resolving_operation() {
        let result = outcome("should have failed", async { Ok::<_, Boom>(42) }).await;
        let err = result.unwrap_err();
        assert_eq!(err.label(), "should have failed");
    }

    #[tokio::test]
    async fn test_outcome_accepts_any_error_kind() {
        // A unit error
        assert!(
            outcome("unit", async { Err::<(), _>(Boom) })
                .await
                .is_ok()
        );

        // A plain string error works just as well; kind is never inspected
        assert!(
            outcome("string", async { Err::<u8, _>("validation failed") })
                .await
                .is_ok()
        );
    }

    #[tokio::test]
    async fn test_expect_error_swallows_the_failure() {
        // Must complete without panicking
        expect_error("backend rejects this", async { Err::<(), _>(Boom) }).await;
    }

    #[tokio::test]
    #[should_panic(expected = "expected failure: `listing succeeds` resolved successfully")]
    async fn test_expect_error_panics_on_success() {
        expect_error("listing succeeds", async { Ok::<_, Boom>(()) }).await;
    }
}
