//! Shared setup for the e2e probe binaries.
//!
//! # Running Probes
//!
//! ```bash
//! # Start the backend, then:
//! cargo test -p galleria-e2e -- --ignored
//! ```
//!
//! Every probe file calls [`config`] first, which initializes tracing once
//! per test binary and loads the connection settings from the environment.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::sync::Once;

use galleria_harness::config::TestConfig;
use tracing_subscriber::EnvFilter;

static TRACING: Once = Once::new();

/// Initialize the tracing subscriber once per test binary.
///
/// Honors `RUST_LOG`; the swallowed errors from negative probes show up
/// at debug level.
pub fn init_tracing() {
    TRACING.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init()
            .ok();
    });
}

/// Load the test configuration, initializing tracing as a side effect.
///
/// # Panics
///
/// Panics if `MALL_API_BASE_URL` is set to something unparsable; a broken
/// environment should fail the whole binary loudly, not probe by probe.
#[must_use]
pub fn config() -> TestConfig {
    init_tracing();
    TestConfig::from_env().expect("test environment is misconfigured")
}
