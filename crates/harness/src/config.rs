//! Test configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional; defaults target a locally seeded backend:
//! - `MALL_API_BASE_URL` - backend base URL (default: `http://localhost:37001`)
//! - `MALL_CUSTOMER_TOKEN` - bearer token for a seeded customer account
//!   (default: `customer-test-token`)
//! - `MALL_ADMIN_TOKEN` - bearer token for a seeded administrator account
//!   (default: `admin-test-token`)

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;
use url::Url;

use galleria_sdk::Connection;

const DEFAULT_BASE_URL: &str = "http://localhost:37001";
const DEFAULT_CUSTOMER_TOKEN: &str = "customer-test-token";
const DEFAULT_ADMIN_TOKEN: &str = "admin-test-token";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Connection settings for the e2e probes.
///
/// Implements `Debug` manually to redact the bearer tokens.
#[derive(Clone)]
pub struct TestConfig {
    /// Backend base URL.
    pub base_url: String,
    customer_token: SecretString,
    admin_token: SecretString,
}

impl std::fmt::Debug for TestConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TestConfig")
            .field("base_url", &self.base_url)
            .field("customer_token", &"[REDACTED]")
            .field("admin_token", &"[REDACTED]")
            .finish()
    }
}

impl TestConfig {
    /// Build a config from explicit parts, validating the base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEnvVar`] if `base_url` does not parse
    /// as an absolute http(s) URL.
    pub fn new(
        base_url: &str,
        customer_token: &str,
        admin_token: &str,
    ) -> Result<Self, ConfigError> {
        let parsed = Url::parse(base_url).map_err(|e| {
            ConfigError::InvalidEnvVar("MALL_API_BASE_URL".to_string(), e.to_string())
        })?;
        if !parsed.scheme().starts_with("http") {
            return Err(ConfigError::InvalidEnvVar(
                "MALL_API_BASE_URL".to_string(),
                format!("expected http(s) scheme, got {}", parsed.scheme()),
            ));
        }

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            customer_token: SecretString::from(customer_token),
            admin_token: SecretString::from(admin_token),
        })
    }

    /// Load configuration from the environment (and a `.env` file if one
    /// exists), falling back to the local-backend defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if `MALL_API_BASE_URL` is set but unparsable.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let base_url =
            std::env::var("MALL_API_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let customer_token = std::env::var("MALL_CUSTOMER_TOKEN")
            .unwrap_or_else(|_| DEFAULT_CUSTOMER_TOKEN.to_string());
        let admin_token =
            std::env::var("MALL_ADMIN_TOKEN").unwrap_or_else(|_| DEFAULT_ADMIN_TOKEN.to_string());

        Self::new(&base_url, &customer_token, &admin_token)
    }

    /// A connection with no auth header at all.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is rejected by the SDK.
    pub fn anonymous(&self) -> Result<Connection, ConfigError> {
        Connection::new(&self.base_url).map_err(|e| {
            ConfigError::InvalidEnvVar("MALL_API_BASE_URL".to_string(), e.to_string())
        })
    }

    /// A connection authenticated as the seeded customer.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is rejected by the SDK.
    pub fn as_customer(&self) -> Result<Connection, ConfigError> {
        Ok(self
            .anonymous()?
            .with_token(self.customer_token.expose_secret()))
    }

    /// A connection authenticated as the seeded administrator.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is rejected by the SDK.
    pub fn as_admin(&self) -> Result<Connection, ConfigError> {
        Ok(self
            .anonymous()?
            .with_token(self.admin_token.expose_secret()))
    }
}
