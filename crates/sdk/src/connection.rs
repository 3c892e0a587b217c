//! Connection context carrying transport configuration and auth headers.

use reqwest::Method;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::Serialize;
use serde_json::Value;
use url::Url;

use crate::error::Error;

/// Longest response-body prefix kept in error diagnostics.
const BODY_SNIPPET_LEN: usize = 500;

/// A connection to the mall backend.
///
/// Carries the HTTP client, the base URL, and a header map with the bearer
/// token. Cloning is cheap and produces an independent header map, so a test
/// can strip or swap auth on its copy without affecting any other test:
///
/// ```no_run
/// # fn demo(conn: &galleria_sdk::Connection) {
/// let anonymous = conn.without_auth();
/// let as_admin = conn.with_token("admin-token");
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Connection {
    client: reqwest::Client,
    base_url: String,
    headers: HeaderMap,
}

impl Connection {
    /// Create a connection with no auth header.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBaseUrl`] if `base_url` is not an absolute URL.
    pub fn new(base_url: &str) -> Result<Self, Error> {
        let parsed =
            Url::parse(base_url).map_err(|e| Error::InvalidBaseUrl(format!("{base_url}: {e}")))?;
        if !parsed.scheme().starts_with("http") {
            return Err(Error::InvalidBaseUrl(format!(
                "{base_url}: expected http(s) scheme"
            )));
        }

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        Ok(Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            headers,
        })
    }

    /// Copy of this connection with the bearer token replaced.
    ///
    /// # Panics
    ///
    /// Panics if the token contains invalid header characters.
    #[must_use]
    pub fn with_token(&self, token: &str) -> Self {
        let mut copy = self.clone();
        let value = HeaderValue::from_str(&format!("Bearer {token}"))
            .expect("Invalid token for Authorization header");
        copy.headers.insert(AUTHORIZATION, value);
        copy
    }

    /// Copy of this connection with the auth header removed.
    ///
    /// Used by probes that must look unauthenticated.
    #[must_use]
    pub fn without_auth(&self) -> Self {
        let mut copy = self.clone();
        copy.headers.remove(AUTHORIZATION);
        copy
    }

    /// The header map sent with every request.
    #[must_use]
    pub const fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// The configured base URL, without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET {base}/{path}` decoded as `T`.
    pub(crate) async fn get<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        self.request(Method::GET, path, None::<&Value>).await
    }

    /// `POST {base}/{path}` with a JSON body, decoded as `T`.
    pub(crate) async fn post<T: serde::de::DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, Error> {
        self.request(Method::POST, path, Some(body)).await
    }

    /// `PUT {base}/{path}` with a JSON body, decoded as `T`.
    pub(crate) async fn put<T: serde::de::DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, Error> {
        self.request(Method::PUT, path, Some(body)).await
    }

    /// `DELETE {base}/{path}`; the backend answers with an empty body.
    pub(crate) async fn delete(&self, path: &str) -> Result<(), Error> {
        self.execute(Method::DELETE, path, None::<&Value>).await?;
        Ok(())
    }

    /// Issue one request and decode the successful response as `T`.
    async fn request<T: serde::de::DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, Error> {
        let text = self.execute(method, path, body).await?;
        serde_json::from_str(&text).map_err(|e| Error::Decode(e.to_string()))
    }

    /// Issue one request and return the raw body of a successful response.
    ///
    /// Non-success statuses become [`Error::Status`] so callers can assert
    /// that an operation failed without inspecting a result flag.
    async fn execute<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<String, Error> {
        let url = format!("{}/{path}", self.base_url);

        let mut request = self
            .client
            .request(method, url.as_str())
            .headers(self.headers.clone());
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();

        // Body text first, so error diagnostics include it
        let text = response.text().await?;

        if !status.is_success() {
            let snippet: String = text.chars().take(BODY_SNIPPET_LEN).collect();
            tracing::debug!(
                status = %status,
                url = %url,
                body = %snippet,
                "mall backend returned non-success status"
            );
            return Err(Error::Status {
                status: status.as_u16(),
                body: snippet,
            });
        }

        Ok(text)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_garbage_url() {
        assert!(matches!(
            Connection::new("not a url"),
            Err(Error::InvalidBaseUrl(_))
        ));
        assert!(matches!(
            Connection::new("ftp://mall.example.com"),
            Err(Error::InvalidBaseUrl(_))
        ));
    }

    #[test]
    fn test_trailing_slash_is_normalized() {
        let conn = Connection::new("http://localhost:37001/").unwrap();
        assert_eq!(conn.base_url(), "http://localhost:37001");
    }

    #[test]
    fn test_with_token_sets_bearer_header() {
        let conn = Connection::new("http://localhost:37001")
            .unwrap()
            .with_token("abc123");
        let auth = conn.headers().get(AUTHORIZATION).unwrap();
        assert_eq!(auth.to_str().unwrap(), "Bearer abc123");
    }

    #[test]
    fn test_without_auth_strips_only_the_copy() {
        let authed = Connection::new("http://localhost:37001")
            .unwrap()
            .with_token("abc123");
        let anonymous = authed.without_auth();

        assert!(anonymous.headers().get(AUTHORIZATION).is_none());
        // The original connection is untouched
        assert!(authed.headers().get(AUTHORIZATION).is_some());
    }

    #[test]
    fn test_with_token_replaces_previous_token() {
        let conn = Connection::new("http://localhost:37001")
            .unwrap()
            .with_token("customer")
            .with_token("admin");
        let auth = conn.headers().get(AUTHORIZATION).unwrap();
        assert_eq!(auth.to_str().unwrap(), "Bearer admin");
    }
}
