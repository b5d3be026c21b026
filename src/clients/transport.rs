//! Blocking HTTP transport used by [`HttpClient`](crate::clients::HttpClient).
//!
//! The [`Transport`] trait is the single seam between the client and the
//! network: one GET in, one [`RawResponse`] out. [`ReqwestTransport`] is the
//! production implementation; tests substitute their own.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use crate::clients::errors::TransportError;

/// The unprocessed result of an HTTP GET.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawResponse {
    /// The HTTP status code.
    pub status: u16,
    /// Response headers, keyed by lower-cased name.
    pub headers: HashMap<String, Vec<String>>,
    /// The response body as text.
    pub body: String,
    /// The final URL after any redirects.
    pub effective_url: String,
}

impl RawResponse {
    /// Creates a response with the given status and body and no headers.
    #[must_use]
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
            ..Self::default()
        }
    }

    /// Returns `true` for 2xx status codes.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status <= 299
    }
}

/// Performs a single blocking HTTP GET.
///
/// Implementations must not retry; the client relies on one call meaning
/// one round trip.
pub trait Transport: Send + Sync {
    /// Sends a GET request to `url` with the given `User-Agent`.
    ///
    /// `timeout` bounds the whole request when set.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] if the request could not be completed.
    /// Non-2xx responses are returned as `Ok` and judged by the caller.
    fn get(
        &self,
        url: &str,
        user_agent: &str,
        timeout: Option<Duration>,
    ) -> Result<RawResponse, TransportError>;
}

impl<T: Transport + ?Sized> Transport for Arc<T> {
    fn get(
        &self,
        url: &str,
        user_agent: &str,
        timeout: Option<Duration>,
    ) -> Result<RawResponse, TransportError> {
        (**self).get(url, user_agent, timeout)
    }
}

/// [`Transport`] backed by `reqwest::blocking`.
///
/// # Panics
///
/// Like every `reqwest::blocking` client, this must not be created or
/// dropped from inside an async runtime; use `spawn_blocking` there.
#[derive(Clone, Debug)]
pub struct ReqwestTransport {
    client: reqwest::blocking::Client,
}

// Verify ReqwestTransport is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ReqwestTransport>();
};

impl ReqwestTransport {
    /// Creates a transport using rustls.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Network`] if the TLS backend cannot be
    /// initialized.
    pub fn new() -> Result<Self, TransportError> {
        let client = reqwest::blocking::Client::builder()
            .use_rustls_tls()
            .build()?;
        Ok(Self { client })
    }

    /// Wraps an existing reqwest client (e.g. one configured with a proxy).
    #[must_use]
    pub const fn with_client(client: reqwest::blocking::Client) -> Self {
        Self { client }
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }

    fn classify(error: reqwest::Error, timeout: Option<Duration>) -> TransportError {
        match timeout {
            Some(after) if error.is_timeout() => TransportError::Timeout { after },
            _ => TransportError::Network(error.without_url()),
        }
    }
}

impl Transport for ReqwestTransport {
    fn get(
        &self,
        url: &str,
        user_agent: &str,
        timeout: Option<Duration>,
    ) -> Result<RawResponse, TransportError> {
        let mut request = self
            .client
            .get(url)
            .header(reqwest::header::USER_AGENT, user_agent);
        if let Some(timeout) = timeout {
            request = request.timeout(timeout);
        }

        let response = request
            .send()
            .map_err(|e| Self::classify(e, timeout))?;

        let status = response.status().as_u16();
        let effective_url = response.url().to_string();
        let headers = Self::parse_response_headers(response.headers());
        let body = response.text().map_err(|e| Self::classify(e, timeout))?;

        Ok(RawResponse {
            status,
            headers,
            body,
            effective_url,
        })
    }
}
