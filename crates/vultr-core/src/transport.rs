//! Transport seam.
//!
//! The executor never talks to the network itself; it hands an
//! [`HttpRequest`] to a [`Transport`] and gets back an [`HttpResponse`].
//! [`ReqwestTransport`] is the default implementation.

use crate::error::{Error, Result};
use crate::request::{HttpRequest, JSON_CONTENT_TYPE};
use async_trait::async_trait;
use hyper::ext::ReasonPhrase;
use reqwest::header::{HeaderMap, CONTENT_TYPE};
use reqwest::StatusCode;
use serde_json::Value;
use std::time::Duration;

/// User agent sent by [`ReqwestTransport`] unless overridden.
pub const USER_AGENT: &str = concat!("vultr-core/", env!("CARGO_PKG_VERSION"));

/// An HTTP response described as plain data.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// HTTP status code
    pub status: u16,
    /// Reason phrase of the status
    pub status_text: String,
    /// Response headers
    pub headers: HeaderMap,
    /// Raw body
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Create a response with no headers and no body.
    #[must_use]
    pub fn new(status: u16, status_text: impl Into<String>) -> Self {
        Self {
            status,
            status_text: status_text.into(),
            headers: HeaderMap::new(),
            body: Vec::new(),
        }
    }

    /// Returns true for 2xx statuses.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }

    /// Returns a header value, if present and valid UTF-8.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Returns the declared content type.
    #[must_use]
    pub fn content_type(&self) -> Option<&str> {
        self.headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok())
    }

    /// Returns true if the declared content type mentions JSON.
    #[must_use]
    pub fn is_json(&self) -> bool {
        self.content_type()
            .is_some_and(|ct| ct.contains(JSON_CONTENT_TYPE))
    }

    /// Parse the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ParseError`] if the body is not valid JSON.
    pub fn json(&self) -> Result<Value> {
        serde_json::from_slice(&self.body).map_err(Error::from)
    }
}

/// Sends one request and yields one response.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send `request` and wait for the response.
    ///
    /// # Errors
    ///
    /// Returns an error when no response could be obtained. HTTP failure
    /// statuses are responses, not errors.
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse>;
}

/// [`Transport`] backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Create a transport with no request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    /// Start configuring a transport.
    #[must_use]
    pub fn builder() -> ReqwestTransportBuilder {
        ReqwestTransportBuilder::new()
    }

    /// Wrap an existing `reqwest` client.
    #[must_use]
    pub const fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        let url = reqwest::Url::parse(&request.url)?;
        let mut builder = self.client.request(request.method.to_method(), url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let status_text =
            resolve_status_text(status, response.extensions().get::<ReasonPhrase>());
        let headers = response.headers().clone();
        let body = response.bytes().await?.to_vec();

        Ok(HttpResponse {
            status: status.as_u16(),
            status_text,
            headers,
            body,
        })
    }
}

/// Reason phrase sent by the server, else the canonical one, else the code.
fn resolve_status_text(status: StatusCode, sent: Option<&ReasonPhrase>) -> String {
    sent.and_then(|reason| std::str::from_utf8(reason.as_bytes()).ok())
        .filter(|reason| !reason.is_empty())
        .or_else(|| status.canonical_reason())
        .unwrap_or_else(|| status.as_str())
        .to_string()
}

/// Builder for [`ReqwestTransport`].
#[derive(Debug, Clone)]
pub struct ReqwestTransportBuilder {
    timeout: Option<Duration>,
    user_agent: String,
}

impl ReqwestTransportBuilder {
    /// Create a builder with no timeout and the default user agent.
    #[must_use]
    pub fn new() -> Self {
        Self {
            timeout: None,
            user_agent: USER_AGENT.to_string(),
        }
    }

    /// Abort requests that take longer than `timeout`.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the user agent.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Build the transport.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] if the HTTP client cannot be initialized.
    pub fn build(self) -> Result<ReqwestTransport> {
        let mut builder = reqwest::Client::builder().user_agent(self.user_agent);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| Error::ConfigError(format!("Failed to build HTTP client: {e}")))?;
        Ok(ReqwestTransport { client })
    }
}

impl Default for ReqwestTransportBuilder {
    fn default() -> Self {
        Self::new()
    }
}
