//! Request executor and client.
//!
//! [`execute`] is the whole pipeline: build the request for an [`Endpoint`],
//! send it through a [`Transport`], and normalize the response into
//! `Ok(Some(payload))`, `Ok(None)` (successful call without a JSON body) or an
//! [`Error`]. [`settle`] runs the same pipeline but never fails; it folds every
//! error into [`Outcome::Failed`] for callers that prefer inspecting a value.

use crate::config::VultrConfig;
use crate::endpoint::Endpoint;
use crate::error::{Error, Result};
use crate::request::{build_request, Params};
use crate::transport::{HttpResponse, ReqwestTransport, ReqwestTransportBuilder, Transport};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

/// Result of a call folded into a single value.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The call succeeded and returned a JSON payload
    Payload(Value),
    /// The call succeeded without a JSON payload
    Empty,
    /// The call failed
    Failed(Error),
}

impl Outcome {
    /// Returns true unless the call failed.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        !matches!(self, Self::Failed(_))
    }

    /// Returns the payload, if any.
    #[must_use]
    pub const fn payload(&self) -> Option<&Value> {
        match self {
            Self::Payload(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the error, if the call failed.
    #[must_use]
    pub const fn error(&self) -> Option<&Error> {
        match self {
            Self::Failed(err) => Some(err),
            _ => None,
        }
    }

    /// Convert back into a `Result`.
    ///
    /// # Errors
    ///
    /// Returns the contained error for [`Outcome::Failed`].
    pub fn into_result(self) -> Result<Option<Value>> {
        match self {
            Self::Payload(value) => Ok(Some(value)),
            Self::Empty => Ok(None),
            Self::Failed(err) => Err(err),
        }
    }
}

impl From<Result<Option<Value>>> for Outcome {
    fn from(result: Result<Option<Value>>) -> Self {
        match result {
            Ok(Some(value)) => Self::Payload(value),
            Ok(None) => Self::Empty,
            Err(err) => Self::Failed(err),
        }
    }
}

/// Send one request for `endpoint` and normalize the response.
///
/// The executor does not enforce `api_key_required`, does not check required
/// parameters and does not retry.
///
/// # Errors
///
/// Returns an error if the body cannot be serialized, the transport fails, the
/// API answers with a failure status, or a JSON response cannot be decoded.
pub async fn execute(
    config: &VultrConfig,
    transport: &dyn Transport,
    endpoint: &Endpoint,
    params: Option<&Params>,
) -> Result<Option<Value>> {
    let request =
        build_request(config, endpoint, params).map_err(|e| log_failure(endpoint, e))?;

    tracing::debug!(
        operation = endpoint.name,
        method = %request.method,
        url = %request.path_for_logging(),
        has_body = request.body.is_some(),
        "Executing API request"
    );

    let response = transport
        .send(request)
        .await
        .map_err(|e| log_failure(endpoint, e))?;

    tracing::debug!(
        operation = endpoint.name,
        status = response.status,
        "Received API response"
    );

    normalize_response(&response).map_err(|e| log_failure(endpoint, e))
}

fn log_failure(endpoint: &Endpoint, err: Error) -> Error {
    if err.should_log() {
        tracing::error!(
            operation = endpoint.name,
            code = err.error_code(),
            error = %err,
            "API call failed"
        );
    } else {
        tracing::warn!(
            operation = endpoint.name,
            code = err.error_code(),
            error = %err,
            "API call failed"
        );
    }
    err
}

/// Like [`execute`], but every failure is returned as [`Outcome::Failed`].
pub async fn settle(
    config: &VultrConfig,
    transport: &dyn Transport,
    endpoint: &Endpoint,
    params: Option<&Params>,
) -> Outcome {
    execute(config, transport, endpoint, params).await.into()
}

/// Map a response to the caller-visible result.
///
/// Failure statuses become [`Error::Api`] when the body is JSON with a truthy
/// `error` field and [`Error::Status`] otherwise. Successful responses yield
/// their JSON body, or `None` when the content type is not JSON.
///
/// # Errors
///
/// Returns an error for failure statuses and for undecodable JSON bodies.
pub fn normalize_response(response: &HttpResponse) -> Result<Option<Value>> {
    if !response.is_success() {
        let err = match response.json().ok().and_then(|body| error_message(&body)) {
            Some(message) => Error::Api {
                status: response.status,
                status_text: response.status_text.clone(),
                message,
            },
            None => Error::Status {
                status: response.status,
                status_text: response.status_text.clone(),
            },
        };
        return Err(err);
    }

    if !response.is_json() {
        return Ok(None);
    }

    response.json().map(Some)
}

/// Text of the `error` field, if present and truthy.
fn error_message(body: &Value) -> Option<String> {
    match body.get("error")? {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Client bundling a configuration with a transport.
///
/// Cheap to clone; clones share the configuration and the transport.
#[derive(Clone)]
pub struct VultrClient {
    config: Arc<VultrConfig>,
    transport: Arc<dyn Transport>,
}

impl VultrClient {
    /// Create a client for `config` using the default reqwest transport.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: VultrConfig) -> Result<Self> {
        Ok(Self::with_transport(config, Arc::new(ReqwestTransport::new()?)))
    }

    /// Create a client with a custom transport.
    #[must_use]
    pub fn with_transport(config: VultrConfig, transport: Arc<dyn Transport>) -> Self {
        Self {
            config: Arc::new(config),
            transport,
        }
    }

    /// Start configuring a client.
    #[must_use]
    pub fn builder() -> VultrClientBuilder {
        VultrClientBuilder::new()
    }

    /// The configuration used for every call.
    #[must_use]
    pub fn config(&self) -> &VultrConfig {
        &self.config
    }

    /// Call `endpoint` with optional parameters.
    ///
    /// # Errors
    ///
    /// See [`execute`].
    pub async fn execute(
        &self,
        endpoint: &Endpoint,
        params: Option<&Params>,
    ) -> Result<Option<Value>> {
        execute(&self.config, self.transport.as_ref(), endpoint, params).await
    }

    /// Call `endpoint` and fold any failure into the returned [`Outcome`].
    pub async fn settle(&self, endpoint: &Endpoint, params: Option<&Params>) -> Outcome {
        settle(&self.config, self.transport.as_ref(), endpoint, params).await
    }
}

impl std::fmt::Debug for VultrClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VultrClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Builder for [`VultrClient`].
pub struct VultrClientBuilder {
    config: VultrConfig,
    transport: Option<Arc<dyn Transport>>,
    http: ReqwestTransportBuilder,
}

impl VultrClientBuilder {
    /// Create a builder targeting the default base URL without an API key.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: VultrConfig::new(),
            transport: None,
            http: ReqwestTransportBuilder::new(),
        }
    }

    /// Replace the whole configuration.
    #[must_use]
    pub fn with_config(mut self, config: VultrConfig) -> Self {
        self.config = config;
        self
    }

    /// Override the base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is not empty and cannot be parsed.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Result<Self> {
        self.config = self.config.with_base_url(base_url)?;
        Ok(self)
    }

    /// Set the API key.
    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.config = self.config.with_api_key(api_key);
        self
    }

    /// Use a custom transport. Timeout and user agent settings are ignored.
    #[must_use]
    pub fn with_transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Abort requests made by the default transport after `timeout`.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.http = self.http.with_timeout(timeout);
        self
    }

    /// Override the user agent of the default transport.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.http = self.http.with_user_agent(user_agent);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns an error if the default HTTP client cannot be initialized.
    pub fn build(self) -> Result<VultrClient> {
        let transport = match self.transport {
            Some(transport) => transport,
            None => Arc::new(self.http.build()?),
        };
        Ok(VultrClient::with_transport(self.config, transport))
    }
}

impl Default for VultrClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
