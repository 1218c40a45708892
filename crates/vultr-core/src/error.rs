//! Error types for Vultr API calls.
//!
//! Every failure an API call can produce is a value of [`Error`]: transport
//! failures, HTTP error responses (with or without a structured `error` field),
//! undecodable payloads and configuration problems.

use thiserror::Error;

/// Main error type for Vultr API operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The remote host could not be reached
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// The transport gave up waiting for a response
    #[error("Timeout waiting for response: {0}")]
    Timeout(String),

    /// Any other failure while sending the request
    #[error("HTTP request failed: {0}")]
    Transport(String),

    /// The API answered with a failure status and a structured `error` field
    #[error("{status_text}: {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Reason phrase of the status
        status_text: String,
        /// Value of the `error` field in the response body
        message: String,
    },

    /// The API answered with a failure status and no usable error detail
    #[error("{status_text}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Reason phrase of the status
        status_text: String,
    },

    /// A response declared as JSON could not be decoded
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// The request body could not be serialized
    #[error("Failed to serialize request: {0}")]
    Serialization(String),

    /// The resolved request URL is not a valid URL
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Validation error
    #[error("Validation error: {0}")]
    ValidationError(String),
}

/// Specialized result type for Vultr operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns the error code for this error type.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::ServiceUnavailable(_) => "SERVICE_UNAVAILABLE",
            Self::Timeout(_) => "TIMEOUT",
            Self::Transport(_) => "TRANSPORT_ERROR",
            Self::Api { .. } => "API_ERROR",
            Self::Status { .. } => "HTTP_STATUS",
            Self::ParseError(_) => "PARSE_ERROR",
            Self::Serialization(_) => "SERIALIZATION_ERROR",
            Self::InvalidEndpoint(_) => "INVALID_ENDPOINT",
            Self::ConfigError(_) => "CONFIG_ERROR",
            Self::ValidationError(_) => "VALIDATION_ERROR",
        }
    }

    /// Returns the HTTP status code for errors produced by an API response.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } | Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns true if the request never produced an HTTP response.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::ServiceUnavailable(_) | Self::Timeout(_) | Self::Transport(_)
        )
    }

    /// Returns true if this error should be logged as a serious error.
    #[must_use]
    pub const fn should_log(&self) -> bool {
        matches!(
            self,
            Self::ConfigError(_) | Self::Serialization(_) | Self::ParseError(_)
        )
    }
}

// Conversions from external error types
impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(err.to_string())
        } else if err.is_connect() {
            Self::ServiceUnavailable(err.to_string())
        } else if err.is_builder() {
            Self::InvalidEndpoint(err.to_string())
        } else {
            Self::Transport(err.to_string())
        }
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Self::InvalidEndpoint(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::ParseError(err.to_string())
    }
}

impl From<validator::ValidationErrors> for Error {
    fn from(err: validator::ValidationErrors) -> Self {
        Self::ValidationError(err.to_string())
    }
}
