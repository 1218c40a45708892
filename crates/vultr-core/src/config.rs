//! Configuration for Vultr API calls.
//!
//! A [`VultrConfig`] is read-only for the duration of a call. It only carries
//! the base URL and the API key; where those come from (files, environment,
//! secret stores) is up to the caller.

use crate::Error;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use url::Url;
use validator::{Validate, ValidationError};

/// Base URL used when the configuration does not provide one.
pub const DEFAULT_BASE_URL: &str = "https://api.vultr.com/v2";

/// Caller-supplied configuration.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct VultrConfig {
    /// Base URL override; absent or empty means [`DEFAULT_BASE_URL`]
    #[serde(default)]
    #[validate(custom(function = "validate_base_url"))]
    pub base_url: Option<String>,

    /// API key sent as a bearer token
    #[serde(default)]
    pub api_key: Option<SecretString>,
}

fn validate_base_url(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() || Url::parse(value).is_ok() {
        Ok(())
    } else {
        Err(ValidationError::new("base_url"))
    }
}

impl VultrConfig {
    /// Create a configuration that targets [`DEFAULT_BASE_URL`] without a key.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ValidationError`] if the URL is not empty and cannot be
    /// parsed.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Result<Self, Error> {
        self.base_url = Some(base_url.into());
        self.validate()?;
        Ok(self)
    }

    /// Set the API key.
    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(SecretString::from(api_key.into()));
        self
    }

    /// The base URL requests are resolved against.
    #[must_use]
    pub fn resolved_base_url(&self) -> &str {
        match self.base_url.as_deref() {
            Some(url) if !url.is_empty() => url,
            _ => DEFAULT_BASE_URL,
        }
    }

    /// Value of the `Authorization` header, if a key is configured.
    ///
    /// An empty key counts as no key.
    #[must_use]
    pub fn authorization(&self) -> Option<String> {
        self.api_key
            .as_ref()
            .map(|key| key.expose_secret())
            .filter(|key| !key.is_empty())
            .map(|key| format!("Bearer {key}"))
    }

    /// Returns true if an API key is configured.
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        self.authorization().is_some()
    }
}
