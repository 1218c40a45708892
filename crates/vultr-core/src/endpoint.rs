//! Endpoint descriptors.
//!
//! An [`Endpoint`] is a static, immutable fact about one remote operation: its
//! URL template, HTTP method, whether it expects an API key, and the schema of
//! the parameters it accepts. Descriptors carry no behavior of their own; the
//! executor reads them to shape requests.

use crate::request::Params;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// HTTP method of an endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RequestType {
    /// `GET`
    Get,
    /// `POST`
    Post,
    /// `PUT`
    Put,
    /// `PATCH`
    Patch,
    /// `DELETE`
    Delete,
    /// `OPTIONS`
    Options,
}

impl RequestType {
    /// Returns the method name as sent on the wire.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
            Self::Options => "OPTIONS",
        }
    }

    /// Returns the matching `reqwest` method.
    #[must_use]
    pub fn to_method(&self) -> reqwest::Method {
        match self {
            Self::Get => reqwest::Method::GET,
            Self::Post => reqwest::Method::POST,
            Self::Put => reqwest::Method::PUT,
            Self::Patch => reqwest::Method::PATCH,
            Self::Delete => reqwest::Method::DELETE,
            Self::Options => reqwest::Method::OPTIONS,
        }
    }

    /// Returns true if non-path parameters travel in the query string.
    #[must_use]
    pub const fn uses_query(&self) -> bool {
        matches!(self, Self::Get | Self::Delete | Self::Options)
    }
}

impl fmt::Display for RequestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RequestType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(Self::Get),
            "POST" => Ok(Self::Post),
            "PUT" => Ok(Self::Put),
            "PATCH" => Ok(Self::Patch),
            "DELETE" => Ok(Self::Delete),
            "OPTIONS" => Ok(Self::Options),
            _ => Err(Error::ValidationError(format!("Unknown request type: {s}"))),
        }
    }
}

/// Advisory type of a parameter value. Never checked against supplied values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    /// JSON string
    String,
    /// JSON number
    Number,
    /// JSON boolean
    Boolean,
    /// JSON object
    Object,
    /// JSON array
    Array,
}

/// Schema entry for one accepted parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Parameter {
    /// Parameter name as it appears in the URL template, query or body
    pub name: &'static str,
    /// Advisory value type
    pub kind: ValueKind,
    /// Whether the value is substituted into the URL template
    pub path: bool,
    /// Whether the remote API requires the parameter
    pub required: bool,
}

impl Parameter {
    /// Declare an optional, non-path parameter.
    #[must_use]
    pub const fn new(name: &'static str, kind: ValueKind) -> Self {
        Self {
            name,
            kind,
            path: false,
            required: false,
        }
    }

    /// Mark the parameter as a path segment.
    #[must_use]
    pub const fn path(mut self) -> Self {
        self.path = true;
        self
    }

    /// Mark the parameter as required.
    #[must_use]
    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

/// Static description of one remote operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Endpoint {
    /// Logical operation name, `<group>.<operation>`
    pub name: &'static str,
    /// Path template relative to the base URL, with `{placeholder}` segments
    pub url: &'static str,
    /// HTTP method
    pub request_type: RequestType,
    /// Whether the remote API expects an API key
    pub api_key_required: bool,
    /// Accepted parameters
    pub parameters: &'static [Parameter],
}

impl Endpoint {
    /// Look up the schema entry for a parameter.
    #[must_use]
    pub fn parameter(&self, name: &str) -> Option<&'static Parameter> {
        self.parameters.iter().find(|p| p.name == name)
    }

    /// Returns true if `name` is declared as a path parameter.
    ///
    /// Names without a schema entry are not path parameters.
    #[must_use]
    pub fn is_path_parameter(&self, name: &str) -> bool {
        self.parameter(name).is_some_and(|p| p.path)
    }

    /// Iterate the placeholder names of the URL template, in order.
    pub fn placeholders(&self) -> impl Iterator<Item = &'static str> {
        let url: &'static str = self.url;
        url.split('{')
            .skip(1)
            .filter_map(|segment| segment.split_once('}').map(|(name, _)| name))
    }

    /// Names of required parameters that are absent from `params`.
    ///
    /// The executor does not call this; it proceeds with whatever the caller
    /// supplied and leaves rejection to the remote API.
    #[must_use]
    pub fn missing_required(&self, params: Option<&Params>) -> Vec<&'static str> {
        self.parameters
            .iter()
            .filter(|p| p.required)
            .filter(|p| params.map_or(true, |supplied| !supplied.contains_key(p.name)))
            .map(|p| p.name)
            .collect()
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.request_type, self.url)
    }
}
