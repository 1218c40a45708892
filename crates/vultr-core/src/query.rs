//! Query-string assembly.
//!
//! Values are percent-encoded with the same character set as JavaScript's
//! `encodeURIComponent`; keys are written verbatim.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters left untouched by `encodeURIComponent`.
const COMPONENT_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Builder for assembling query parameter pairs.
#[derive(Debug, Default, Clone)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Create a new, empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Append a key/value pair.
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.pairs.push((key.into(), value.into()));
    }

    /// Returns true if no parameters have been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Render `key=value` pairs joined by `&`, values encoded.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        self.pairs
            .iter()
            .map(|(key, value)| {
                format!("{key}={}", utf8_percent_encode(value, COMPONENT_ENCODE_SET))
            })
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Append the query string to `url` as `?…`, leaving it untouched when empty.
    pub fn append_to(&self, url: &mut String) {
        if !self.is_empty() {
            url.push('?');
            url.push_str(&self.to_query_string());
        }
    }
}
