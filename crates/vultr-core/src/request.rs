//! Request construction.
//!
//! Turns a configuration, an [`Endpoint`] and caller parameters into a plain
//! [`HttpRequest`]. Nothing here touches the network, so every shaping rule can
//! be checked without a transport.

use crate::config::VultrConfig;
use crate::endpoint::{Endpoint, RequestType};
use crate::error::{Error, Result};
use crate::query::QueryParams;
use serde_json::Value;

/// Caller-supplied parameters, keyed by parameter name, in insertion order.
pub type Params = serde_json::Map<String, Value>;

/// MIME type used for request bodies and to recognize JSON responses.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// An HTTP request described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    /// HTTP method
    pub method: RequestType,
    /// Fully resolved URL, query string included
    pub url: String,
    /// Header name/value pairs
    pub headers: Vec<(String, String)>,
    /// Serialized JSON body
    pub body: Option<String>,
}

impl HttpRequest {
    /// Returns the first header value with the given name, ignoring case.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// URL with the query string removed, safe to log.
    #[must_use]
    pub fn path_for_logging(&self) -> &str {
        self.url.split_once('?').map_or(self.url.as_str(), |(path, _)| path)
    }

    fn set_json_body(&mut self, body: String) {
        self.headers
            .push(("Content-Type".to_string(), JSON_CONTENT_TYPE.to_string()));
        self.body = Some(body);
    }
}

/// Build the request for one call.
///
/// Path parameters are substituted for every method. The remaining parameters
/// go to the query string (GET, DELETE, OPTIONS) or to a JSON body (PATCH,
/// PUT). POST sends the whole parameter mapping as its body, path parameters
/// included. Absent or empty `params` means no substitution and no body.
///
/// # Errors
///
/// Returns [`Error::Serialization`] if a body cannot be serialized.
pub fn build_request(
    config: &VultrConfig,
    endpoint: &Endpoint,
    params: Option<&Params>,
) -> Result<HttpRequest> {
    let mut request = HttpRequest {
        method: endpoint.request_type,
        url: format!("{}{}", config.resolved_base_url(), endpoint.url),
        headers: Vec::new(),
        body: None,
    };

    if let Some(authorization) = config.authorization() {
        request
            .headers
            .push(("Authorization".to_string(), authorization));
    }

    let Some(params) = params.filter(|p| !p.is_empty()) else {
        return Ok(request);
    };

    for (key, value) in params {
        if endpoint.is_path_parameter(key) {
            request.url = substitute_placeholder(&request.url, key, &coerce_to_string(value));
        }
    }

    if endpoint.request_type == RequestType::Post {
        request.set_json_body(serialize_body(params)?);
    } else if endpoint.request_type.uses_query() {
        let mut query = QueryParams::new();
        for (key, value) in params {
            if !endpoint.is_path_parameter(key) {
                query.push(key.as_str(), coerce_to_string(value));
            }
        }
        query.append_to(&mut request.url);
    } else {
        let body: Params = params
            .iter()
            .filter(|(key, _)| !endpoint.is_path_parameter(key))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();
        request.set_json_body(serialize_body(&body)?);
    }

    Ok(request)
}

/// Replace the first `{name}` in `url` with `value`.
fn substitute_placeholder(url: &str, name: &str, value: &str) -> String {
    url.replacen(&format!("{{{name}}}"), value, 1)
}

fn serialize_body(body: &Params) -> Result<String> {
    serde_json::to_string(body).map_err(|e| Error::Serialization(e.to_string()))
}

/// String form of a parameter value for URLs.
///
/// Strings are used as-is, arrays join their elements with `,`, everything
/// else uses its JSON text.
#[must_use]
pub fn coerce_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(coerce_to_string)
            .collect::<Vec<_>>()
            .join(","),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::endpoint::{Parameter, ValueKind};
    use serde_json::json;

    const GET_BACKUP: Endpoint = Endpoint {
        name: "test.get_backup",
        url: "/backups/{backup-id}",
        request_type: RequestType::Get,
        api_key_required: true,
        parameters: &[Parameter::new("backup-id", ValueKind::String)
            .path()
            .required()],
    };

    const LIST_RECORDS: Endpoint = Endpoint {
        name: "test.list_records",
        url: "/domains/{dns-domain}/records",
        request_type: RequestType::Get,
        api_key_required: true,
        parameters: &[
            Parameter::new("dns-domain", ValueKind::String).path().required(),
            Parameter::new("per_page", ValueKind::Number),
            Parameter::new("cursor", ValueKind::String),
        ],
    };

    const CREATE_DOMAIN: Endpoint = Endpoint {
        name: "test.create_domain",
        url: "/domains",
        request_type: RequestType::Post,
        api_key_required: true,
        parameters: &[
            Parameter::new("domain", ValueKind::String).required(),
            Parameter::new("ip", ValueKind::String),
        ],
    };

    const ATTACH_BLOCK: Endpoint = Endpoint {
        name: "test.attach_block",
        url: "/blocks/{block-id}/attach",
        request_type: RequestType::Post,
        api_key_required: true,
        parameters: &[
            Parameter::new("block-id", ValueKind::String).path().required(),
            Parameter::new("instance_id", ValueKind::String).required(),
            Parameter::new("live", ValueKind::Boolean),
        ],
    };

    const UPDATE_BLOCK: Endpoint = Endpoint {
        name: "test.update_block",
        url: "/blocks/{block-id}",
        request_type: RequestType::Patch,
        api_key_required: true,
        parameters: &[
            Parameter::new("block-id", ValueKind::String).path().required(),
            Parameter::new("label", ValueKind::String),
            Parameter::new("size_gb", ValueKind::Number),
        ],
    };

    const UPDATE_REPOSITORY: Endpoint = Endpoint {
        name: "test.update_repository",
        url: "/registry/{registry-id}/repository/{repository-image}",
        request_type: RequestType::Put,
        api_key_required: true,
        parameters: &[
            Parameter::new("registry-id", ValueKind::String).path().required(),
            Parameter::new("repository-image", ValueKind::String)
                .path()
                .required(),
            Parameter::new("description", ValueKind::String),
        ],
    };

    const DOCKER_CREDENTIALS: Endpoint = Endpoint {
        name: "test.docker_credentials",
        url: "/registry/{registry-id}/docker-credentials",
        request_type: RequestType::Options,
        api_key_required: true,
        parameters: &[
            Parameter::new("registry-id", ValueKind::String).path().required(),
            Parameter::new("expiry_seconds", ValueKind::Number),
            Parameter::new("read_write", ValueKind::Boolean),
        ],
    };

    fn params(value: Value) -> Params {
        match value {
            Value::Object(map) => map,
            other => panic!("expected an object, got {other}"),
        }
    }

    fn config() -> VultrConfig {
        VultrConfig::new()
            .with_base_url("https://api.example.com/v2")
            .unwrap()
    }

    #[test]
    fn get_substitutes_path_parameter_without_body() {
        let p = params(json!({"backup-id": "abc123"}));
        let request = build_request(&config(), &GET_BACKUP, Some(&p)).unwrap();

        assert_eq!(request.method, RequestType::Get);
        assert_eq!(request.url, "https://api.example.com/v2/backups/abc123");
        assert!(request.body.is_none());
        assert!(request.header("content-type").is_none());
    }

    #[test]
    fn get_puts_non_path_parameters_in_query() {
        let p = params(json!({"dns-domain": "example.com", "per_page": 25, "cursor": "a b"}));
        let request = build_request(&config(), &LIST_RECORDS, Some(&p)).unwrap();

        assert_eq!(
            request.url,
            "https://api.example.com/v2/domains/example.com/records?per_page=25&cursor=a%20b"
        );
        assert!(request.body.is_none());
    }

    #[test]
    fn post_sends_full_mapping_as_body() {
        let p = params(json!({"domain": "example.com", "ip": "1.2.3.4"}));
        let request = build_request(&config(), &CREATE_DOMAIN, Some(&p)).unwrap();

        assert_eq!(request.url, "https://api.example.com/v2/domains");
        assert_eq!(
            request.body.as_deref(),
            Some(r#"{"domain":"example.com","ip":"1.2.3.4"}"#)
        );
        assert_eq!(request.header("Content-Type"), Some(JSON_CONTENT_TYPE));
    }

    #[test]
    fn post_body_keeps_path_parameters() {
        let p = params(json!({"block-id": "v1", "instance_id": "i-9", "live": true}));
        let request = build_request(&config(), &ATTACH_BLOCK, Some(&p)).unwrap();

        assert_eq!(request.url, "https://api.example.com/v2/blocks/v1/attach");
        assert_eq!(
            request.body.as_deref(),
            Some(r#"{"block-id":"v1","instance_id":"i-9","live":true}"#)
        );
    }

    #[test]
    fn patch_body_excludes_path_parameters() {
        let p = params(json!({"block-id": "v1", "label": "new"}));
        let request = build_request(&config(), &UPDATE_BLOCK, Some(&p)).unwrap();

        assert_eq!(request.url, "https://api.example.com/v2/blocks/v1");
        assert_eq!(request.body.as_deref(), Some(r#"{"label":"new"}"#));
        assert_eq!(request.header("content-type"), Some(JSON_CONTENT_TYPE));
    }

    #[test]
    fn put_substitutes_every_placeholder() {
        let p = params(json!({
            "registry-id": "r1",
            "repository-image": "app",
            "description": "main image"
        }));
        let request = build_request(&config(), &UPDATE_REPOSITORY, Some(&p)).unwrap();

        assert_eq!(
            request.url,
            "https://api.example.com/v2/registry/r1/repository/app"
        );
        assert_eq!(
            request.body.as_deref(),
            Some(r#"{"description":"main image"}"#)
        );
    }

    #[test]
    fn put_with_only_path_parameters_sends_empty_object() {
        let p = params(json!({"registry-id": "r1", "repository-image": "app"}));
        let request = build_request(&config(), &UPDATE_REPOSITORY, Some(&p)).unwrap();
        assert_eq!(request.body.as_deref(), Some("{}"));
    }

    #[test]
    fn options_uses_query_string() {
        let p = params(json!({"registry-id": "r1", "expiry_seconds": 3600, "read_write": false}));
        let request = build_request(&config(), &DOCKER_CREDENTIALS, Some(&p)).unwrap();

        assert_eq!(request.method, RequestType::Options);
        assert_eq!(
            request.url,
            "https://api.example.com/v2/registry/r1/docker-credentials?expiry_seconds=3600&read_write=false"
        );
        assert!(request.body.is_none());
    }

    #[test]
    fn no_parameters_means_no_substitution_and_no_body() {
        for endpoint in [&GET_BACKUP, &CREATE_DOMAIN, &UPDATE_BLOCK] {
            let request = build_request(&config(), endpoint, None).unwrap();
            assert_eq!(
                request.url,
                format!("https://api.example.com/v2{}", endpoint.url)
            );
            assert!(request.body.is_none());
            assert!(request.header("content-type").is_none());
        }

        let empty = Params::new();
        let request = build_request(&config(), &CREATE_DOMAIN, Some(&empty)).unwrap();
        assert!(request.body.is_none());
    }

    #[test]
    fn missing_path_parameter_leaves_placeholder() {
        let p = params(json!({"per_page": 10}));
        let request = build_request(&config(), &LIST_RECORDS, Some(&p)).unwrap();
        assert_eq!(
            request.url,
            "https://api.example.com/v2/domains/{dns-domain}/records?per_page=10"
        );
    }

    #[test]
    fn unknown_keys_are_treated_as_non_path() {
        let p = params(json!({"backup-id": "abc", "extra": "1"}));
        let request = build_request(&config(), &GET_BACKUP, Some(&p)).unwrap();
        assert_eq!(
            request.url,
            "https://api.example.com/v2/backups/abc?extra=1"
        );
    }

    #[test]
    fn substitution_is_deterministic() {
        let p = params(json!({"dns-domain": "example.com", "cursor": "c1"}));
        let first = build_request(&config(), &LIST_RECORDS, Some(&p)).unwrap();
        let second = build_request(&config(), &LIST_RECORDS, Some(&p)).unwrap();
        assert_eq!(first.url, second.url);
        assert_eq!(first, second);
    }

    #[test]
    fn authorization_header_only_with_api_key() {
        let request = build_request(&config(), &GET_BACKUP, None).unwrap();
        assert!(request.header("authorization").is_none());

        let keyed = config().with_api_key("k-1");
        let request = build_request(&keyed, &GET_BACKUP, None).unwrap();
        assert_eq!(request.header("Authorization"), Some("Bearer k-1"));
    }

    #[test]
    fn default_base_url_is_used_when_unset() {
        let request = build_request(&VultrConfig::new(), &GET_BACKUP, None).unwrap();
        assert_eq!(request.url, "https://api.vultr.com/v2/backups/{backup-id}");
    }

    #[test]
    fn substitution_replaces_first_occurrence_only() {
        assert_eq!(
            substitute_placeholder("/a/{id}/b/{id}", "id", "7"),
            "/a/7/b/{id}"
        );
    }

    #[test]
    fn coerce_to_string_handles_every_kind() {
        assert_eq!(coerce_to_string(&json!("abc")), "abc");
        assert_eq!(coerce_to_string(&json!(42)), "42");
        assert_eq!(coerce_to_string(&json!(1.5)), "1.5");
        assert_eq!(coerce_to_string(&json!(true)), "true");
        assert_eq!(coerce_to_string(&json!(null)), "null");
        assert_eq!(coerce_to_string(&json!(["a", 1])), "a,1");
        assert_eq!(coerce_to_string(&json!({"k": "v"})), r#"{"k":"v"}"#);
    }

    #[test]
    fn path_for_logging_drops_query() {
        let p = params(json!({"dns-domain": "example.com", "cursor": "secret"}));
        let request = build_request(&config(), &LIST_RECORDS, Some(&p)).unwrap();
        assert_eq!(
            request.path_for_logging(),
            "https://api.example.com/v2/domains/example.com/records"
        );
    }
}
