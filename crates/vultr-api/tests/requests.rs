//! Request shaping and response handling for catalog descriptors.

use serde_json::{json, Value};
use std::sync::Arc;
use vultr_api::{all, backups, block_storage, dns, registries, Outcome, Params, VultrClient};
use vultr_core::{build_request, Endpoint, Error, ReqwestTransport, RequestType, VultrConfig};
use wiremock::matchers::{any, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const BASE: &str = "https://api.test/v2";

fn config() -> VultrConfig {
    VultrConfig::new().with_base_url(BASE).unwrap()
}

/// One value per declared parameter: path parameters get `p-<name>`, the rest
/// get `v-<name>`.
fn sample_params(endpoint: &Endpoint) -> Params {
    endpoint
        .parameters
        .iter()
        .map(|p| {
            let prefix = if p.path { "p" } else { "v" };
            (p.name.to_string(), Value::String(format!("{prefix}-{}", p.name)))
        })
        .collect()
}

fn expected_path(endpoint: &Endpoint) -> String {
    endpoint
        .parameters
        .iter()
        .filter(|p| p.path)
        .fold(format!("{BASE}{}", endpoint.url), |url, p| {
            url.replace(&format!("{{{}}}", p.name), &format!("p-{}", p.name))
        })
}

fn non_path_subset(endpoint: &Endpoint, params: &Params) -> Params {
    params
        .iter()
        .filter(|(key, _)| !endpoint.is_path_parameter(key))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

fn client_for(server: &MockServer) -> VultrClient {
    VultrClient::builder()
        .with_base_url(server.uri())
        .unwrap()
        .with_api_key("test-key")
        .build()
        .unwrap()
}

fn object(value: Value) -> Params {
    value.as_object().cloned().unwrap()
}

#[test]
fn post_descriptors_send_every_parameter_in_the_body() {
    for endpoint in all().iter().filter(|e| e.request_type == RequestType::Post) {
        let params = sample_params(endpoint);
        let request = build_request(&config(), endpoint, Some(&params)).unwrap();

        assert_eq!(request.url, expected_path(endpoint), "{}", endpoint.name);
        assert_eq!(
            request.body,
            Some(serde_json::to_string(&params).unwrap()),
            "{}",
            endpoint.name
        );
        assert_eq!(request.header("content-type"), Some("application/json"));
    }
}

#[test]
fn query_descriptors_send_non_path_parameters_in_the_query() {
    for endpoint in all().iter().filter(|e| e.request_type.uses_query()) {
        let params = sample_params(endpoint);
        let request = build_request(&config(), endpoint, Some(&params)).unwrap();

        let query: Vec<String> = non_path_subset(endpoint, &params)
            .iter()
            .map(|(key, value)| format!("{key}={}", value.as_str().unwrap()))
            .collect();
        let expected = if query.is_empty() {
            expected_path(endpoint)
        } else {
            format!("{}?{}", expected_path(endpoint), query.join("&"))
        };

        assert_eq!(request.url, expected, "{}", endpoint.name);
        assert!(request.body.is_none(), "{}", endpoint.name);
    }
}

#[test]
fn patch_and_put_descriptors_send_non_path_parameters_in_the_body() {
    for endpoint in all()
        .iter()
        .filter(|e| matches!(e.request_type, RequestType::Patch | RequestType::Put))
    {
        let params = sample_params(endpoint);
        let request = build_request(&config(), endpoint, Some(&params)).unwrap();

        assert_eq!(request.url, expected_path(endpoint), "{}", endpoint.name);
        assert_eq!(
            request.body,
            Some(serde_json::to_string(&non_path_subset(endpoint, &params)).unwrap()),
            "{}",
            endpoint.name
        );
    }
}

#[test]
fn descriptors_without_parameters_are_sent_untouched() {
    for endpoint in all() {
        let request = build_request(&config(), endpoint, None).unwrap();
        assert_eq!(request.url, format!("{BASE}{}", endpoint.url));
        assert!(request.body.is_none());
    }
}

#[test]
fn identical_inputs_build_identical_urls() {
    let params = object(json!({"dns-domain": "example.com", "record-id": "r-1"}));
    let first = build_request(&config(), &dns::GET_RECORD, Some(&params)).unwrap();
    let second = build_request(&config(), &dns::GET_RECORD, Some(&params)).unwrap();
    assert_eq!(first.url, second.url);
    assert_eq!(first.url, format!("{BASE}/domains/example.com/records/r-1"));
}

#[tokio::test]
async fn get_backup_substitutes_the_backup_id() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/backups/abc123"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"backup": {"id": "abc123"}})),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let params = object(json!({"backup-id": "abc123"}));
    let result = client.execute(&backups::GET, Some(&params)).await.unwrap();
    assert_eq!(result, Some(json!({"backup": {"id": "abc123"}})));

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].url.query(), None);
    assert!(requests[0].body.is_empty());
    assert_eq!(
        requests[0].headers.get("authorization").unwrap(),
        "Bearer test-key"
    );
}

#[tokio::test]
async fn create_domain_posts_the_parameters_as_json() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/domains"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"domain": {}})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let params = object(json!({"domain": "example.com", "ip": "1.2.3.4"}));
    client.execute(&dns::CREATE_DOMAIN, Some(&params)).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(
        String::from_utf8(requests[0].body.clone()).unwrap(),
        r#"{"domain":"example.com","ip":"1.2.3.4"}"#
    );
    assert_eq!(
        requests[0].headers.get("content-type").unwrap(),
        "application/json"
    );
}

#[tokio::test]
async fn update_storage_patches_without_the_path_parameter() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/blocks/v1"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let params = object(json!({"block-id": "v1", "label": "new"}));
    let result = client
        .execute(&block_storage::UPDATE_STORAGE, Some(&params))
        .await
        .unwrap();
    assert_eq!(result, None);

    let requests = server.received_requests().await.unwrap();
    assert_eq!(
        String::from_utf8(requests[0].body.clone()).unwrap(),
        r#"{"label":"new"}"#
    );
}

#[tokio::test]
async fn docker_credentials_use_options_with_query() {
    let server = MockServer::start().await;
    Mock::given(method("OPTIONS"))
        .and(path("/registry/r1/docker-credentials"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"auths": {}})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let params = object(json!({"registry-id": "r1", "expiry_seconds": 60, "read_write": true}));
    let result = client
        .execute(&registries::CREATE_REGISTRY_DOCKER_CREDENTIALS, Some(&params))
        .await
        .unwrap();
    assert_eq!(result, Some(json!({"auths": {}})));

    let requests = server.received_requests().await.unwrap();
    assert_eq!(
        requests[0].url.query(),
        Some("expiry_seconds=60&read_write=true")
    );
}

#[tokio::test]
async fn not_found_with_error_field_reports_both_parts() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"error": "not found"})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let params = object(json!({"backup-id": "missing"}));
    let err = client
        .execute(&backups::GET, Some(&params))
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(404));
    assert_eq!(err.to_string(), "Not Found: not found");
}

#[tokio::test]
async fn no_content_without_content_type_is_empty_success() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/domains/example.com"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let params = object(json!({"dns-domain": "example.com"}));
    let outcome = client.settle(&dns::DELETE_DOMAIN, Some(&params)).await;
    assert_eq!(outcome, Outcome::Empty);
}

#[tokio::test]
async fn server_error_with_text_body_reports_status_text_only() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .execute(&dns::LIST_DOMAINS, None)
        .await
        .unwrap_err();

    assert_eq!(
        err,
        Error::Status {
            status: 500,
            status_text: "Internal Server Error".to_string(),
        }
    );
    assert_eq!(err.to_string(), "Internal Server Error");
}

#[tokio::test]
async fn settle_folds_transport_failures_into_the_outcome() {
    let client = VultrClient::with_transport(
        VultrConfig::new()
            .with_base_url("http://127.0.0.1:1/v2")
            .unwrap(),
        Arc::new(ReqwestTransport::new().unwrap()),
    );

    let outcome = client.settle(&backups::LIST, None).await;
    assert!(!outcome.is_success());
    assert!(outcome.error().unwrap().is_transport());
}

#[tokio::test]
async fn request_without_api_key_has_no_authorization_header() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"plans": []})))
        .mount(&server)
        .await;

    let client = VultrClient::new(VultrConfig::new().with_base_url(server.uri()).unwrap())
        .unwrap();
    let result = client
        .execute(&registries::LIST_REGISTRY_PLANS, None)
        .await
        .unwrap();
    assert_eq!(result, Some(json!({"plans": []})));

    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].headers.get("authorization").is_none());
    assert_eq!(requests[0].url.path(), "/registry/plan/list");
}

#[tokio::test]
async fn unassigned_status_codes_still_carry_status_text() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(520).set_body_string("origin error"))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(599).set_body_json(json!({"error": "quota"})))
        .mount(&server)
        .await;

    let client = client_for(&server);

    let err = client.execute(&dns::LIST_DOMAINS, None).await.unwrap_err();
    let Error::Status { status, status_text } = &err else {
        panic!("expected status error, got {err:?}");
    };
    assert_eq!(*status, 520);
    assert!(!status_text.is_empty());
    assert_eq!(err.to_string(), *status_text);

    let err = client.execute(&dns::LIST_DOMAINS, None).await.unwrap_err();
    let Error::Api {
        status,
        status_text,
        message,
    } = &err
    else {
        panic!("expected api error, got {err:?}");
    };
    assert_eq!(*status, 599);
    assert_eq!(message, "quota");
    assert!(!status_text.is_empty());
    assert_eq!(err.to_string(), format!("{status_text}: quota"));
}
