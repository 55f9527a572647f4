use crate::helpers::config_for;

use catalog_core::error::TransportError;
use catalog_core::{CatalogClient, RequestBuilder};

use common::RedactedApiKey;

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Transport tests against a mock catalog
// ============================================================================

/// **VALUE**: Verifies a built request reaches the server with method, path,
/// headers and body intact, and the JSON answer comes back.
///
/// **WHY THIS MATTERS**: This is the seam where the builder's output meets
/// reqwest. A dropped header here means every authenticated call is a 401.
///
/// **BUG THIS CATCHES**: Would catch headers or the JSON body not being applied
/// to the outgoing request.
#[tokio::test]
async fn given_search_request_when_sent_then_server_sees_key_and_body() {
    // GIVEN: A catalog expecting an authenticated search
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/agents/search"))
        .and(header("x-jentic-api-key", "ak_1"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({"query": "news", "limit": 5})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"results": [], "total_count": 0})))
        .expect(1)
        .mount(&server)
        .await;

    let config = config_for(&server);
    let request = RequestBuilder::new(&config)
        .search(&RedactedApiKey::new("ak_1"), "news", 5)
        .unwrap();

    // WHEN: Sending
    let payload = CatalogClient::new().unwrap().send(request).await.unwrap();

    // THEN: The decoded body is returned
    assert_eq!(payload, json!({"results": [], "total_count": 0}));
}

/// **VALUE**: Verifies a 500 surfaces as an HTTP error carrying the status, and
/// the body is not parsed into the error.
///
/// **BUG THIS CATCHES**: Would catch a missing status check that hands an
/// error page to the renderer as if it were a result.
#[tokio::test]
async fn given_server_error_when_sent_then_http_error_without_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/agents/apis"))
        .respond_with(ResponseTemplate::new(500).set_body_string("stack trace goes here"))
        .mount(&server)
        .await;

    let config = config_for(&server);
    let request = RequestBuilder::new(&config)
        .list_apis(&RedactedApiKey::new("ak_1"))
        .unwrap();

    let err = CatalogClient::new().unwrap().send(request).await.unwrap_err();

    assert_eq!(err.status_code(), Some(500));
    assert!(matches!(err, TransportError::Http { .. }));
    assert!(
        !err.to_string().contains("stack trace"),
        "Body must not leak into the error: {err}"
    );
    assert!(!err.to_string().contains("API key rejected"));
}

#[tokio::test]
async fn given_unauthorized_when_sent_then_http_error_is_auth_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let config = config_for(&server);
    let request = RequestBuilder::new(&config)
        .list_apis(&RedactedApiKey::new("ak_bad"))
        .unwrap();

    let err = CatalogClient::new().unwrap().send(request).await.unwrap_err();

    assert!(
        err.to_string().contains("API key rejected, check JENTIC_AGENT_API_KEY"),
        "Missing key hint: {err}"
    );
    match err {
        TransportError::Http { status_code, .. } => assert!(status_code.is_auth_failure()),
        other => panic!("Expected Http error, got {other:?}"),
    }
}

/// **VALUE**: Verifies the per-request timeout fires and is reported as a timeout.
///
/// **WHY THIS MATTERS**: There is no retry; a hung catalog must end the process
/// within the configured bound.
#[tokio::test]
async fn given_slow_server_when_sent_then_network_timeout() {
    // GIVEN: A server slower than the configured timeout
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({}))
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&server)
        .await;

    let config = config_for(&server).with_timeouts(Duration::from_millis(50), Duration::from_millis(50));
    let request = RequestBuilder::new(&config)
        .public_search("slow", 5)
        .unwrap();

    // WHEN: Sending
    let err = CatalogClient::new().unwrap().send(request).await.unwrap_err();

    // THEN: Reported as a network timeout
    assert!(err.is_timeout(), "Expected timeout, got {err:?}");
}

#[tokio::test]
async fn given_non_json_success_body_when_sent_then_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>ok</html>"))
        .mount(&server)
        .await;

    let config = config_for(&server);
    let request = RequestBuilder::new(&config).public_search("q", 1).unwrap();

    let err = CatalogClient::new().unwrap().send(request).await.unwrap_err();

    assert!(matches!(err, TransportError::Decode { .. }), "{err:?}");
}

#[tokio::test]
async fn given_unreachable_host_when_sent_then_network_error() {
    // GIVEN: A port nothing listens on
    let config = catalog_core::ClientConfig::new("http://127.0.0.1:1/api/v1/").unwrap();
    let request = RequestBuilder::new(&config).public_search("q", 1).unwrap();

    // WHEN: Sending
    let err = CatalogClient::new().unwrap().send(request).await.unwrap_err();

    // THEN: Network failure, no status code
    assert!(matches!(err, TransportError::Network { .. }), "{err:?}");
    assert_eq!(err.status_code(), None);
}
