use crate::helpers::{TEST_KEY, config_for, resolver_with_key, resolver_without_key};

use catalog_core::error::{CredentialError, RequestError};
use catalog_core::{Command, CoreError, fetch};

use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{body_json, header, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// End-to-end: resolve → build → send, against a mock catalog
// ============================================================================

/// **VALUE**: Verifies `load` sends the partitioned query and the file-sourced key.
///
/// **BUG THIS CATCHES**: Would catch the resolver result not reaching the header,
/// or an empty `operation_uuids=` param being sent for workflow-only loads.
#[tokio::test]
async fn given_workflow_only_load_when_fetched_then_sends_single_param_with_key() {
    // GIVEN: A catalog expecting only workflow_uuids
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/files"))
        .and(header("x-jentic-api-key", TEST_KEY))
        .and(query_param("workflow_uuids", "wf_x"))
        .and(query_param_is_missing("operation_uuids"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"workflows": {"wf_x": {}}})))
        .expect(1)
        .mount(&server)
        .await;
    let dir = TempDir::new().unwrap();

    // WHEN: Fetching
    let command = Command::Load {
        ids: vec![String::from("wf_x")],
    };
    let payload = fetch(&command, &config_for(&server), &resolver_with_key(&dir))
        .await
        .unwrap();

    // THEN: Payload returned untouched
    assert_eq!(payload, json!({"workflows": {"wf_x": {}}}));
}

#[tokio::test]
async fn given_mixed_load_when_fetched_then_sends_both_params() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/files"))
        .and(query_param("operation_uuids", "op_a,op_c"))
        .and(query_param("workflow_uuids", "wf_b"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;
    let dir = TempDir::new().unwrap();

    let command = Command::Load {
        ids: vec![
            String::from("op_a"),
            String::from("wf_b"),
            String::from("op_c"),
        ],
    };
    let result = fetch(&command, &config_for(&server), &resolver_with_key(&dir)).await;

    assert!(result.is_ok(), "{result:?}");
}

/// **VALUE**: Verifies the public search works with no credential anywhere.
///
/// **WHY THIS MATTERS**: `pub-search` is how new users discover the catalog
/// before they have a key.
#[tokio::test]
async fn given_no_credential_when_public_search_fetched_then_succeeds_without_key_header() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/search/all"))
        .and(body_json(json!({"query": "home automation", "limit": 5})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"operations": []})))
        .expect(1)
        .mount(&server)
        .await;
    let dir = TempDir::new().unwrap();

    let command = Command::PublicSearch {
        query: String::from("home automation"),
        limit: 5,
    };
    let payload = fetch(&command, &config_for(&server), &resolver_without_key(&dir))
        .await
        .unwrap();

    assert_eq!(payload, json!({"operations": []}));
    let received = server.received_requests().await.unwrap();
    assert!(received[0].headers.get("x-jentic-api-key").is_none());
}

/// **VALUE**: Verifies a missing key stops the pipeline before any request.
///
/// **BUG THIS CATCHES**: Would catch an unauthenticated request being sent (and
/// a confusing 401 reported) instead of the MissingCredential instructions.
#[tokio::test]
async fn given_no_credential_when_auth_command_fetched_then_missing_credential_and_no_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(0)
        .mount(&server)
        .await;
    let dir = TempDir::new().unwrap();

    let result = fetch(&Command::ListApis, &config_for(&server), &resolver_without_key(&dir)).await;

    assert!(matches!(
        result,
        Err(CoreError::Credential(CredentialError::Missing { .. }))
    ));
}

#[tokio::test]
async fn given_invalid_inputs_when_execute_fetched_then_fails_before_network() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(0)
        .mount(&server)
        .await;
    let dir = TempDir::new().unwrap();

    let command = Command::Execute {
        id: String::from("op_1"),
        inputs: Some(String::from("not json")),
    };
    let result = fetch(&command, &config_for(&server), &resolver_with_key(&dir)).await;

    assert!(matches!(
        result,
        Err(CoreError::Request(RequestError::InvalidInputPayload { .. }))
    ));
}

#[tokio::test]
async fn given_execute_when_fetched_then_posts_typed_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/agents/execute"))
        .and(body_json(json!({
            "execution_type": "workflow",
            "uuid": "wf_1",
            "inputs": {"param": "value"}
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"success": true, "status_code": 200, "output": "done"})),
        )
        .expect(1)
        .mount(&server)
        .await;
    let dir = TempDir::new().unwrap();

    let command = Command::Execute {
        id: String::from("wf_1"),
        inputs: Some(String::from(r#"{"param":"value"}"#)),
    };
    let payload = fetch(&command, &config_for(&server), &resolver_with_key(&dir))
        .await
        .unwrap();

    assert_eq!(payload["output"], "done");
}
