use jentic::cli::Cli;
use jentic::dispatch::{dispatch, run};
use jentic::error::JenticError;

use catalog_core::error::TransportError;
use catalog_core::render::OutputMode;
use catalog_core::{ClientConfig, Command, CoreError, CredentialResolver};

use std::fs;

use clap::Parser;
use serde_json::{Value, json};
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Dispatcher tests: parsed command → mock catalog → rendered stdout text
// ============================================================================

const UNSET_ENV_VAR: &str = "JENTIC_DISPATCH_TEST_KEY_NEVER_SET";

fn config_for(server: &MockServer) -> ClientConfig {
    ClientConfig::new(&format!("{}/api/v1", server.uri())).unwrap()
}

fn resolver(dir: &TempDir) -> CredentialResolver {
    let path = dir.path().join("openclaw.json");
    fs::write(&path, r#"{"skills":{"entries":{"jentic":{"apiKey":"ak_dispatch"}}}}"#).unwrap();
    CredentialResolver::new(UNSET_ENV_VAR, Some(path))
}

async fn mount_json(server: &MockServer, verb: &str, endpoint: &str, body: Value) {
    Mock::given(method(verb))
        .and(path(endpoint))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

/// **VALUE**: Verifies the human rendering of a search reaches the caller.
///
/// **WHY THIS MATTERS**: This is the default path every user hits; it proves the
/// resolver, builder, transport and renderer are wired in the right order.
#[tokio::test]
async fn given_search_command_when_dispatched_then_returns_human_rendering() {
    // GIVEN: A catalog with one search hit
    let server = MockServer::start().await;
    mount_json(
        &server,
        "POST",
        "/api/v1/agents/search",
        json!({
            "total_count": 40,
            "results": [{
                "id": "op_ad385f1f20e34e5b", "api_name": "hackernews",
                "summary": "Get top stories", "method": "GET", "path": "/topstories.json",
                "entity_type": "operation", "distance": 0.2
            }]
        }),
    )
    .await;
    let dir = TempDir::new().unwrap();

    // WHEN: Dispatching in human mode
    let output = dispatch(
        &Command::search("get top news stories"),
        &config_for(&server),
        &resolver(&dir),
        OutputMode::Human,
    )
    .await
    .unwrap();

    // THEN: Header plus a two-line entry
    assert_eq!(
        output,
        "Results for 'get top news stories' (1 of 40):\n\
         \x20 [op_ad385f1f20e34e5b] hackernews — Get top stories\n\
         \x20   GET /topstories.json  (operation, score: 0.200)\n"
    );
}

/// **VALUE**: Verifies `--json` returns the service payload unchanged.
///
/// **BUG THIS CATCHES**: Would catch machine mode going through the per-command
/// renderer (e.g. the public-search merge reordering entries).
#[tokio::test]
async fn given_machine_mode_when_public_search_dispatched_then_returns_raw_payload() {
    let server = MockServer::start().await;
    let payload = json!({
        "operations": [{"id": "op_1", "distance": 0.9}],
        "apis": [{"id": "api_1", "distance": 0.1}]
    });
    mount_json(&server, "POST", "/api/v1/search/all", payload.clone()).await;
    let dir = TempDir::new().unwrap();

    let output = dispatch(
        &Command::PublicSearch {
            query: String::from("q"),
            limit: 5,
        },
        &config_for(&server),
        &resolver(&dir),
        OutputMode::Machine,
    )
    .await
    .unwrap();

    let printed: Value = serde_json::from_str(&output).unwrap();
    assert_eq!(printed, payload);
    assert!(output.find("op_1").unwrap() < output.find("api_1").unwrap());
}

#[tokio::test]
async fn given_execute_command_when_dispatched_then_prints_status_and_output() {
    let server = MockServer::start().await;
    mount_json(
        &server,
        "POST",
        "/api/v1/agents/execute",
        json!({"success": true, "status_code": 200, "output": {"ok": true}}),
    )
    .await;
    let dir = TempDir::new().unwrap();

    let output = dispatch(
        &Command::Execute {
            id: String::from("op_1"),
            inputs: None,
        },
        &config_for(&server),
        &resolver(&dir),
        OutputMode::Human,
    )
    .await
    .unwrap();

    assert_eq!(output, "Success: true  Status: 200\nOutput:\n{\n  \"ok\": true\n}\n");
}

/// **VALUE**: Verifies a 500 becomes a fatal error with no rendered output.
///
/// **WHY THIS MATTERS**: main turns `Err` into exit code 1. If the error page
/// were rendered instead, scripts would see exit 0 and garbage on stdout.
#[tokio::test]
async fn given_server_error_when_dispatched_then_http_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/agents/apis"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"detail": "boom"})))
        .mount(&server)
        .await;
    let dir = TempDir::new().unwrap();

    let result = dispatch(
        &Command::ListApis,
        &config_for(&server),
        &resolver(&dir),
        OutputMode::Human,
    )
    .await;

    match result {
        Err(JenticError::Core(CoreError::Transport(err @ TransportError::Http { .. }))) => {
            assert_eq!(err.status_code(), Some(500));
        }
        other => panic!("Expected HttpError, got {other:?}"),
    }
}

#[tokio::test]
async fn given_unparsable_base_url_when_run_then_config_error() {
    let cli = Cli::try_parse_from(["jentic", "--base-url", "not a url", "pub-search", "q"]).unwrap();

    let result = run(cli).await;

    assert!(matches!(result, Err(JenticError::Config { .. })), "{result:?}");
}
