use std::process::{Command, Output};

use serde_json::{Value, json};
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Process-level tests: exit codes and stdout/stderr of the built binary
// ============================================================================

const UNREACHABLE_BASE_URL: &str = "http://127.0.0.1:1/api/v1/";

/// Run the binary with a scrubbed environment: no key, no base URL override,
/// a fresh HOME (no openclaw config) and a working directory without `.env`.
fn run_jentic(home: &TempDir, key: Option<&str>, args: &[&str]) -> Output {
    let mut command = Command::new(env!("CARGO_BIN_EXE_jentic"));
    command
        .args(args)
        .current_dir(home.path())
        .env("HOME", home.path())
        .env_remove("JENTIC_AGENT_API_KEY")
        .env_remove("JENTIC_BASE_URL");
    if let Some(key) = key {
        command.env("JENTIC_AGENT_API_KEY", key);
    }
    command.output().expect("binary should start")
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

/// **VALUE**: Verifies a missing key exits 1 with the instructions on stderr.
///
/// **WHY THIS MATTERS**: Agents calling the CLI branch on the exit code. Exit 0
/// with an empty stdout would look like "no APIs".
///
/// **BUG THIS CATCHES**: Would catch main returning SUCCESS on error, or printing
/// the error to stdout.
#[test]
fn given_no_credential_when_apis_run_then_exit_one_with_message_on_stderr() {
    // GIVEN: No env key and an empty HOME
    let home = TempDir::new().unwrap();

    // WHEN: Running an authenticated command
    let output = run_jentic(&home, None, &["--base-url", UNREACHABLE_BASE_URL, "apis"]);

    // THEN: Exit 1, message on stderr, nothing on stdout
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty(), "stdout should be empty");
    let err = stderr(&output);
    assert!(err.starts_with("Error: Missing Credential"), "{err}");
    assert!(err.contains("JENTIC_AGENT_API_KEY"), "{err}");
}

#[test]
fn given_invalid_inputs_when_execute_run_then_exit_one_before_network() {
    let home = TempDir::new().unwrap();

    let output = run_jentic(
        &home,
        Some("ak_binary"),
        &["--base-url", UNREACHABLE_BASE_URL, "execute", "op_1", "--inputs", "not json"],
    );

    assert_eq!(output.status.code(), Some(1));
    let err = stderr(&output);
    assert!(err.contains("Invalid Input Payload"), "{err}");
    assert!(!err.contains("Network Error"), "No request should be attempted: {err}");
}

#[test]
fn given_unreachable_catalog_when_pub_search_run_then_exit_one_with_network_error() {
    let home = TempDir::new().unwrap();

    let output = run_jentic(&home, None, &["--base-url", UNREACHABLE_BASE_URL, "pub-search", "q"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Network Error"), "{}", stderr(&output));
}

#[test]
fn given_missing_subcommand_when_run_then_usage_exit_code() {
    let home = TempDir::new().unwrap();

    let output = run_jentic(&home, None, &[]);

    assert_eq!(output.status.code(), Some(2));
}

/// **VALUE**: Verifies the success path: exit 0 and the raw payload on stdout.
///
/// **BUG THIS CATCHES**: Would catch log lines leaking onto stdout and breaking
/// `--json` consumers.
#[tokio::test]
async fn given_reachable_catalog_when_json_pub_search_run_then_exit_zero_with_payload() {
    // GIVEN: A public catalog that answers
    let server = MockServer::start().await;
    let payload = json!({"operations": [{"id": "op_1", "distance": 0.3}], "workflows": []});
    Mock::given(method("POST"))
        .and(path("/api/v1/search/all"))
        .respond_with(ResponseTemplate::new(200).set_body_json(payload.clone()))
        .expect(1)
        .mount(&server)
        .await;
    let base_url = format!("{}/api/v1/", server.uri());

    // WHEN: Running the binary off the async runtime
    let output = tokio::task::spawn_blocking(move || {
        let home = TempDir::new().unwrap();
        run_jentic(&home, None, &["-vv", "--json", "--base-url", &base_url, "pub-search", "q"])
    })
    .await
    .unwrap();

    // THEN: Exit 0 and stdout is exactly the JSON payload
    assert_eq!(output.status.code(), Some(0), "{}", stderr(&output));
    let printed: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(printed, payload);
}
