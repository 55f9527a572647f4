// Unit tests for credential resolution
// Each test uses its own env var name so the process environment never collides;
// #[serial] guards the set_var/remove_var calls themselves.

use crate::credentials::paths::openclaw_config_path_in;
use crate::credentials::{CredentialResolver, CredentialSource, extract_api_key};
use crate::error::CredentialError;

use std::fs;
use std::path::PathBuf;

use serde_json::json;
use serial_test::serial;
use tempfile::TempDir;

fn write_config(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("openclaw.json");
    fs::write(&path, contents).unwrap();
    path
}

fn set_env(name: &str, value: &str) {
    // SAFETY: tests touching the environment are #[serial]
    unsafe { std::env::set_var(name, value) };
}

fn clear_env(name: &str) {
    // SAFETY: tests touching the environment are #[serial]
    unsafe { std::env::remove_var(name) };
}

const VALID_CONFIG: &str = r#"{"skills":{"entries":{"jentic":{"apiKey":"ak_from_file"}}}}"#;

/// **VALUE**: Verifies the environment variable wins and is returned verbatim.
///
/// **WHY THIS MATTERS**: Users override a stored key by exporting the variable.
/// If the file were consulted first, the override would be ignored.
///
/// **BUG THIS CATCHES**: Would catch swapped lookup order or trimming of the value.
#[test]
#[serial]
fn given_env_var_set_when_resolve_called_then_returns_env_value_verbatim() {
    // GIVEN: Both the env var and a valid config file
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, VALID_CONFIG);
    let var = "CATALOG_CORE_TEST_KEY_ENV_WINS";
    set_env(var, " ak_from_env ");

    // WHEN: Resolving
    let resolver = CredentialResolver::new(var, Some(path));
    let resolved = resolver.resolve_with_source();
    clear_env(var);

    // THEN: The env value comes back unchanged
    let (key, source) = resolved.expect("key should resolve");
    assert_eq!(key.expose(), " ak_from_env ");
    assert_eq!(source, CredentialSource::Environment);
}

/// **VALUE**: Verifies the env var short-circuits before any file access.
///
/// **BUG THIS CATCHES**: Would catch the resolver reading the config file eagerly
/// and failing on an unreadable path even though a key was exported.
#[test]
#[serial]
fn given_env_var_set_and_config_path_is_a_directory_when_resolve_called_then_succeeds() {
    // GIVEN: A config "file" that is actually a directory
    let dir = TempDir::new().unwrap();
    let var = "CATALOG_CORE_TEST_KEY_NO_FS";
    set_env(var, "ak_env");

    // WHEN: Resolving
    let resolver = CredentialResolver::new(var, Some(dir.path().to_path_buf()));
    let result = resolver.resolve();
    clear_env(var);

    // THEN: The env key is used
    assert_eq!(result.unwrap().expose(), "ak_env");
}

#[test]
#[serial]
fn given_env_var_unset_when_config_has_key_then_returns_file_key() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, VALID_CONFIG);
    let var = "CATALOG_CORE_TEST_KEY_FROM_FILE";
    clear_env(var);

    let resolver = CredentialResolver::new(var, Some(path));
    let (key, source) = resolver.resolve_with_source().expect("key from file");

    assert_eq!(key.expose(), "ak_from_file");
    assert_eq!(source, CredentialSource::ConfigFile);
}

#[test]
#[serial]
fn given_env_var_empty_when_config_has_key_then_falls_back_to_file() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, VALID_CONFIG);
    let var = "CATALOG_CORE_TEST_KEY_EMPTY_ENV";
    set_env(var, "");

    let resolver = CredentialResolver::new(var, Some(path));
    let result = resolver.resolve();
    clear_env(var);

    assert_eq!(result.unwrap().expose(), "ak_from_file");
}

/// **VALUE**: Verifies every config failure cause, with the env var unset or
/// empty, ends in `MissingCredential` instead of a panic or a parse error.
///
/// **WHY THIS MATTERS**: The config file belongs to another tool. Its absence or
/// a schema change there must produce the actionable "set JENTIC_AGENT_API_KEY"
/// message, not a JSON error.
///
/// **BUG THIS CATCHES**: Would catch `?` propagating an io/serde error out of the
/// file lookup, or a non-string key being stringified.
#[test]
#[serial]
fn given_no_env_and_each_config_failure_when_resolve_called_then_missing_credential() {
    let var = "CATALOG_CORE_TEST_KEY_MISSING";
    let dir = TempDir::new().unwrap();

    let broken_configs = [
        ("malformed", "{ this is not json"),
        ("missing key", r#"{"skills":{"entries":{"other":{"apiKey":"x"}}}}"#),
        ("wrong type", r#"{"skills":{"entries":{"jentic":{"apiKey":42}}}}"#),
        ("empty key", r#"{"skills":{"entries":{"jentic":{"apiKey":""}}}}"#),
        ("not an object", "[1, 2, 3]"),
    ];

    let mut config_paths: Vec<(&str, Option<PathBuf>)> = vec![
        ("absent file", Some(dir.path().join("does-not-exist.json"))),
        ("no home directory", None),
    ];
    for (label, contents) in broken_configs {
        let path = dir.path().join(format!("{}.json", label.replace(' ', "_")));
        fs::write(&path, contents).unwrap();
        config_paths.push((label, Some(path)));
    }

    for env_value in [None, Some("")] {
        match env_value {
            Some(value) => set_env(var, value),
            None => clear_env(var),
        }

        for (label, path) in &config_paths {
            let resolver = CredentialResolver::new(var, path.clone());
            let result = resolver.resolve();

            assert!(
                matches!(result, Err(CredentialError::Missing { .. })),
                "Expected MissingCredential for {label} (env {env_value:?}), got {result:?}"
            );
        }
    }
    clear_env(var);
}

#[test]
fn given_missing_credential_when_displayed_then_names_env_var() {
    let err = CredentialError::missing("JENTIC_AGENT_API_KEY");

    let message = err.to_string();

    assert!(message.contains("JENTIC_AGENT_API_KEY"), "{message}");
    assert!(message.starts_with("Missing Credential"));
}

#[test]
fn given_openclaw_document_when_key_extracted_then_follows_nested_path() {
    let document = json!({"skills": {"entries": {"jentic": {"apiKey": "ak_1"}}}});
    assert_eq!(extract_api_key(&document), Some("ak_1"));

    let document = json!({"skills": {"entries": {"jentic": {}}}});
    assert_eq!(extract_api_key(&document), None);
}

#[test]
fn given_home_dir_when_config_path_built_then_points_at_openclaw_json() {
    let path = openclaw_config_path_in(&PathBuf::from("/home/agent"));

    assert_eq!(path, PathBuf::from("/home/agent/.openclaw/openclaw.json"));
}
