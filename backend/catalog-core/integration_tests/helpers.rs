use catalog_core::{ClientConfig, CredentialResolver};

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;
use wiremock::MockServer;

/// Env var that no test ever sets, so resolution always falls through to the file.
pub const UNSET_ENV_VAR: &str = "CATALOG_CORE_INTEGRATION_KEY_NEVER_SET";

pub const TEST_KEY: &str = "ak_integration";

pub fn config_for(server: &MockServer) -> ClientConfig {
    ClientConfig::new(&format!("{}/api/v1/", server.uri())).unwrap()
}

/// Resolver backed by an openclaw document holding [`TEST_KEY`].
pub fn resolver_with_key(dir: &TempDir) -> CredentialResolver {
    let path = dir.path().join("openclaw.json");
    fs::write(
        &path,
        format!(r#"{{"skills":{{"entries":{{"jentic":{{"apiKey":"{TEST_KEY}"}}}}}}}}"#),
    )
    .unwrap();
    CredentialResolver::new(UNSET_ENV_VAR, Some(path))
}

/// Resolver that can never produce a key.
pub fn resolver_without_key(dir: &TempDir) -> CredentialResolver {
    let path: PathBuf = dir.path().join("missing.json");
    CredentialResolver::new(UNSET_ENV_VAR, Some(path))
}
