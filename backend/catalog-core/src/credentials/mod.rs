//! API key resolution.
//!
//! Lookup order:
//! 1. `JENTIC_AGENT_API_KEY` environment variable (non-empty)
//! 2. `skills.entries.jentic.apiKey` in `~/.openclaw/openclaw.json`
//!
//! Any problem with the config file (missing, unreadable, not JSON, key absent or
//! not a string) counts as "not found". Only the absence of both is an error.
//! The file is only read; nothing is ever written back.

pub mod paths;

use crate::JENTIC_API_KEY_ENV;
use crate::error::CredentialError;

use common::RedactedApiKey;

use std::env;
use std::fs;
use std::path::PathBuf;

use log::{debug, info, warn};
use serde_json::Value;

/// JSON pointer to the key inside the openclaw config document.
pub const OPENCLAW_API_KEY_POINTER: &str = "/skills/entries/jentic/apiKey";

/// Where a resolved key came from (for logging).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialSource {
    Environment,
    ConfigFile,
}

impl std::fmt::Display for CredentialSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CredentialSource::Environment => write!(f, "environment"),
            CredentialSource::ConfigFile => write!(f, "openclaw config"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CredentialResolver {
    env_var: String,
    config_path: Option<PathBuf>,
}

impl CredentialResolver {
    pub fn new(env_var: impl Into<String>, config_path: Option<PathBuf>) -> Self {
        Self {
            env_var: env_var.into(),
            config_path,
        }
    }

    /// Resolver for the real environment: `JENTIC_AGENT_API_KEY` plus the
    /// openclaw config under the home directory.
    pub fn from_environment() -> Self {
        Self::new(JENTIC_API_KEY_ENV, paths::openclaw_config_path())
    }

    /// Resolve the key or fail with [`CredentialError::Missing`].
    pub fn resolve(&self) -> Result<RedactedApiKey, CredentialError> {
        self.resolve_with_source()
            .map(|(key, _)| key)
            .ok_or_else(|| CredentialError::missing(&self.env_var))
    }

    pub fn resolve_with_source(&self) -> Option<(RedactedApiKey, CredentialSource)> {
        if let Some(key) = self.key_from_env() {
            info!("Using API key from {} ({} chars)", self.env_var, key.len());
            return Some((key, CredentialSource::Environment));
        }

        let key = self.key_from_config_file()?;
        info!("Using API key from {} ({} chars)", CredentialSource::ConfigFile, key.len());
        Some((key, CredentialSource::ConfigFile))
    }

    fn key_from_env(&self) -> Option<RedactedApiKey> {
        match env::var(&self.env_var) {
            Ok(value) => {
                let key = RedactedApiKey::non_empty(value);
                if key.is_none() {
                    debug!("{} is set but empty", self.env_var);
                }
                key
            }
            Err(env::VarError::NotPresent) => {
                debug!("No {} env var found", self.env_var);
                None
            }
            Err(env::VarError::NotUnicode(_)) => {
                warn!("Env var {} contains invalid unicode, ignoring", self.env_var);
                None
            }
        }
    }

    fn key_from_config_file(&self) -> Option<RedactedApiKey> {
        let path = self.config_path.as_deref()?;

        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) => {
                debug!("Cannot read {}: {e}", path.display());
                return None;
            }
        };

        let document: Value = match serde_json::from_str(&contents) {
            Ok(document) => document,
            Err(e) => {
                debug!("{} is not valid JSON: {e}", path.display());
                return None;
            }
        };

        let key = extract_api_key(&document);
        if key.is_none() {
            debug!("{} has no string at {OPENCLAW_API_KEY_POINTER}", path.display());
        }
        key.and_then(RedactedApiKey::non_empty)
    }
}

/// Pull the key out of a parsed openclaw document.
pub fn extract_api_key(document: &Value) -> Option<&str> {
    document.pointer(OPENCLAW_API_KEY_POINTER)?.as_str()
}
