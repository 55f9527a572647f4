use catalog_core::CoreError;

use common::ErrorLocation;

use thiserror::Error;

/// Everything that can end an invocation with exit code 1.
#[derive(Debug, Error)]
pub enum JenticError {
    /// Credential, request building, or transport failure.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Bad `--base-url` / `JENTIC_BASE_URL`.
    #[error("Config Error: {message} {location}")]
    Config {
        message: String,
        location: ErrorLocation,
    },

    #[error("Logger Error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },
}
