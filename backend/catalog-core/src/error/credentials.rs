use common::ErrorLocation;

use std::panic::Location;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum CredentialError {
    /// Neither the environment nor the config file produced a usable key.
    #[error("Missing Credential: {message} {location}")]
    Missing {
        message: String,
        location: ErrorLocation,
    },
}

impl CredentialError {
    #[track_caller]
    pub fn missing(env_var: &str) -> Self {
        CredentialError::Missing {
            message: format!(
                "No Jentic API key. Set {env_var} or store it in the openclaw config."
            ),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
