//! Transport failures.
//!
//! - HTTP status codes stored directly, never parsed from strings
//! - Error bodies are not read; the status is the whole story
//! - `#[track_caller]` on every constructor for location capture

use crate::JENTIC_API_KEY_ENV;

use common::{ErrorLocation, HttpStatusCode};

use std::panic::Location;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum TransportError {
    /// DNS, connect, TLS or timeout failure before a status line arrived.
    #[error("Network Error: {message} {location}")]
    Network {
        message: String,
        is_timeout: bool,
        is_connection: bool,
        location: ErrorLocation,
    },

    /// The service answered with a non-2xx status.
    #[error("HTTP Error: {status_code} {reason} for {url} {location}")]
    Http {
        status_code: HttpStatusCode,
        reason: String,
        url: String,
        location: ErrorLocation,
    },

    /// A 2xx response whose body is not JSON.
    #[error("Decode Error: {message} {location}")]
    Decode {
        message: String,
        location: ErrorLocation,
    },

    #[error("HTTP Client Error: {message} {location}")]
    Client {
        message: String,
        location: ErrorLocation,
    },
}

impl TransportError {
    #[track_caller]
    pub fn http(status: reqwest::StatusCode, url: &url::Url) -> Self {
        let status_code = HttpStatusCode::from(status.as_u16());
        let mut reason = status.canonical_reason().unwrap_or("Unknown Status").to_string();
        if status_code.is_auth_failure() {
            reason.push_str(&format!(" (API key rejected, check {JENTIC_API_KEY_ENV})"));
        }

        TransportError::Http {
            status_code,
            reason,
            url: url.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Categorize a reqwest failure raised while sending.
    #[track_caller]
    pub fn network(error: &reqwest::Error) -> Self {
        let is_timeout = error.is_timeout();
        let is_connection = error.is_connect();

        let message = if is_timeout {
            format!("request timed out: {error}")
        } else if is_connection {
            format!("connection failed: {error}")
        } else {
            error.to_string()
        };

        TransportError::Network {
            message,
            is_timeout,
            is_connection,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn decode(error: &reqwest::Error) -> Self {
        TransportError::Decode {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn client(error: &reqwest::Error) -> Self {
        TransportError::Client {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Status code, for `Http` failures.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            TransportError::Http { status_code, .. } => Some(status_code.0),
            _ => None,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, TransportError::Network { is_timeout: true, .. })
    }
}
