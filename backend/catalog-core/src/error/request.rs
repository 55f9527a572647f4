use common::ErrorLocation;

use std::panic::Location;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum RequestError {
    #[error("Invalid Input Payload: {message} {location}")]
    InvalidInputPayload {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid Header: {message} {location}")]
    InvalidHeader {
        message: String,
        location: ErrorLocation,
    },

    #[error("URL Parse Error: {message} {location}")]
    UrlParse {
        message: String,
        location: ErrorLocation,
    },
}

impl RequestError {
    #[track_caller]
    pub fn invalid_input_payload(message: impl Into<String>) -> Self {
        RequestError::InvalidInputPayload {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<url::ParseError> for RequestError {
    #[track_caller]
    fn from(error: url::ParseError) -> Self {
        RequestError::UrlParse {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<reqwest::header::InvalidHeaderValue> for RequestError {
    #[track_caller]
    fn from(error: reqwest::header::InvalidHeaderValue) -> Self {
        RequestError::InvalidHeader {
            message: format!("API key is not a valid header value: {error}"),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
