pub mod catalog_client;
pub mod credentials;
pub mod request;

pub use catalog_client::TransportError;
pub use credentials::CredentialError;
pub use request::RequestError;

use thiserror::Error;

/// Any fatal failure on the way from a parsed command to a JSON payload.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Credential(#[from] CredentialError),

    #[error(transparent)]
    Request(#[from] RequestError),

    #[error(transparent)]
    Transport(#[from] TransportError),
}
