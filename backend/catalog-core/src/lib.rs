//! Credential resolution, request building, transport and response rendering
//! for the Jentic catalog.
//!
//! A single invocation flows through the modules in order:
//! [`credentials`] → [`request`] → [`catalog_client`] → [`render`].

pub mod catalog_client;
pub mod command;
pub mod config;
pub mod credentials;
pub mod error;
pub mod render;
pub mod request;

#[cfg(test)]
mod tests;

pub use catalog_client::CatalogClient;
pub use command::Command;
pub use config::ClientConfig;
pub use credentials::CredentialResolver;
pub use error::CoreError;
pub use request::{CatalogRequest, RequestBuilder};

use serde_json::Value;

pub const JENTIC_API_HOST: &str = "api-gw.main.us-east-1.jenticprod.net";
pub const JENTIC_BASE_URL: &str = const_format::concatcp!("https://", JENTIC_API_HOST, "/api/v1/");
pub const JENTIC_API_KEY_ENV: &str = "JENTIC_AGENT_API_KEY";
/// Sent as `X-JENTIC-API-KEY`; header names are case-insensitive.
pub const JENTIC_API_KEY_HEADER: &str = "x-jentic-api-key";
pub const DEFAULT_SEARCH_LIMIT: u32 = 5;

/// Resolve (when needed), build, and send one command, returning the raw payload.
///
/// `public-search` never touches the resolver.
pub async fn fetch(
    command: &Command,
    config: &ClientConfig,
    resolver: &CredentialResolver,
) -> Result<Value, CoreError> {
    let credential = if command.requires_auth() {
        Some(resolver.resolve()?)
    } else {
        None
    };

    let request = RequestBuilder::new(config).build(command, credential.as_ref())?;
    let client = CatalogClient::new()?;

    Ok(client.send(request).await?)
}
