//! Glue between the parsed command line and the catalog pipeline.

use crate::cli::Cli;
use crate::error::JenticError;

use catalog_core::render::{OutputMode, render};
use catalog_core::{ClientConfig, Command, CredentialResolver, fetch};

use common::ErrorLocation;

use std::panic::Location;

use log::debug;

/// Run one invocation and return the text destined for stdout.
pub async fn run(cli: Cli) -> Result<String, JenticError> {
    let config = ClientConfig::new(&cli.base_url).map_err(|e| JenticError::Config {
        message: format!("Invalid base URL '{}': {e}", cli.base_url),
        location: ErrorLocation::from(Location::caller()),
    })?;
    let resolver = CredentialResolver::from_environment();
    let mode = if cli.json {
        OutputMode::Machine
    } else {
        OutputMode::Human
    };

    dispatch(&Command::from(cli.command), &config, &resolver, mode).await
}

/// Fetch `command` and render the payload.
pub async fn dispatch(
    command: &Command,
    config: &ClientConfig,
    resolver: &CredentialResolver,
    mode: OutputMode,
) -> Result<String, JenticError> {
    debug!("Dispatching {:?} ({mode:?})", command.kind());

    let payload = fetch(command, config, resolver).await?;

    Ok(render(command, &payload, mode))
}
