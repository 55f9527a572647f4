//! Shared leaf types for the Jentic client.
//!
//! Nothing in here talks to the network or the filesystem. These are the
//! small building blocks every other crate leans on:
//!
//! - [`ErrorLocation`]: where an error was raised, captured via `#[track_caller]`
//! - [`HttpStatusCode`]: status classification without parsing message text
//! - [`RedactedApiKey`]: a credential that never leaks into logs

pub mod error;
pub mod http_status;
pub mod redacted_key;

pub use error::error_location::ErrorLocation;
pub use error::redact_error::RedactError;
pub use http_status::HttpStatusCode;
pub use redacted_key::RedactedApiKey;

#[cfg(test)]
mod tests;
