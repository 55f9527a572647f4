//! Per-invocation client configuration.
//!
//! Built once in the dispatcher and handed by reference to the request builder
//! and transport. Nothing here is global.

use crate::error::RequestError;

use std::time::Duration;

use url::Url;

/// Timeout for apis, search, pub-search and load.
pub const QUERY_TIMEOUT: Duration = Duration::from_secs(15);

/// Timeout for execute; the service performs a downstream call.
pub const EXECUTE_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Debug, Clone)]
pub struct ClientConfig {
    base_url: Url,
    pub query_timeout: Duration,
    pub execute_timeout: Duration,
}

impl ClientConfig {
    /// Parse a base URL. A trailing `/` is added when missing so that
    /// endpoint joins stay under the base path.
    pub fn new(base_url: &str) -> Result<Self, RequestError> {
        let mut base_url = Url::parse(base_url)?;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Ok(Self {
            base_url,
            query_timeout: QUERY_TIMEOUT,
            execute_timeout: EXECUTE_TIMEOUT,
        })
    }

    pub fn with_timeouts(mut self, query_timeout: Duration, execute_timeout: Duration) -> Self {
        self.query_timeout = query_timeout;
        self.execute_timeout = execute_timeout;
        self
    }

    /// Resolve a relative endpoint such as `agents/search`.
    pub fn endpoint(&self, path: &str) -> Result<Url, RequestError> {
        Ok(self.base_url.join(path)?)
    }
}
