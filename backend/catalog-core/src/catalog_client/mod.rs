use crate::error::TransportError;
use crate::request::CatalogRequest;

use log::{debug, info};
use reqwest::Client;
use serde_json::Value;

/// Thin HTTP client for the catalog. One call, one round trip, no retries.
#[derive(Clone)]
pub struct CatalogClient {
    client: Client,
}

impl CatalogClient {
    pub fn new() -> Result<Self, TransportError> {
        let client = Client::builder()
            .build()
            .map_err(|e| TransportError::client(&e))?;

        Ok(Self { client })
    }

    /// Send `request` and decode the JSON body.
    ///
    /// # Errors
    /// - [`TransportError::Network`] when no response arrives (DNS, connect, timeout)
    /// - [`TransportError::Http`] on a non-2xx status; the body is not read
    /// - [`TransportError::Decode`] when a 2xx body is not JSON
    pub async fn send(&self, request: CatalogRequest) -> Result<Value, TransportError> {
        let CatalogRequest {
            method,
            url,
            headers,
            body,
            timeout,
        } = request;

        info!("{method} {url}");

        let mut builder = self
            .client
            .request(method, url.clone())
            .headers(headers)
            .timeout(timeout);
        if let Some(body) = &body {
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| TransportError::network(&e))?;

        let status = response.status();
        debug!("{url} answered {status}");

        if !status.is_success() {
            return Err(TransportError::http(status, &url));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    TransportError::network(&e)
                } else {
                    TransportError::decode(&e)
                }
            })
    }
}
