//! Request construction for each catalog command.
//!
//! Builders are pure: they produce a [`CatalogRequest`] and never touch the
//! network, so an invalid `--inputs` payload is rejected before anything is sent.

use crate::JENTIC_API_KEY_HEADER;
use crate::command::Command;
use crate::config::ClientConfig;
use crate::error::{CoreError, CredentialError, RequestError};

use common::RedactedApiKey;

use std::time::Duration;

use log::{debug, warn};
use reqwest::Method;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use serde_json::{Map, Value, json};
use url::Url;

const AGENTS_APIS_ENDPOINT: &str = "agents/apis";
const AGENTS_SEARCH_ENDPOINT: &str = "agents/search";
const PUBLIC_SEARCH_ENDPOINT: &str = "search/all";
const FILES_ENDPOINT: &str = "files";
const AGENTS_EXECUTE_ENDPOINT: &str = "agents/execute";

const JSON_CONTENT_TYPE: &str = "application/json";

pub const OPERATION_PREFIX: &str = "op_";
pub const WORKFLOW_PREFIX: &str = "wf_";

pub const OPERATION_UUIDS_PARAM: &str = "operation_uuids";
pub const WORKFLOW_UUIDS_PARAM: &str = "workflow_uuids";

/// A fully built request, ready for [`crate::CatalogClient::send`].
#[derive(Debug, Clone)]
pub struct CatalogRequest {
    pub method: Method,
    /// Endpoint URL including any query string.
    pub url: Url,
    pub headers: HeaderMap,
    pub body: Option<Value>,
    pub timeout: Duration,
}

/// `load` identifiers split by prefix.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct IdPartition<'a> {
    pub operations: Vec<&'a str>,
    pub workflows: Vec<&'a str>,
    /// Identifiers with neither prefix. Never sent.
    pub dropped: Vec<&'a str>,
}

/// Split identifiers into `op_` and `wf_` groups, keeping input order.
pub fn partition_ids(ids: &[String]) -> IdPartition<'_> {
    let mut partition = IdPartition::default();
    for id in ids {
        if id.starts_with(OPERATION_PREFIX) {
            partition.operations.push(id);
        } else if id.starts_with(WORKFLOW_PREFIX) {
            partition.workflows.push(id);
        } else {
            partition.dropped.push(id);
        }
    }
    partition
}

/// `"operation"` for `op_` identifiers, `"workflow"` for everything else.
pub fn execution_type(id: &str) -> &'static str {
    if id.starts_with(OPERATION_PREFIX) {
        "operation"
    } else {
        "workflow"
    }
}

/// Parse the `--inputs` text. Absent means `{}`; anything but a JSON object fails.
pub fn parse_inputs(inputs: Option<&str>) -> Result<Value, RequestError> {
    let Some(raw) = inputs else {
        return Ok(Value::Object(Map::new()));
    };

    match serde_json::from_str::<Value>(raw) {
        Ok(value @ Value::Object(_)) => Ok(value),
        Ok(other) => Err(RequestError::invalid_input_payload(format!(
            "Invalid JSON for --inputs: expected an object, got {}",
            json_type_name(&other)
        ))),
        Err(e) => Err(RequestError::invalid_input_payload(format!(
            "Invalid JSON for --inputs: {e}"
        ))),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

pub struct RequestBuilder<'a> {
    config: &'a ClientConfig,
}

impl<'a> RequestBuilder<'a> {
    pub fn new(config: &'a ClientConfig) -> Self {
        Self { config }
    }

    /// Build the request for `command`. Authenticated commands need `credential`.
    pub fn build(
        &self,
        command: &Command,
        credential: Option<&RedactedApiKey>,
    ) -> Result<CatalogRequest, CoreError> {
        let request = match command {
            Command::PublicSearch { query, limit } => self.public_search(query, *limit)?,
            Command::ListApis => self.list_apis(require(credential)?)?,
            Command::Search { query, limit } => self.search(require(credential)?, query, *limit)?,
            Command::Load { ids } => self.load(require(credential)?, ids)?,
            Command::Execute { id, inputs } => {
                self.execute(require(credential)?, id, inputs.as_deref())?
            }
        };

        debug!("Built {} {}", request.method, request.url);
        Ok(request)
    }

    pub fn list_apis(&self, key: &RedactedApiKey) -> Result<CatalogRequest, RequestError> {
        Ok(CatalogRequest {
            method: Method::GET,
            url: self.config.endpoint(AGENTS_APIS_ENDPOINT)?,
            headers: auth_headers(key)?,
            body: None,
            timeout: self.config.query_timeout,
        })
    }

    pub fn search(
        &self,
        key: &RedactedApiKey,
        query: &str,
        limit: u32,
    ) -> Result<CatalogRequest, RequestError> {
        Ok(CatalogRequest {
            method: Method::POST,
            url: self.config.endpoint(AGENTS_SEARCH_ENDPOINT)?,
            headers: auth_headers(key)?,
            body: Some(json!({ "query": query, "limit": limit })),
            timeout: self.config.query_timeout,
        })
    }

    /// Same body as `search`, but against the public catalog with no key.
    pub fn public_search(&self, query: &str, limit: u32) -> Result<CatalogRequest, RequestError> {
        Ok(CatalogRequest {
            method: Method::POST,
            url: self.config.endpoint(PUBLIC_SEARCH_ENDPOINT)?,
            headers: json_headers(),
            body: Some(json!({ "query": query, "limit": limit })),
            timeout: self.config.query_timeout,
        })
    }

    /// `GET files?operation_uuids=..&workflow_uuids=..`; an empty group omits its parameter.
    pub fn load(&self, key: &RedactedApiKey, ids: &[String]) -> Result<CatalogRequest, RequestError> {
        let partition = partition_ids(ids);
        for id in &partition.dropped {
            warn!("Ignoring '{id}': identifiers must start with {OPERATION_PREFIX} or {WORKFLOW_PREFIX}");
        }

        let mut url = self.config.endpoint(FILES_ENDPOINT)?;
        {
            let mut pairs = url.query_pairs_mut();
            if !partition.operations.is_empty() {
                pairs.append_pair(OPERATION_UUIDS_PARAM, &partition.operations.join(","));
            }
            if !partition.workflows.is_empty() {
                pairs.append_pair(WORKFLOW_UUIDS_PARAM, &partition.workflows.join(","));
            }
        }
        if url.query() == Some("") {
            url.set_query(None);
        }

        Ok(CatalogRequest {
            method: Method::GET,
            url,
            headers: auth_headers(key)?,
            body: None,
            timeout: self.config.query_timeout,
        })
    }

    pub fn execute(
        &self,
        key: &RedactedApiKey,
        id: &str,
        inputs: Option<&str>,
    ) -> Result<CatalogRequest, RequestError> {
        let inputs = parse_inputs(inputs)?;

        Ok(CatalogRequest {
            method: Method::POST,
            url: self.config.endpoint(AGENTS_EXECUTE_ENDPOINT)?,
            headers: auth_headers(key)?,
            body: Some(json!({
                "execution_type": execution_type(id),
                "uuid": id,
                "inputs": inputs,
            })),
            timeout: self.config.execute_timeout,
        })
    }
}

fn require(credential: Option<&RedactedApiKey>) -> Result<&RedactedApiKey, CredentialError> {
    credential.ok_or_else(|| CredentialError::missing(crate::JENTIC_API_KEY_ENV))
}

fn json_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
    headers
}

fn auth_headers(key: &RedactedApiKey) -> Result<HeaderMap, RequestError> {
    let mut value = HeaderValue::from_str(key.expose())?;
    value.set_sensitive(true);

    let mut headers = json_headers();
    headers.insert(HeaderName::from_static(JENTIC_API_KEY_HEADER), value);
    Ok(headers)
}
