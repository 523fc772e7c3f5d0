use std::time::Duration;

use reqwest::header::ACCEPT;
use serde_json::Value;

use crate::server::{AdapterConfig, AdapterError, BasicCredentials};

/// Client for the single upstream collection.
///
/// Every call is one GET, attempted exactly once, bounded by `timeout`.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    http: reqwest::Client,
    url: String,
    credentials: Option<BasicCredentials>,
    timeout: Duration,
}

impl UpstreamClient {
    pub fn new(config: &AdapterConfig) -> Result<Self, AdapterError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| AdapterError::Unexpected(format!("failed to build upstream client: {e}")))?;

        Ok(Self {
            http,
            url: config.upstream_url.clone(),
            credentials: config.upstream_credentials.clone(),
            timeout: config.upstream_timeout,
        })
    }

    /// Fetch the whole upstream collection as raw JSON items.
    pub async fn fetch(&self) -> Result<Vec<Value>, AdapterError> {
        let mut request = self.http
            .get(&self.url)
            .header(ACCEPT, "application/json")
            .timeout(self.timeout);

        if let Some(creds) = &self.credentials {
            request = request.basic_auth(&creds.username, Some(&creds.password));
        }

        let response = request.send().await.map_err(Self::map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!(status = status.as_u16(), "upstream returned an error status");
            return Err(AdapterError::UpstreamStatus(status.as_u16()));
        }

        let payload: Value = response.json().await.map_err(Self::map_transport_error)?;

        match payload {
            Value::Array(items) => {
                tracing::debug!(items = items.len(), "fetched upstream collection");
                Ok(items)
            }
            other => Err(AdapterError::Unexpected(format!(
                "Upstream payload is not a JSON array (got {})",
                Self::kind_of(&other)
            ))),
        }
    }

    fn map_transport_error(err: reqwest::Error) -> AdapterError {
        if err.is_timeout() {
            tracing::warn!("upstream request timed out");
            return AdapterError::UpstreamTimeout;
        }
        AdapterError::Unexpected(err.to_string())
    }

    fn kind_of(value: &Value) -> &'static str {
        match value {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }
}
