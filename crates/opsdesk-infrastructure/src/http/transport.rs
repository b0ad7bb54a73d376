//! reqwest-backed implementation of `ApiTransport`.

use async_trait::async_trait;
use opsdesk_core::api::{ApiRequest, ApiResponse, ApiTransport, HttpMethod};
use opsdesk_core::config::ApiConfig;
use opsdesk_core::error::{OpsdeskError, Result};
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::time::Duration;

/// Transport that talks to the admin REST API over HTTP.
#[derive(Clone)]
pub struct ReqwestTransport {
    client: Client,
    base_url: String,
    auth_token: Option<String>,
}

impl ReqwestTransport {
    /// Creates a transport from the `[api]` config section.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| OpsdeskError::config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            auth_token: config.auth_token.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

#[async_trait]
impl ApiTransport for ReqwestTransport {
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse> {
        let url = self.url(&request.path);
        tracing::debug!(
            request_id = %request.request_id,
            "[ReqwestTransport] {:?} {}",
            request.method,
            url
        );

        let mut builder = match request.method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
        };
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }
        if let Some(token) = &self.auth_token {
            builder = builder.bearer_auth(token);
        }

        let response = builder.send().await.map_err(transport_error)?;
        let status = response.status();
        let text = response.text().await.map_err(transport_error)?;

        tracing::debug!(
            request_id = %request.request_id,
            "[ReqwestTransport] {} -> {}",
            url,
            status
        );

        if status == StatusCode::UNAUTHORIZED {
            return Err(OpsdeskError::unauthorized(
                failure_message(&text).unwrap_or_else(|| "session expired".to_string()),
            ));
        }
        if !status.is_success() {
            let message = failure_message(&text)
                .or_else(|| status.canonical_reason().map(str::to_string))
                .unwrap_or_else(|| "request failed".to_string());
            return Err(OpsdeskError::api(status.as_u16(), message));
        }

        let body = if text.trim().is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&text)?
        };

        Ok(ApiResponse {
            status: status.as_u16(),
            body,
        })
    }
}

fn transport_error(err: reqwest::Error) -> OpsdeskError {
    if err.is_timeout() {
        OpsdeskError::transport(format!("request timed out: {}", err))
    } else {
        OpsdeskError::transport(err.to_string())
    }
}

/// Extracts the `message` field of an error envelope, if the body is one.
fn failure_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    value
        .get("message")
        .and_then(|m| m.as_str())
        .map(str::to_string)
}
