//! Transport abstraction for the remote admin API.

use crate::error::{OpsdeskError, Result};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HttpMethod {
    Get,
    Post,
}

/// A single call against the remote API, relative to the configured base URL.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    /// Correlates log lines emitted for one call.
    pub request_id: Uuid,
    pub method: HttpMethod,
    /// Path relative to the API base, starting with `/`.
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            request_id: Uuid::new_v4(),
            method: HttpMethod::Get,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn post(path: impl Into<String>, body: Value) -> Self {
        Self {
            request_id: Uuid::new_v4(),
            method: HttpMethod::Post,
            path: path.into(),
            query: Vec::new(),
            body: Some(body),
        }
    }

    pub fn with_query(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((key.into(), value.to_string()));
        self
    }
}

/// The success/failure envelope every admin API endpoint answers with.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
}

impl<T: DeserializeOwned> ApiEnvelope<T> {
    /// Parses an envelope from a response body.
    pub fn from_value(body: Value) -> Result<Self> {
        Ok(serde_json::from_value(body)?)
    }

    /// Unwraps the payload, turning `success: false` into an API error.
    ///
    /// `status` is the HTTP status the envelope arrived with.
    pub fn into_result(self, status: u16) -> Result<T> {
        if !self.success {
            let message = self
                .message
                .unwrap_or_else(|| "request was not successful".to_string());
            return Err(OpsdeskError::api(status, message));
        }
        self.data
            .ok_or_else(|| OpsdeskError::api(status, "response envelope carried no data"))
    }
}

/// A raw HTTP answer with a 2xx status.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Value,
}

/// Executes API requests.
///
/// Implementations map network failures to `OpsdeskError::Transport`, HTTP 401
/// to `OpsdeskError::Unauthorized` and every other non-2xx status to
/// `OpsdeskError::Api`. Timeouts are the transport's responsibility.
#[async_trait]
pub trait ApiTransport: Send + Sync {
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse>;
}
