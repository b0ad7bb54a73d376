//! REST implementation of `ChatRepository`.

use async_trait::async_trait;
use opsdesk_core::api::endpoint::chat_messages_path;
use opsdesk_core::api::{ApiEnvelope, ApiRequest, ApiTransport};
use opsdesk_core::chat::{ChatRepository, PageRequest, RawChatRecord};
use opsdesk_core::error::{OpsdeskError, Result};
use opsdesk_core::subject::Subject;
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SendMessageBody<'a> {
    text: &'a str,
    sender_id: &'a str,
}

/// Chat repository backed by the admin REST API.
///
/// Endpoints are resolved from the subject's `EntityKind`; see
/// [`chat_messages_path`].
pub struct RestChatRepository {
    transport: Arc<dyn ApiTransport>,
}

impl RestChatRepository {
    pub fn new(transport: Arc<dyn ApiTransport>) -> Self {
        Self { transport }
    }
}

#[async_trait]
impl ChatRepository for RestChatRepository {
    async fn history(&self, subject: &Subject, page: PageRequest) -> Result<Vec<RawChatRecord>> {
        if !subject.is_defined() {
            return Err(OpsdeskError::InvalidSubject(subject.to_string()));
        }

        let request = ApiRequest::get(chat_messages_path(subject))
            .with_query("page", page.page)
            .with_query("limit", page.limit);
        let response = self.transport.execute(request).await?;

        let records = ApiEnvelope::<Vec<RawChatRecord>>::from_value(response.body)?
            .into_result(response.status)?;
        tracing::debug!(
            "[RestChatRepository] {} records for {}",
            records.len(),
            subject
        );
        Ok(records)
    }

    async fn send(&self, subject: &Subject, text: &str, actor_id: &str) -> Result<RawChatRecord> {
        if !subject.is_defined() {
            return Err(OpsdeskError::InvalidSubject(subject.to_string()));
        }

        let body = serde_json::to_value(SendMessageBody {
            text,
            sender_id: actor_id,
        })?;
        let response = self
            .transport
            .execute(ApiRequest::post(chat_messages_path(subject), body))
            .await?;

        ApiEnvelope::<RawChatRecord>::from_value(response.body)?.into_result(response.status)
    }
}
