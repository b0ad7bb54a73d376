//! Chat repository trait.
//!
//! Defines the interface for reading and writing per-entity chat history.

use super::message::RawChatRecord;
use crate::error::Result;
use crate::subject::Subject;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Default number of records requested by a history load.
pub const DEFAULT_PAGE_SIZE: u32 = 50;

/// A bounded page of historical records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// 1-based page number.
    pub page: u32,
    pub limit: u32,
}

impl PageRequest {
    /// The first page with the given limit.
    pub fn first(limit: u32) -> Self {
        Self { page: 1, limit }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::first(DEFAULT_PAGE_SIZE)
    }
}

/// An abstract data source for entity chat history.
///
/// This trait decouples the loader from the remote API (REST, fixtures,
/// in-memory mocks in tests).
///
/// # Implementation Notes
///
/// Implementations must not retry or cache: the loader decides which results
/// are still relevant.
#[async_trait]
pub trait ChatRepository: Send + Sync {
    /// Fetches a page of history for the subject, oldest first.
    ///
    /// # Returns
    ///
    /// - `Ok(Vec<RawChatRecord>)`: Records in server order
    /// - `Err(_)`: Transport or API failure
    async fn history(&self, subject: &Subject, page: PageRequest) -> Result<Vec<RawChatRecord>>;

    /// Persists a new message written by `actor_id`.
    ///
    /// # Returns
    ///
    /// - `Ok(RawChatRecord)`: The canonical record as stored by the server
    /// - `Err(_)`: Transport or API failure
    async fn send(&self, subject: &Subject, text: &str, actor_id: &str) -> Result<RawChatRecord>;
}
