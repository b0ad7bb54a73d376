//! Entity chat service.
//!
//! This module provides `EntityChatService`, which keeps the chat view of the
//! currently displayed entity in sync with the remote API while the user
//! navigates between entities faster than the API answers.

use super::outcome::{LoadOutcome, SendOutcome};
use opsdesk_core::chat::{ChatMessage, ChatRepository, DEFAULT_PAGE_SIZE, PageRequest, ViewState};
use opsdesk_core::reporter::ErrorReporter;
use opsdesk_core::subject::{IdentityTracker, RequestToken, Subject};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

struct ChatState {
    tracker: IdentityTracker,
    view: ViewState,
    actor_id: Option<String>,
}

/// Race-free loader for the conversation attached to one entity at a time.
///
/// `EntityChatService` is responsible for:
/// - Tracking the displayed subject and resetting the view when it changes
/// - Loading history so that only the most recent request reaches the view
/// - Posting messages and appending the server's canonical copy
///
/// The internal lock is never held across an `.await`. `set_subject` is
/// synchronous, so a subject change is always visible to a pending load
/// before that load can apply its result.
pub struct EntityChatService {
    state: Mutex<ChatState>,
    repository: Arc<dyn ChatRepository>,
    reporter: Arc<dyn ErrorReporter>,
    page_size: u32,
}

impl EntityChatService {
    /// Creates a service with no subject and an empty view.
    ///
    /// # Arguments
    ///
    /// * `repository` - Data source for history reads and message writes
    /// * `reporter` - Receives transport failures of current requests
    pub fn new(repository: Arc<dyn ChatRepository>, reporter: Arc<dyn ErrorReporter>) -> Self {
        Self {
            state: Mutex::new(ChatState {
                tracker: IdentityTracker::new(),
                view: ViewState::new(),
                actor_id: None,
            }),
            repository,
            reporter,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Sets how many records a history load requests.
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// Sets the actor id used when sending.
    pub fn with_actor(self, actor_id: impl Into<String>) -> Self {
        self.set_actor(Some(actor_id.into()));
        self
    }

    pub fn set_actor(&self, actor_id: Option<String>) {
        self.lock().actor_id = actor_id;
    }

    /// Switches the displayed entity.
    ///
    /// When `subject` differs from the current one the token advances and the
    /// view is emptied before this call returns. Returns whether anything
    /// changed. The caller still has to trigger `load()` explicitly.
    pub fn set_subject(&self, subject: Subject) -> bool {
        let mut state = self.lock();
        if !state.tracker.set_subject(subject) {
            return false;
        }
        state.view.reset();
        tracing::debug!(
            "[EntityChat] subject changed to {:?}, token {}",
            state.tracker.current_subject(),
            state.tracker.current_token()
        );
        true
    }

    /// Navigates away from any entity, voiding in-flight loads.
    pub fn clear_subject(&self) -> bool {
        let mut state = self.lock();
        if !state.tracker.clear_subject() {
            return false;
        }
        state.view.reset();
        true
    }

    pub fn subject(&self) -> Option<Subject> {
        self.lock().tracker.current_subject().cloned()
    }

    pub fn token(&self) -> RequestToken {
        self.lock().tracker.current_token()
    }

    /// Returns a copy of the current view.
    pub fn snapshot(&self) -> ViewState {
        self.lock().view.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.lock().view.is_loading
    }

    /// Loads the first page of history for the current subject.
    ///
    /// The result replaces the view only if no subject change and no newer
    /// load happened while the request was outstanding; otherwise it is
    /// dropped silently. Failures of a current request go to the reporter.
    ///
    /// Dropping the returned future (timeout, `select!`, task abort) returns
    /// the view to idle if this was still the current request.
    pub async fn load(&self) -> LoadOutcome {
        let (subject, token) = {
            let mut state = self.lock();
            let Some(subject) = state
                .tracker
                .current_subject()
                .filter(|s| s.is_defined())
                .cloned()
            else {
                tracing::trace!("[EntityChat] load() skipped: no subject");
                return LoadOutcome::Skipped;
            };
            let token = state.tracker.begin_request();
            state.view.is_loading = true;
            (subject, token)
        };

        tracing::debug!("[EntityChat] loading {} with token {}", subject, token);
        let mut guard = LoadingGuard {
            service: self,
            token,
            armed: true,
        };
        let result = self
            .repository
            .history(&subject, PageRequest::first(self.page_size))
            .await;
        guard.armed = false;

        let mut state = self.lock();
        if !state.tracker.is_current(token) {
            tracing::debug!(
                "[EntityChat] discarding stale result for {} (token {}, current {})",
                subject,
                token,
                state.tracker.current_token()
            );
            return LoadOutcome::Discarded;
        }
        state.view.is_loading = false;

        match result {
            Ok(records) => {
                let items: Vec<ChatMessage> = records.into_iter().map(ChatMessage::from).collect();
                let count = items.len();
                state.view.replace_all(items);
                LoadOutcome::Applied { count }
            }
            Err(e) => {
                drop(state);
                self.reporter.report("load", &e);
                LoadOutcome::Failed(e)
            }
        }
    }

    /// Posts a message to the current subject.
    ///
    /// Unlike `load()`, the result is not token-gated: once the server has
    /// accepted the message it is appended to whatever the view currently
    /// shows.
    pub async fn send(&self, content: &str) -> SendOutcome {
        let text = content.trim();

        let (subject, actor_id) = {
            let state = self.lock();
            let subject = state.tracker.current_subject().filter(|s| s.is_defined());
            let actor_id = state.actor_id.as_deref().filter(|a| !a.trim().is_empty());
            match (subject, actor_id) {
                (Some(subject), Some(actor_id)) if !text.is_empty() => {
                    (subject.clone(), actor_id.to_string())
                }
                _ => {
                    tracing::trace!("[EntityChat] send() skipped: missing subject, actor or text");
                    return SendOutcome::Skipped;
                }
            }
        };

        match self.repository.send(&subject, text, &actor_id).await {
            Ok(record) => {
                let message = ChatMessage::from(record);
                self.lock().view.append(message.clone());
                SendOutcome::Applied(message)
            }
            Err(e) => {
                self.reporter.report("send", &e);
                SendOutcome::Failed(e)
            }
        }
    }

    fn lock(&self) -> MutexGuard<'_, ChatState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Clears `is_loading` when a `load()` future is dropped mid-request.
///
/// Only the owner of the current token may touch the flag, so a dropped
/// stale load leaves a newer load's state alone.
struct LoadingGuard<'a> {
    service: &'a EntityChatService,
    token: RequestToken,
    armed: bool,
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        let mut state = self.service.lock();
        if state.tracker.is_current(self.token) {
            tracing::debug!("[EntityChat] load with token {} abandoned", self.token);
            state.view.is_loading = false;
        }
    }
}
