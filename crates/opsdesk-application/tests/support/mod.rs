#![allow(dead_code)]

use async_trait::async_trait;
use opsdesk_core::OpsdeskError;
use opsdesk_core::chat::{ChatRepository, PageRequest, RawChatRecord};
use opsdesk_core::error::Result;
use opsdesk_core::reporter::ErrorReporter;
use opsdesk_core::subject::Subject;
use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;
use tokio::sync::oneshot;

pub fn record(id: &str, sender: &str, text: &str) -> RawChatRecord {
    RawChatRecord {
        id: id.to_string(),
        sender_id: sender.to_string(),
        sender_name: sender.to_string(),
        sender_avatar: None,
        text: text.to_string(),
        server_timestamp: "2024-05-01T10:00:00Z".parse().unwrap(),
        is_from_administrator: false,
    }
}

/// Records tagged with the subject they were loaded for.
pub fn records_for(subject: &Subject) -> Vec<RawChatRecord> {
    vec![
        record(&format!("{}/m1", subject), "u1", "first"),
        record(&format!("{}/m2", subject), "u2", "second"),
    ]
}

/// A history read parked until the test resolves it.
pub struct PendingRead {
    pub subject: Subject,
    responder: oneshot::Sender<Result<Vec<RawChatRecord>>>,
}

impl PendingRead {
    pub fn resolve(self, result: Result<Vec<RawChatRecord>>) {
        let _ = self.responder.send(result);
    }

    pub fn resolve_with_subject_records(self) {
        let records = records_for(&self.subject);
        self.resolve(Ok(records));
    }
}

/// A write parked until the test accepts or rejects it.
pub struct PendingSend {
    record: RawChatRecord,
    responder: oneshot::Sender<Result<RawChatRecord>>,
}

impl PendingSend {
    /// Id the server copy will carry once accepted.
    pub fn record_id(&self) -> &str {
        &self.record.id
    }

    pub fn accept(self) {
        let _ = self.responder.send(Ok(self.record));
    }

    pub fn reject(self, error: OpsdeskError) {
        let _ = self.responder.send(Err(error));
    }
}

/// Repository whose reads complete only when the test says so.
///
/// Writes answer immediately unless built with [`GatedRepository::with_gated_sends`].
#[derive(Default)]
pub struct GatedRepository {
    pending: Mutex<VecDeque<PendingRead>>,
    pending_sends: Mutex<VecDeque<PendingSend>>,
    gate_sends: bool,
    pub sends: Mutex<Vec<(Subject, String)>>,
}

impl GatedRepository {
    pub fn with_gated_sends() -> Self {
        Self {
            gate_sends: true,
            ..Self::default()
        }
    }

    pub fn pending_sends_len(&self) -> usize {
        self.pending_sends.lock().unwrap().len()
    }

    pub fn take_send(&self, index: usize) -> Option<PendingSend> {
        self.pending_sends.lock().unwrap().remove(index)
    }

    pub async fn wait_for_pending_sends(&self, count: usize) {
        while self.pending_sends_len() < count {
            tokio::task::yield_now().await;
        }
    }

    pub fn pending_len(&self) -> usize {
        self.pending.lock().unwrap().len()
    }

    pub fn take(&self, index: usize) -> Option<PendingRead> {
        self.pending.lock().unwrap().remove(index)
    }

    /// Yields until at least `count` reads are parked.
    pub async fn wait_for_pending(&self, count: usize) {
        while self.pending_len() < count {
            tokio::task::yield_now().await;
        }
    }
}

#[async_trait]
impl ChatRepository for GatedRepository {
    async fn history(&self, subject: &Subject, _page: PageRequest) -> Result<Vec<RawChatRecord>> {
        let (tx, rx) = oneshot::channel();
        self.pending.lock().unwrap().push_back(PendingRead {
            subject: subject.clone(),
            responder: tx,
        });
        rx.await
            .unwrap_or_else(|_| Err(OpsdeskError::internal("read abandoned")))
    }

    async fn send(&self, subject: &Subject, text: &str, actor_id: &str) -> Result<RawChatRecord> {
        let sent = {
            let mut sends = self.sends.lock().unwrap();
            sends.push((subject.clone(), text.to_string()));
            record(&format!("{}/sent-{}", subject, sends.len()), actor_id, text)
        };
        if !self.gate_sends {
            return Ok(sent);
        }

        let (tx, rx) = oneshot::channel();
        self.pending_sends.lock().unwrap().push_back(PendingSend {
            record: sent,
            responder: tx,
        });
        rx.await
            .unwrap_or_else(|_| Err(OpsdeskError::internal("write abandoned")))
    }
}

/// Repository that answers every read after a fixed delay.
pub struct DelayedRepository {
    pub delay: Duration,
    pub records: Vec<RawChatRecord>,
}

#[async_trait]
impl ChatRepository for DelayedRepository {
    async fn history(&self, _subject: &Subject, _page: PageRequest) -> Result<Vec<RawChatRecord>> {
        tokio::time::sleep(self.delay).await;
        Ok(self.records.clone())
    }

    async fn send(&self, subject: &Subject, text: &str, actor_id: &str) -> Result<RawChatRecord> {
        tokio::time::sleep(self.delay).await;
        Ok(record(&format!("{}/sent", subject), actor_id, text))
    }
}

#[derive(Default)]
pub struct RecordingReporter {
    pub reports: Mutex<Vec<(String, String)>>,
}

impl RecordingReporter {
    pub fn count(&self) -> usize {
        self.reports.lock().unwrap().len()
    }
}

impl ErrorReporter for RecordingReporter {
    fn report(&self, context: &str, error: &OpsdeskError) {
        self.reports
            .lock()
            .unwrap()
            .push((context.to_string(), error.to_string()));
    }
}
