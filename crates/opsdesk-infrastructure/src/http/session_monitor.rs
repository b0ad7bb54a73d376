//! Session-expiry monitoring.
//!
//! `SessionMonitor` replaces a process-wide response hook: it is created once
//! at startup, handed to every `MonitoredTransport`, and shut down explicitly.

use async_trait::async_trait;
use opsdesk_core::api::{ApiRequest, ApiResponse, ApiTransport};
use opsdesk_core::error::Result;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

type Callback = Arc<dyn Fn() + Send + Sync>;

/// Handle returned by [`SessionMonitor::on_unauthorized`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Raises a one-time "session expired" notification.
///
/// The first unauthorized response fires every registered callback; later
/// ones are ignored until [`SessionMonitor::reset`] is called (typically after
/// the user signs in again). After [`SessionMonitor::shutdown`] the monitor is
/// inert.
#[derive(Default)]
pub struct SessionMonitor {
    listeners: Mutex<Vec<(ListenerId, Callback)>>,
    next_id: AtomicU64,
    notified: AtomicBool,
    closed: AtomicBool,
}

impl SessionMonitor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a callback for the next session expiry.
    ///
    /// Returns `None` when the monitor has been shut down.
    pub fn on_unauthorized<F>(&self, callback: F) -> Option<ListenerId>
    where
        F: Fn() + Send + Sync + 'static,
    {
        if self.is_closed() {
            return None;
        }
        let id = ListenerId(self.next_id.fetch_add(1, Ordering::Relaxed));
        let callback: Callback = Arc::new(callback);
        self.listeners().push((id, callback));
        Some(id)
    }

    /// Removes a callback. Returns whether it was registered.
    pub fn remove_listener(&self, id: ListenerId) -> bool {
        let mut listeners = self.listeners();
        let before = listeners.len();
        listeners.retain(|(listener_id, _)| *listener_id != id);
        listeners.len() != before
    }

    /// Fires every callback unless a notification is already outstanding.
    ///
    /// Returns whether callbacks were fired.
    pub fn notify_unauthorized(&self) -> bool {
        if self.is_closed() || self.notified.swap(true, Ordering::SeqCst) {
            return false;
        }

        tracing::info!("[SessionMonitor] Session expired, notifying listeners");
        // Callbacks run outside the lock so they may register or remove listeners.
        let callbacks: Vec<Callback> = self.listeners().iter().map(|(_, cb)| cb.clone()).collect();
        for callback in callbacks {
            callback();
        }
        true
    }

    /// Re-arms the monitor after the session was re-established.
    pub fn reset(&self) {
        self.notified.store(false, Ordering::SeqCst);
    }

    pub fn is_notified(&self) -> bool {
        self.notified.load(Ordering::SeqCst)
    }

    /// Drops every callback and stops reacting to further failures.
    pub fn shutdown(&self) {
        self.closed.store(true, Ordering::SeqCst);
        self.listeners().clear();
        tracing::debug!("[SessionMonitor] Shut down");
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }

    fn listeners(&self) -> MutexGuard<'_, Vec<(ListenerId, Callback)>> {
        self.listeners.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Wraps a transport and reports unauthorized failures to a `SessionMonitor`.
///
/// Responses and errors are passed through unchanged.
pub struct MonitoredTransport<T: ApiTransport> {
    inner: T,
    monitor: Arc<SessionMonitor>,
}

impl<T: ApiTransport> MonitoredTransport<T> {
    pub fn new(inner: T, monitor: Arc<SessionMonitor>) -> Self {
        Self { inner, monitor }
    }

    pub fn monitor(&self) -> &Arc<SessionMonitor> {
        &self.monitor
    }
}

#[async_trait]
impl<T: ApiTransport> ApiTransport for MonitoredTransport<T> {
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse> {
        let result = self.inner.execute(request).await;
        if let Err(ref e) = result
            && e.is_unauthorized()
        {
            self.monitor.notify_unauthorized();
        }
        result
    }
}
