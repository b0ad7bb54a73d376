use opsdesk_core::OpsdeskError;
use opsdesk_core::chat::ChatMessage;

/// What happened to a `load()` call.
///
/// Failures are reported and absorbed by the service; the outcome only lets
/// callers and tests observe which branch was taken.
#[derive(Debug, Clone)]
pub enum LoadOutcome {
    /// No subject was set; nothing was requested.
    Skipped,
    /// The result was current and replaced the view.
    Applied { count: usize },
    /// The result arrived after the subject changed or a newer load started.
    Discarded,
    /// The current request failed; the view kept its items.
    Failed(OpsdeskError),
}

impl LoadOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied { .. })
    }

    pub fn is_discarded(&self) -> bool {
        matches!(self, Self::Discarded)
    }
}

/// What happened to a `send()` call.
#[derive(Debug, Clone)]
pub enum SendOutcome {
    /// Missing subject, missing actor or blank text.
    Skipped,
    /// The canonical message returned by the server, as appended to the view.
    Applied(ChatMessage),
    Failed(OpsdeskError),
}

impl SendOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied(_))
    }
}
