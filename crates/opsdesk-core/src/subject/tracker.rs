use super::model::Subject;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Monotonic stamp attached to every asynchronous read.
///
/// Only the tracker's current token is valid; a result carrying any other
/// token belongs to superseded work and must be dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for RequestToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Holds the currently viewed subject and the current request token.
///
/// The tracker is a pure state holder. It does not own the view state; callers
/// react to the `true` returned by [`IdentityTracker::set_subject`] by
/// resetting their view synchronously.
#[derive(Debug, Default)]
pub struct IdentityTracker {
    subject: Option<Subject>,
    token: u64,
}

impl IdentityTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_subject(&self) -> Option<&Subject> {
        self.subject.as_ref()
    }

    pub fn current_token(&self) -> RequestToken {
        RequestToken(self.token)
    }

    /// Replaces the current subject.
    ///
    /// Returns `false` without touching the token when `subject` is equal to
    /// the current one. Otherwise the subject is swapped, the token advances
    /// and `true` is returned.
    pub fn set_subject(&mut self, subject: Subject) -> bool {
        if self.subject.as_ref() == Some(&subject) {
            return false;
        }
        self.subject = Some(subject);
        self.bump();
        true
    }

    /// Forgets the current subject (navigating away from any entity).
    ///
    /// Returns `false` when there was no subject to forget.
    pub fn clear_subject(&mut self) -> bool {
        if self.subject.take().is_none() {
            return false;
        }
        self.bump();
        true
    }

    /// Advances the token for a fresh request and returns it.
    ///
    /// Any request stamped before this call becomes stale.
    pub fn begin_request(&mut self) -> RequestToken {
        self.bump();
        self.current_token()
    }

    pub fn is_current(&self, token: RequestToken) -> bool {
        token.0 == self.token
    }

    fn bump(&mut self) {
        self.token += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_tracker_has_no_subject() {
        let tracker = IdentityTracker::new();
        assert!(tracker.current_subject().is_none());
        assert_eq!(tracker.current_token().value(), 0);
    }

    #[test]
    fn test_set_subject_bumps_token() {
        let mut tracker = IdentityTracker::new();

        assert!(tracker.set_subject(Subject::project("e1")));
        assert_eq!(tracker.current_token().value(), 1);

        assert!(tracker.set_subject(Subject::project("e2")));
        assert_eq!(tracker.current_token().value(), 2);
        assert_eq!(tracker.current_subject(), Some(&Subject::project("e2")));
    }

    #[test]
    fn test_equal_subject_is_noop() {
        let mut tracker = IdentityTracker::new();
        tracker.set_subject(Subject::request("r1"));
        let before = tracker.current_token();

        assert!(!tracker.set_subject(Subject::request("r1")));
        assert_eq!(tracker.current_token(), before);
    }

    #[test]
    fn test_same_id_different_kind_is_a_change() {
        let mut tracker = IdentityTracker::new();
        tracker.set_subject(Subject::request("42"));

        assert!(tracker.set_subject(Subject::project("42")));
    }

    #[test]
    fn test_begin_request_invalidates_previous_token() {
        let mut tracker = IdentityTracker::new();
        tracker.set_subject(Subject::project("e1"));

        let first = tracker.begin_request();
        let second = tracker.begin_request();

        assert!(!tracker.is_current(first));
        assert!(tracker.is_current(second));
        assert!(second > first);
    }

    #[test]
    fn test_clear_subject() {
        let mut tracker = IdentityTracker::new();
        assert!(!tracker.clear_subject());

        tracker.set_subject(Subject::project("e1"));
        let token = tracker.current_token();

        assert!(tracker.clear_subject());
        assert!(tracker.current_subject().is_none());
        assert!(!tracker.is_current(token));
    }
}
