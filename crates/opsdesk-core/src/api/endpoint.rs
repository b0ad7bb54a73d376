//! Endpoint builders keyed by entity kind.

use crate::subject::{EntityKind, Subject};

/// Collection segment of the REST resource backing an entity kind.
pub fn collection_segment(kind: EntityKind) -> &'static str {
    match kind {
        EntityKind::Request => "requests",
        EntityKind::Project => "projects",
    }
}

/// Path of the chat message collection attached to a subject.
///
/// Used for both reading history (`GET`) and posting (`POST`). The entity id
/// is percent-encoded, so it always stays a single path segment.
pub fn chat_messages_path(subject: &Subject) -> String {
    format!(
        "/{}/{}/messages",
        collection_segment(subject.entity_kind),
        urlencoding::encode(subject.entity_id.trim())
    )
}
