use super::message::ChatMessage;
use serde::{Deserialize, Serialize};

/// The materialized, display-ready conversation for the current subject.
///
/// Items are kept in insertion order (oldest first). No deduplication by id
/// is performed; callers must not double-load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    pub items: Vec<ChatMessage>,
    pub is_loading: bool,
    /// Incremented on every reset.
    pub generation: u64,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces every item with the result of a full-history load.
    pub fn replace_all(&mut self, items: Vec<ChatMessage>) {
        self.items = items;
    }

    pub fn append(&mut self, item: ChatMessage) {
        self.items.push(item);
    }

    /// Empties the view and clears the loading flag.
    pub fn reset(&mut self) {
        self.items = Vec::new();
        self.is_loading = false;
        self.generation += 1;
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::MessageRole;

    fn message(id: &str) -> ChatMessage {
        ChatMessage {
            id: id.to_string(),
            content: format!("content of {}", id),
            role: MessageRole::Other,
            created_at: "2024-05-01T10:00:00Z".parse().unwrap(),
            sender_name: "Alice".to_string(),
            sender_avatar: None,
        }
    }

    #[test]
    fn test_replace_all_discards_previous_items() {
        let mut view = ViewState::new();
        view.append(message("old"));

        view.replace_all(vec![message("m1"), message("m2")]);

        let ids: Vec<_> = view.items.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["m1", "m2"]);
    }

    #[test]
    fn test_append_keeps_insertion_order() {
        let mut view = ViewState::new();
        view.append(message("m1"));
        view.append(message("m2"));

        assert_eq!(view.len(), 2);
        assert_eq!(view.items[1].id, "m2");
    }

    #[test]
    fn test_append_does_not_deduplicate() {
        let mut view = ViewState::new();
        view.append(message("m1"));
        view.append(message("m1"));

        assert_eq!(view.len(), 2);
    }

    #[test]
    fn test_reset_clears_items_and_loading() {
        let mut view = ViewState::new();
        view.append(message("m1"));
        view.is_loading = true;

        view.reset();

        assert!(view.is_empty());
        assert!(!view.is_loading);
        assert_eq!(view.generation, 1);
    }
}
