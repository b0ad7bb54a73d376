pub mod config;
pub mod context;
pub mod history;
pub mod send;
pub mod watch;

use opsdesk_core::chat::{ChatMessage, MessageRole, ViewState};

/// Renders one message as a single terminal line.
pub fn format_message(message: &ChatMessage) -> String {
    let marker = match message.role {
        MessageRole::Own => ">",
        MessageRole::Other => "<",
    };
    format!(
        "{} [{}] {}: {}",
        marker,
        message.created_at.format("%Y-%m-%d %H:%M"),
        message.sender_name,
        message.content
    )
}

pub fn print_view(view: &ViewState) {
    if view.is_empty() {
        println!("(no messages)");
        return;
    }
    for message in &view.items {
        println!("{}", format_message(message));
    }
}
