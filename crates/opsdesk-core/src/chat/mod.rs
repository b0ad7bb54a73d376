//! Chat domain module.
//!
//! This module contains the conversational history attached to an entity:
//! message types, the view state they are materialized into, and the
//! repository interface used to fetch and post them.
//!
//! # Module Structure
//!
//! - `message`: Wire and display message types (`RawChatRecord`, `ChatMessage`, `MessageRole`)
//! - `view_state`: Display state for the current subject (`ViewState`)
//! - `repository`: Data source trait (`ChatRepository`, `PageRequest`)

mod message;
mod repository;
mod view_state;

pub use message::{ChatMessage, MessageRole, RawChatRecord};
pub use repository::{ChatRepository, DEFAULT_PAGE_SIZE, PageRequest};
pub use view_state::ViewState;
