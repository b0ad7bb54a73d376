//! Entity chat application services.
//!
//! This module contains the race-free loader that keeps the chat view of the
//! displayed entity consistent while the user navigates.

mod outcome;
mod service;

pub use outcome::{LoadOutcome, SendOutcome};
pub use service::EntityChatService;
