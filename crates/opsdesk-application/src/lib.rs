//! Application layer for OPSDESK.
//!
//! This crate provides use case implementations that coordinate between
//! domain and infrastructure layers to implement application-level business logic.

pub mod chat;

pub use chat::{EntityChatService, LoadOutcome, SendOutcome};
