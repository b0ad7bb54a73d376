pub mod api;
pub mod chat;
pub mod config;
pub mod error;
pub mod reporter;
pub mod subject;

// Re-export common error type
pub use error::OpsdeskError;
