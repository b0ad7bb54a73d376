//! Remote API seams.
//!
//! - `transport`: request/response types and the `ApiTransport` trait
//! - `endpoint`: path builders resolved from `EntityKind`

pub mod endpoint;
mod transport;

pub use transport::{ApiEnvelope, ApiRequest, ApiResponse, ApiTransport, HttpMethod};
