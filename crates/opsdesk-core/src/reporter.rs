//! Error reporting collaborator.

use crate::error::OpsdeskError;

/// Receives failures that were caught at an operation boundary.
///
/// Reporting is fire-and-forget: implementations must not block and nothing
/// they return is consumed.
pub trait ErrorReporter: Send + Sync {
    fn report(&self, context: &str, error: &OpsdeskError);
}

/// Default reporter that writes failures to the `tracing` log.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingErrorReporter;

impl ErrorReporter for TracingErrorReporter {
    fn report(&self, context: &str, error: &OpsdeskError) {
        if error.is_unauthorized() {
            tracing::warn!("[{}] session rejected by server: {}", context, error);
        } else {
            tracing::error!("[{}] {}", context, error);
        }
    }
}
