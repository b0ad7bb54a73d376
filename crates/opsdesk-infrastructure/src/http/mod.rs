//! HTTP transport and session monitoring.

mod session_monitor;
mod transport;

pub use session_monitor::{ListenerId, MonitoredTransport, SessionMonitor};
pub use transport::ReqwestTransport;
