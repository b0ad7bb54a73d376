pub mod config_service;
pub mod http;
pub mod logging;
pub mod paths;
pub mod rest_chat_repository;

pub use config_service::ConfigService;
pub use http::{MonitoredTransport, ReqwestTransport, SessionMonitor};
pub use rest_chat_repository::RestChatRepository;
