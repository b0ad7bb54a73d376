use anyhow::{Context, Result};
use opsdesk_application::EntityChatService;
use opsdesk_core::config::ClientConfig;
use opsdesk_core::reporter::TracingErrorReporter;
use opsdesk_infrastructure::logging::init_tracing;
use opsdesk_infrastructure::{
    ConfigService, MonitoredTransport, ReqwestTransport, RestChatRepository, SessionMonitor,
};
use std::path::Path;
use std::sync::Arc;

/// Everything a command needs, built once per invocation.
pub struct CliContext {
    pub config_service: ConfigService,
    pub monitor: Arc<SessionMonitor>,
    repository: Arc<RestChatRepository>,
}

impl CliContext {
    pub fn load(config_path: Option<&Path>, verbose: bool) -> Result<Self> {
        let config_service = match config_path {
            Some(path) => ConfigService::with_path(path),
            None => ConfigService::new(),
        };
        let config = config_service
            .load()
            .context("Failed to load configuration")?;

        init_tracing(&config.log, verbose);

        let monitor = Arc::new(SessionMonitor::new());
        monitor.on_unauthorized(|| {
            eprintln!("Your session has expired. Update api.auth_token or OPSDESK_API_TOKEN and retry.");
        });

        let transport = ReqwestTransport::new(&config.api)?;
        tracing::debug!("[CLI] API base: {}", transport.base_url());
        let repository = Arc::new(RestChatRepository::new(Arc::new(MonitoredTransport::new(
            transport,
            monitor.clone(),
        ))));

        Ok(Self {
            config_service,
            monitor,
            repository,
        })
    }

    /// The effective configuration, served from the service's cache.
    pub fn config(&self) -> ClientConfig {
        self.config_service.get_config()
    }

    /// A fresh chat service bound to the configured API.
    pub fn chat_service(&self) -> EntityChatService {
        EntityChatService::new(self.repository.clone(), Arc::new(TracingErrorReporter))
            .with_page_size(self.config().chat.page_size)
    }

    pub fn shutdown(&self) {
        self.monitor.shutdown();
    }
}
