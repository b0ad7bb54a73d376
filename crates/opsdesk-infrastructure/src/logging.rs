//! Tracing subscriber setup.

use opsdesk_core::config::LogConfig;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

/// Builds the filter: `RUST_LOG` wins, then the configured level.
pub fn env_filter(config: &LogConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Installs a stderr `fmt` subscriber.
///
/// Calling this twice is harmless; the second installation is ignored.
pub fn init_tracing(config: &LogConfig, verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("opsdesk=trace,debug")
    } else {
        env_filter(config)
    };

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
