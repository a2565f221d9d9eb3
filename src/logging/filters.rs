use tracing_subscriber::EnvFilter;

use crate::logging::config::LoggingConfig;

/// Builds an [`EnvFilter`] from `RUST_LOG`, falling back to `"info"`.
pub fn build_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Builds an [`EnvFilter`] preferring `RUST_LOG`, then the configured level.
pub fn build_filter_from_config(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level))
}
