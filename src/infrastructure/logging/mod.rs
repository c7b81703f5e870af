use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use super::config::{Config, LogFormat};

/// Initialize the global tracing subscriber.
///
/// Hosts embedding the pipeline call this once at startup; `RUST_LOG`
/// overrides the default filter.
pub fn init_logging(config: &Config) {
    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "unlimited_tts=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "unlimited_tts=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
