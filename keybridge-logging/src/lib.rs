//! Structured logging setup for Keybridge components

use tracing_subscriber::{
    fmt,
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

/// Initialize structured logging for a Keybridge component
///
/// This sets up:
/// - JSON formatted logs (for production)
/// - Environment-based log level filtering
/// - Component name tagging
pub fn init_logging(component: &str, default_level: &str) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .json()
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_current_span(false)
                .with_span_list(false),
        )
        .init();

    tracing::info!(
        component = component,
        "Logging initialized"
    );
}

/// Initialize simple console logging (for development and diagnostics)
///
/// This sets up:
/// - Human-readable formatted logs
/// - Environment-based log level filtering
pub fn init_console_logging(component: &str, default_level: &str) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .init();

    tracing::info!(
        component = component,
        "Console logging initialized"
    );
}
