//! Structured logging initialization.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber.
///
/// `RUST_LOG` takes precedence when set; otherwise the configured level is
/// used, falling back to `info` when the configuration leaves it empty.
/// Must be called once, before any other subsystem logs.
pub fn init(log_level: &str) {
    let default_directive = if log_level.is_empty() {
        "info".to_string()
    } else {
        log_level.to_string()
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_directive.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
