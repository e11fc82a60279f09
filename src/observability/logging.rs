//! Structured logging initialization.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber.
///
/// The `RUST_LOG` environment variable takes precedence; otherwise the
/// configured level is applied to this crate and the HTTP trace layer.
pub fn init(log_level: &str) {
    let default_filter = format!("header_echo={log_level},tower_http={log_level}");

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
