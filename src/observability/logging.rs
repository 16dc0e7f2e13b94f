//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber once, at startup
//! - Respect RUST_LOG when present, fall back to the configured filter
//!
//! # Design Decisions
//! - Handlers log through the tracing facade and never know the sink
//! - Plain fmt layer to stdout; log collection is the platform's job

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::ObservabilityConfig;

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise the configured filter applies.
pub fn init(config: &ObservabilityConfig) {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
