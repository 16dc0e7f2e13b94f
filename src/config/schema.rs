//! Configuration schema definitions.
//!
//! All types derive Serde traits and carry defaults, so the relay can run
//! with no configuration at all.

use serde::{Deserialize, Serialize};

/// Downstream webhook endpoint used when `WEBHOOK_URL` is unset.
pub const DEFAULT_WEBHOOK_URL: &str =
    "https://suryasom.app.n8n.cloud/webhook/61ab0308-5a21-45e2-b9bb-e143245b713e";

/// Listening port used when `PORT` is unset.
pub const DEFAULT_PORT: u16 = 5000;

/// Root configuration for the relay.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct RelayConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Downstream webhook destination.
    pub webhook: WebhookConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:5000").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: format!("0.0.0.0:{DEFAULT_PORT}"),
        }
    }
}

/// Downstream webhook configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct WebhookConfig {
    /// Destination URL all relay and diagnostic traffic is sent to.
    pub url: String,

    /// User-Agent sent on forwarded requests.
    pub user_agent: String,
}

impl Default for WebhookConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_WEBHOOK_URL.to_string(),
            user_agent: "Campaign-UI".to_string(),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log filter applied when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "webhook_relay=debug,tower_http=info".to_string(),
        }
    }
}
