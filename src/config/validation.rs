//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (the loader handles syntactic parsing)
//! - Check the bind address and the downstream URL are usable
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: RelayConfig → Result<(), Vec<ValidationError>>
//! - Runs before the config is accepted into the system

use std::net::SocketAddr;

use url::Url;

use crate::config::schema::RelayConfig;

/// A single semantic validation failure.
#[derive(Debug)]
pub enum ValidationError {
    InvalidBindAddress(String),
    InvalidWebhookUrl { url: String, reason: String },
    UnsupportedWebhookScheme { url: String, scheme: String },
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::InvalidBindAddress(addr) => {
                write!(f, "invalid bind address '{}'", addr)
            }
            ValidationError::InvalidWebhookUrl { url, reason } => {
                write!(f, "invalid webhook url '{}': {}", url, reason)
            }
            ValidationError::UnsupportedWebhookScheme { url, scheme } => {
                write!(f, "webhook url '{}' has unsupported scheme '{}'", url, scheme)
            }
        }
    }
}

/// Validate a configuration, collecting every error found.
pub fn validate_config(config: &RelayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    match Url::parse(&config.webhook.url) {
        Ok(url) if url.scheme() != "http" && url.scheme() != "https" => {
            errors.push(ValidationError::UnsupportedWebhookScheme {
                url: config.webhook.url.clone(),
                scheme: url.scheme().to_string(),
            });
        }
        Ok(_) => {}
        Err(e) => {
            errors.push(ValidationError::InvalidWebhookUrl {
                url: config.webhook.url.clone(),
                reason: e.to_string(),
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
