//! Webhook client errors.

use thiserror::Error;

/// Failures while talking to the downstream webhook endpoint.
#[derive(Error, Debug)]
pub enum WebhookError {
    #[error("failed to build webhook client: {0}")]
    BuildClient(String),

    #[error("failed to send request to webhook: {0}")]
    SendRequest(String),

    #[error("failed to read webhook response body: {0}")]
    ReadBody(String),
}
