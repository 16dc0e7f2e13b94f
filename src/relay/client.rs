//! Downstream webhook client.
//!
//! # Responsibilities
//! - Build outbound POST requests with the fixed header set
//! - Await the downstream reply and capture status, headers, and raw body
//! - Map transport failures into `WebhookError`

use async_trait::async_trait;
use reqwest::header;
use serde_json::Value;

use crate::config::WebhookConfig;
use crate::relay::error::WebhookError;

pub const APPLICATION_JSON: &str = "application/json";

/// Downstream response, captured in full before it is relayed.
#[derive(Debug, Clone)]
pub struct WebhookReply {
    /// HTTP status code.
    pub status: u16,
    /// Canonical reason phrase for the status, empty when there is none.
    pub status_text: String,
    /// Response headers, in arrival order.
    pub headers: Vec<(String, String)>,
    /// Raw body text, relayed verbatim.
    pub body: String,
}

/// Client for the single downstream webhook endpoint.
#[async_trait]
pub trait WebhookClient: Send + Sync {
    /// Forward a relayed body with the full header set.
    ///
    /// `authorization` is the inbound header value, verbatim; an empty
    /// string when the caller sent none.
    async fn forward(
        &self,
        body: &Value,
        authorization: &str,
    ) -> Result<WebhookReply, WebhookError>;

    /// Send a diagnostic payload with the minimal header set
    /// (no Authorization, no fixed User-Agent).
    async fn probe(&self, body: &Value) -> Result<WebhookReply, WebhookError>;
}

/// `WebhookClient` backed by a reqwest connection pool.
pub struct HttpWebhookClient {
    url: String,
    user_agent: String,
    client: reqwest::Client,
}

impl HttpWebhookClient {
    pub fn new(cfg: &WebhookConfig) -> Result<Self, WebhookError> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| WebhookError::BuildClient(e.to_string()))?;

        Ok(Self {
            url: cfg.url.clone(),
            user_agent: cfg.user_agent.clone(),
            client,
        })
    }

    async fn capture(response: reqwest::Response) -> Result<WebhookReply, WebhookError> {
        let status = response.status();
        let headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_string(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect();
        let body = response
            .text()
            .await
            .map_err(|e| WebhookError::ReadBody(e.to_string()))?;

        Ok(WebhookReply {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or_default().to_string(),
            headers,
            body,
        })
    }
}

#[async_trait]
impl WebhookClient for HttpWebhookClient {
    async fn forward(
        &self,
        body: &Value,
        authorization: &str,
    ) -> Result<WebhookReply, WebhookError> {
        let response = self
            .client
            .post(&self.url)
            .header(header::ACCEPT, APPLICATION_JSON)
            .header(header::AUTHORIZATION, authorization)
            .header(header::USER_AGENT, self.user_agent.as_str())
            .json(body)
            .send()
            .await
            .map_err(|e| WebhookError::SendRequest(e.to_string()))?;

        Self::capture(response).await
    }

    async fn probe(&self, body: &Value) -> Result<WebhookReply, WebhookError> {
        let response = self
            .client
            .post(&self.url)
            .header(header::ACCEPT, APPLICATION_JSON)
            .json(body)
            .send()
            .await
            .map_err(|e| WebhookError::SendRequest(e.to_string()))?;

        Self::capture(response).await
    }
}
