//! HTTP server setup and request handlers.
//!
//! # Responsibilities
//! - Create the Axum router with the relay's four routes
//! - Wire up middleware (tracing, request ID, CORS response headers)
//! - Forward relay traffic to the downstream webhook client
//! - Serve with graceful shutdown
//!
//! # Routes
//! - `POST /call-webhook` — forward JSON downstream, relay status + raw body
//! - `OPTIONS /call-webhook` — preflight, answered locally
//! - `GET /health` — liveness, no downstream interaction
//! - `GET /test-webhook` — canned diagnostic payload downstream

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::trace::TraceLayer;

use crate::config::RelayConfig;
use crate::http::middleware::cors::cors_headers;
use crate::http::request::RequestIdLayer;
use crate::relay::{HttpWebhookClient, WebhookClient, WebhookError, WebhookReply};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<RelayConfig>,
    pub webhook: Arc<dyn WebhookClient>,
}

/// HTTP server for the relay.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: RelayConfig) -> Result<Self, WebhookError> {
        let webhook = Arc::new(HttpWebhookClient::new(&config.webhook)?);
        Ok(Self::with_client(config, webhook))
    }

    /// Create a server around an explicit webhook client.
    pub fn with_client(config: RelayConfig, webhook: Arc<dyn WebhookClient>) -> Self {
        let state = AppState {
            config: Arc::new(config),
            webhook,
        };

        Self {
            router: Self::build_router(state),
        }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(state: AppState) -> Router {
        Router::new()
            .route("/call-webhook", post(relay_webhook).options(preflight))
            .route("/health", get(health))
            .route("/test-webhook", get(test_webhook))
            .with_state(state)
            .layer(axum::middleware::from_fn(cors_headers))
            .layer(RequestIdLayer)
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server until the shutdown signal fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// `POST /call-webhook` — forward the JSON body downstream, relay the reply.
async fn relay_webhook(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    let authorization = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("");

    tracing::debug!(
        url = %state.config.webhook.url,
        user_agent = %state.config.webhook.user_agent,
        body = %body,
        "Forwarding request to webhook"
    );

    match state.webhook.forward(&body, authorization).await {
        Ok(reply) => {
            log_reply(&reply);
            relay_response(&reply)
        }
        Err(e) => {
            tracing::error!(error = %e, "Proxy error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Proxy error", "details": e.to_string() })),
            )
                .into_response()
        }
    }
}

/// Relay the downstream status and raw body text unchanged.
fn relay_response(reply: &WebhookReply) -> Response {
    let status =
        StatusCode::from_u16(reply.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, reply.body.clone()).into_response()
}

/// Log the downstream reply, parsing the body as JSON when possible.
/// Parse failure is tolerated; it only changes what gets logged.
fn log_reply(reply: &WebhookReply) {
    tracing::debug!(
        status = reply.status,
        status_text = %reply.status_text,
        headers = ?reply.headers,
        "Webhook response received"
    );

    match serde_json::from_str::<Value>(&reply.body) {
        Ok(parsed) => {
            tracing::debug!(status = reply.status, body = %parsed, "Webhook response body (json)")
        }
        Err(_) => {
            tracing::debug!(status = reply.status, body = %reply.body, "Webhook response body (raw)")
        }
    }
}

/// `OPTIONS /call-webhook` — answered locally; the CORS pass adds the headers.
async fn preflight() -> StatusCode {
    StatusCode::OK
}

#[derive(Serialize)]
struct HealthStatus {
    status: &'static str,
}

/// `GET /health` — liveness only, no downstream interaction.
async fn health() -> Json<HealthStatus> {
    Json(HealthStatus { status: "ok" })
}

/// Diagnostic report returned by `GET /test-webhook`.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TestWebhookReport {
    status: u16,
    status_text: String,
    headers: BTreeMap<String, String>,
    data: String,
}

/// `GET /test-webhook` — send a canned payload downstream and report the reply.
async fn test_webhook(State(state): State<AppState>) -> Response {
    let payload = json!({
        "test": true,
        "timestamp": Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    });

    tracing::info!(body = %payload, "Testing webhook with canned payload");

    match state.webhook.probe(&payload).await {
        Ok(reply) => {
            log_reply(&reply);
            let report = TestWebhookReport {
                status: reply.status,
                status_text: reply.status_text,
                headers: reply.headers.into_iter().collect(),
                data: reply.body,
            };
            Json(report).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Webhook test failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": e.to_string(), "stack": format!("{e:?}") })),
            )
                .into_response()
        }
    }
}
