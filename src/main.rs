//! Webhook relay service.
//!
//! Accepts inbound JSON requests, forwards them (plus an Authorization
//! pass-through) to a single configured downstream webhook endpoint, and
//! relays the downstream status and raw body back to the caller.
//!
//! # Request Flow
//! ```text
//! Client ──POST /call-webhook──▶ http::server ──▶ relay::client ──▶ webhook
//! Client ◀──status + raw body─── http::server ◀── relay::client ◀── webhook
//! ```
//!
//! `/health`, `/test-webhook`, and the CORS preflight are answered by the
//! server directly; only relay and diagnostic traffic goes downstream.

use tokio::net::TcpListener;

use webhook_relay::config::load_from_env;
use webhook_relay::http::HttpServer;
use webhook_relay::lifecycle::Shutdown;
use webhook_relay::observability::logging;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = load_from_env()?;

    logging::init(&config.observability);

    tracing::info!("webhook-relay v0.1.0 starting");
    tracing::info!(
        bind_address = %config.listener.bind_address,
        webhook_url = %config.webhook.url,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;
    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    let shutdown = Shutdown::new();
    let receiver = shutdown.subscribe();
    shutdown.trigger_on_ctrl_c();

    let server = HttpServer::new(config)?;
    server.run(listener, receiver).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
