//! Downstream relay subsystem.
//!
//! # Data Flow
//! ```text
//! handler (http::server)
//!     → WebhookClient::forward / probe
//!     → reqwest POST to the configured destination
//!     → WebhookReply { status, status_text, headers, body }
//!     → relayed to the caller
//! ```
//!
//! # Design Decisions
//! - One fixed destination; the client never derives a URL from the caller
//! - The client sits behind a trait so handlers stay testable
//! - No retries and no timeout of our own; a failure surfaces once

pub mod client;
pub mod error;

pub use client::{HttpWebhookClient, WebhookClient, WebhookReply, APPLICATION_JSON};
pub use error::WebhookError;
