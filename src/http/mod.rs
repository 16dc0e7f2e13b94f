//! HTTP surface of the relay.
//!
//! # Data Flow
//! ```text
//! inbound request
//!     → server.rs (Axum router, route handlers)
//!     → middleware (trace, request ID, CORS response headers)
//!     → relay::client (downstream POST, relay paths only)
//!     → response written to caller
//! ```

pub mod middleware;
pub mod request;
pub mod server;

pub use request::{RequestIdLayer, X_REQUEST_ID};
pub use server::{AppState, HttpServer};
