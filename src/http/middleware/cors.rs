//! Cross-origin response headers.
//!
//! # Responsibilities
//! - Append the fixed permissive CORS header set to every response
//! - Keep preflight answers identical to regular responses
//!
//! # Design Decisions
//! - The header set is fixed: wildcard origin together with the credentials
//!   flag, which rules out tower-http's CorsLayer (it refuses that pair)
//! - Applied on the response path; handlers never deal with CORS

use axum::extract::Request;
use axum::http::header::{self, HeaderValue};
use axum::middleware::Next;
use axum::response::Response;

pub const ALLOWED_METHODS: &str = "GET, POST, PUT, DELETE, PATCH, OPTIONS";
pub const ALLOWED_HEADERS: &str =
    "Content-Type, Authorization, Origin, Accept, X-Requested-With";
/// Preflight cache lifetime, 24 hours.
pub const MAX_AGE_SECS: &str = "86400";

/// Append the permissive cross-origin headers to every response.
pub async fn cors_headers(req: Request, next: Next) -> Response {
    let mut response = next.run(req).await;

    let headers = response.headers_mut();
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(ALLOWED_METHODS),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(ALLOWED_HEADERS),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_CREDENTIALS,
        HeaderValue::from_static("true"),
    );
    headers.insert(
        header::ACCESS_CONTROL_MAX_AGE,
        HeaderValue::from_static(MAX_AGE_SECS),
    );

    response
}
