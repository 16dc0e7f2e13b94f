//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! process environment (PORT, WEBHOOK_URL)
//!     → loader.rs (defaults + overrides)
//!     → validation.rs (semantic checks)
//!     → RelayConfig (validated, immutable)
//!     → shared via Arc with the handlers
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; no runtime reload
//! - All fields have defaults so the service runs unconfigured
//! - Validation separates syntactic (env parsing) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::load_from_env;
pub use schema::RelayConfig;
pub use schema::{ListenerConfig, ObservabilityConfig, WebhookConfig};
