//! Observability subsystem.
//!
//! Logging is the relay's only observability channel: structured events via
//! the `tracing` facade, emitted to stdout. Log output is a side channel and
//! never influences request handling.

pub mod logging;
