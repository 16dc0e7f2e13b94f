//! Process lifecycle.
//!
//! Startup is orchestrated by `main` (load config, bind the listener, then
//! serve — fail fast on any error). Shutdown flows through a broadcast
//! channel so the server task and tests observe the same signal.

pub mod shutdown;

pub use shutdown::Shutdown;
