//! Middleware applied across the relay's routes.

pub mod cors;
