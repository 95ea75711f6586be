//! Process-level plumbing: configuration, logging, and the HTTP server.

pub mod config;
pub mod server;
pub mod telemetry;
