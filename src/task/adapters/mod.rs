//! Adapter implementations for the task ports.

pub mod http;
pub mod memory;
