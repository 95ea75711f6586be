//! In-memory adapter implementations.
//!
//! Suitable for single-process deployments and tests that need no external
//! storage.

mod task;

pub use task::InMemoryTaskRepository;
