//! Taskboard: a task-tracking HTTP service.
//!
//! Tasks carry an identifier, a non-blank title, and a `pending`/`done`
//! status. They are exposed as a JSON REST resource backed by a pluggable
//! repository.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (in-memory store, HTTP)
//!
//! # Modules
//!
//! - [`task`]: Task domain, repository port, adapters, and use-case service
//! - [`infrastructure`]: Configuration, logging, and the HTTP server

pub mod infrastructure;
pub mod task;
