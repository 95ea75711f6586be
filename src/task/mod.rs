//! Task tracking for Taskboard.
//!
//! Tasks are created with a validated title and a `pending`/`done` status,
//! listed in creation order, partially updated, and deleted. The module
//! follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
