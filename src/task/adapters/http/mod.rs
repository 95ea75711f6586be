//! HTTP adapter exposing task use cases as a JSON REST resource.
//!
//! The adapter checks request shape (required fields, JSON types) and leaves
//! domain validation to [`crate::task::services::TaskService`].

mod error;
mod handlers;
mod routes;
mod types;

pub use error::{ApiError, ErrorBody};
pub use routes::routes;
pub use types::{CreateTaskPayload, ListTasksQuery, TaskResponse, UpdateTaskPayload};
