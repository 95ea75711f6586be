//! Route table for the task resource.

use axum::{Router, routing::get};

use super::handlers::{create_task, delete_task, get_task, list_tasks, update_task};
use crate::task::{ports::TaskRepository, services::TaskService};

/// Builds the `/tasks` router bound to `service`.
pub fn routes<R>(service: TaskService<R>) -> Router
where
    R: TaskRepository + 'static,
{
    Router::new()
        .route("/tasks", get(list_tasks::<R>).post(create_task::<R>))
        .route(
            "/tasks/{id}",
            get(get_task::<R>)
                .put(update_task::<R>)
                .delete(delete_task::<R>),
        )
        .with_state(service)
}
