//! Shared test helpers for in-memory integration tests.

use std::sync::Arc;

use rstest::fixture;
use taskboard::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::Task,
    services::{CreateTaskRequest, TaskService},
};

/// Service type backed by the in-memory repository.
pub type TestService = TaskService<InMemoryTaskRepository>;

/// Provides a service over a fresh repository for each test.
#[fixture]
pub fn service() -> TestService {
    TaskService::new(Arc::new(InMemoryTaskRepository::new()))
}

/// Creates one task per `(title, status)` pair, in order.
///
/// # Errors
///
/// Returns an error if any task fails validation or storage.
pub async fn seed_tasks(
    service: &TestService,
    specs: &[(&str, &str)],
) -> Result<Vec<Task>, eyre::Report> {
    let mut created = Vec::with_capacity(specs.len());
    for (title, status) in specs {
        let task = service
            .create_task(CreateTaskRequest::new(*title).with_status(*status))
            .await?;
        created.push(task);
    }
    Ok(created)
}
