//! Service layer coordinating task use cases against the repository port.

use crate::task::{
    domain::{Task, TaskDomainError, TaskFactory, TaskId, TaskPatch, TaskStatus, TaskTitle},
    ports::{TaskRepository, TaskRepositoryError},
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    title: String,
    status: Option<String>,
}

impl CreateTaskRequest {
    /// Creates a request with the required title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            status: None,
        }
    }

    /// Sets the initial status.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }
}

/// Request payload for a partial task update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateTaskRequest {
    title: Option<String>,
    status: Option<String>,
}

impl UpdateTaskRequest {
    /// Creates a request that changes nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the replacement title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the replacement status.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    fn into_patch(self) -> Result<TaskPatch, TaskDomainError> {
        let mut patch = TaskPatch::new();
        if let Some(title) = self.title {
            patch = patch.with_title(TaskTitle::new(title)?);
        }
        if let Some(status) = self.status {
            patch = patch.with_status(TaskStatus::try_from(status.as_str())?);
        }
        Ok(patch)
    }
}

/// Service-level errors for task operations.
#[derive(Debug, Error)]
pub enum TaskServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

impl TaskServiceError {
    /// Returns `true` when the error was caused by invalid input.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Domain(_))
    }

    /// Returns `true` when the referenced task does not exist.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Repository(TaskRepositoryError::NotFound(_)))
    }
}

/// Result type for task service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;

/// Task use-case orchestration service.
pub struct TaskService<R>
where
    R: TaskRepository,
{
    repository: Arc<R>,
}

impl<R> Clone for TaskService<R>
where
    R: TaskRepository,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R> TaskService<R>
where
    R: TaskRepository,
{
    /// Creates a new task service.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Creates and stores a new task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Domain`] when the title or status is
    /// invalid, or [`TaskServiceError::Repository`] when the repository
    /// rejects the task.
    pub async fn create_task(&self, request: CreateTaskRequest) -> TaskServiceResult<Task> {
        let CreateTaskRequest { title, status } = request;
        let task = TaskFactory::create(&title, status.as_deref()).inspect_err(|err| {
            warn!(error = %err, "rejected task creation");
        })?;
        self.repository.add(&task).await?;
        debug!(task_id = %task.id(), status = %task.status(), "task created");
        Ok(task)
    }

    /// Lists tasks in creation order, optionally filtered by status.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Domain`] when the filter is not a known
    /// status, or [`TaskServiceError::Repository`] when lookup fails.
    pub async fn list_tasks(&self, status: Option<&str>) -> TaskServiceResult<Vec<Task>> {
        let filter = status
            .map(TaskStatus::try_from)
            .transpose()
            .map_err(TaskDomainError::from)
            .inspect_err(|err| warn!(error = %err, "rejected task status filter"))?;
        Ok(self.repository.list(filter).await?)
    }

    /// Retrieves a task by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] (wrapped in
    /// [`TaskServiceError::Repository`]) when no task has the identifier.
    pub async fn get_task(&self, id: TaskId) -> TaskServiceResult<Task> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| TaskRepositoryError::NotFound(id).into())
    }

    /// Applies a partial update to an existing task.
    ///
    /// Every supplied field is validated before the repository is touched.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Domain`] when a supplied field is invalid,
    /// or [`TaskServiceError::Repository`] when the task does not exist.
    pub async fn update_task(
        &self,
        id: TaskId,
        request: UpdateTaskRequest,
    ) -> TaskServiceResult<Task> {
        let patch = request.into_patch().inspect_err(|err| {
            warn!(task_id = %id, error = %err, "rejected task update");
        })?;
        if patch.is_empty() {
            return self.get_task(id).await;
        }
        let task = self.repository.update(id, &patch).await?;
        debug!(task_id = %id, status = %task.status(), "task updated");
        Ok(task)
    }

    /// Deletes a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the task does not exist.
    pub async fn delete_task(&self, id: TaskId) -> TaskServiceResult<()> {
        self.repository.delete(id).await?;
        debug!(task_id = %id, "task deleted");
        Ok(())
    }
}
