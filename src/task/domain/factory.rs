//! Validated construction of task entities.

use super::{Task, TaskDomainError, TaskId, TaskStatus, TaskTitle};

/// Builds tasks, rejecting invalid input before any [`Task`] exists.
#[derive(Debug, Clone, Copy, Default)]
pub struct TaskFactory;

impl TaskFactory {
    /// Creates a new task with a freshly generated identifier.
    ///
    /// The status defaults to [`TaskStatus::Pending`] when omitted. Status
    /// parsing ignores case and surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] when the title is blank, or
    /// [`TaskDomainError::InvalidStatus`] when the status is not recognised.
    pub fn create(title: &str, status: Option<&str>) -> Result<Task, TaskDomainError> {
        Self::restore(TaskId::new(), title, status)
    }

    /// Rebuilds a task with a known identifier, applying the same
    /// validation as [`TaskFactory::create`].
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError`] under the same conditions as
    /// [`TaskFactory::create`].
    pub fn restore(id: TaskId, title: &str, status: Option<&str>) -> Result<Task, TaskDomainError> {
        let task_status = status
            .map(TaskStatus::try_from)
            .transpose()?
            .unwrap_or_default();
        let task_title = TaskTitle::new(title)?;
        Ok(Task::from_parts(id, task_title, task_status))
    }
}
