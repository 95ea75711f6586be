//! Request and response bodies for the task resource.

use crate::task::{
    domain::{Task, TaskStatus},
    services::{CreateTaskRequest, UpdateTaskRequest},
};
use serde::{Deserialize, Serialize};

/// Body of `POST /tasks`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateTaskPayload {
    /// Task title; must not be blank.
    pub title: String,
    /// Initial status; defaults to `pending`.
    #[serde(default)]
    pub status: Option<String>,
}

impl From<CreateTaskPayload> for CreateTaskRequest {
    fn from(payload: CreateTaskPayload) -> Self {
        let request = Self::new(payload.title);
        match payload.status {
            Some(status) => request.with_status(status),
            None => request,
        }
    }
}

/// Body of `PUT /tasks/{id}`. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UpdateTaskPayload {
    /// Replacement title.
    #[serde(default)]
    pub title: Option<String>,
    /// Replacement status.
    #[serde(default)]
    pub status: Option<String>,
}

impl From<UpdateTaskPayload> for UpdateTaskRequest {
    fn from(payload: UpdateTaskPayload) -> Self {
        let mut request = Self::new();
        if let Some(title) = payload.title {
            request = request.with_title(title);
        }
        if let Some(status) = payload.status {
            request = request.with_status(status);
        }
        request
    }
}

/// Query string of `GET /tasks`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ListTasksQuery {
    /// Optional status filter. An empty value means no filter.
    #[serde(default)]
    pub status: Option<String>,
}

impl ListTasksQuery {
    /// Returns the filter value, treating an empty string as absent.
    #[must_use]
    pub fn status_filter(&self) -> Option<&str> {
        self.status.as_deref().filter(|status| !status.is_empty())
    }
}

/// JSON representation of a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskResponse {
    /// Task identifier.
    pub id: String,
    /// Task title.
    pub title: String,
    /// Task status.
    pub status: TaskStatus,
}

impl From<&Task> for TaskResponse {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id().to_string(),
            title: task.title().as_str().to_owned(),
            status: task.status(),
        }
    }
}
