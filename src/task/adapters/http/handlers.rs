//! Request handlers for the task resource.

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::{StatusCode, Uri},
};

use super::{
    error::ApiError,
    types::{CreateTaskPayload, ListTasksQuery, TaskResponse, UpdateTaskPayload},
};
use crate::task::{domain::TaskId, ports::TaskRepository, services::TaskService};

/// Resolves the `{id}` segment; ids that do not decode or parse are unknown.
fn parse_task_id(
    path: Result<Path<String>, PathRejection>,
    uri: &Uri,
) -> Result<TaskId, ApiError> {
    let Path(raw) = path.map_err(|rejection| {
        tracing::debug!(error = %rejection, "task id could not be decoded");
        let segment = uri.path().rsplit('/').next().unwrap_or_default();
        ApiError::TaskNotFound(segment.to_owned())
    })?;
    TaskId::parse(&raw).map_err(|_| ApiError::TaskNotFound(raw))
}

/// GET /tasks
pub async fn list_tasks<R>(
    State(service): State<TaskService<R>>,
    query: Result<Query<ListTasksQuery>, QueryRejection>,
) -> Result<Json<Vec<TaskResponse>>, ApiError>
where
    R: TaskRepository + 'static,
{
    let Query(params) =
        query.map_err(|rejection| ApiError::InvalidRequest(rejection.body_text()))?;
    let tasks = service.list_tasks(params.status_filter()).await?;
    Ok(Json(tasks.iter().map(TaskResponse::from).collect()))
}

/// POST /tasks
pub async fn create_task<R>(
    State(service): State<TaskService<R>>,
    payload: Result<Json<CreateTaskPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<TaskResponse>), ApiError>
where
    R: TaskRepository + 'static,
{
    let Json(body) =
        payload.map_err(|rejection| ApiError::InvalidRequest(rejection.body_text()))?;
    let task = service.create_task(body.into()).await?;
    Ok((StatusCode::CREATED, Json(TaskResponse::from(&task))))
}

/// GET /tasks/{id}
pub async fn get_task<R>(
    State(service): State<TaskService<R>>,
    uri: Uri,
    id: Result<Path<String>, PathRejection>,
) -> Result<Json<TaskResponse>, ApiError>
where
    R: TaskRepository + 'static,
{
    let task = service.get_task(parse_task_id(id, &uri)?).await?;
    Ok(Json(TaskResponse::from(&task)))
}

/// PUT /tasks/{id}
///
/// A malformed id is reported as 404 before the body is inspected.
pub async fn update_task<R>(
    State(service): State<TaskService<R>>,
    uri: Uri,
    id: Result<Path<String>, PathRejection>,
    payload: Result<Json<UpdateTaskPayload>, JsonRejection>,
) -> Result<Json<TaskResponse>, ApiError>
where
    R: TaskRepository + 'static,
{
    let task_id = parse_task_id(id, &uri)?;
    let Json(body) =
        payload.map_err(|rejection| ApiError::InvalidRequest(rejection.body_text()))?;
    let task = service.update_task(task_id, body.into()).await?;
    Ok(Json(TaskResponse::from(&task)))
}

/// DELETE /tasks/{id}
pub async fn delete_task<R>(
    State(service): State<TaskService<R>>,
    uri: Uri,
    id: Result<Path<String>, PathRejection>,
) -> Result<StatusCode, ApiError>
where
    R: TaskRepository + 'static,
{
    service.delete_task(parse_task_id(id, &uri)?).await?;
    Ok(StatusCode::NO_CONTENT)
}
