//! Translation of task errors into HTTP responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::task::{ports::TaskRepositoryError, services::TaskServiceError};

/// Errors surfaced by task HTTP handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The task service rejected or failed the request.
    #[error(transparent)]
    Service(#[from] TaskServiceError),

    /// The request body or query string has the wrong shape.
    #[error("{0}")]
    InvalidRequest(String),

    /// The path does not name an existing task.
    #[error("Task with id '{0}' not found")]
    TaskNotFound(String),
}

/// JSON body returned for every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    /// Stable machine-readable error code.
    pub error: String,
    /// Human-readable description.
    pub message: String,
}

impl ApiError {
    fn status_and_body(&self) -> (StatusCode, ErrorBody) {
        match self {
            Self::Service(err) if err.is_validation() => {
                (StatusCode::BAD_REQUEST, body("validation_error", err.to_string()))
            }
            Self::Service(TaskServiceError::Repository(TaskRepositoryError::NotFound(id))) => (
                StatusCode::NOT_FOUND,
                body("not_found", format!("Task with id '{id}' not found")),
            ),
            Self::Service(err) => {
                tracing::error!(error = %err, "task request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    body("internal_error", "internal server error".to_owned()),
                )
            }
            Self::InvalidRequest(message) => {
                (StatusCode::BAD_REQUEST, body("invalid_request", message.clone()))
            }
            Self::TaskNotFound(_) => (StatusCode::NOT_FOUND, body("not_found", self.to_string())),
        }
    }
}

fn body(code: &str, message: String) -> ErrorBody {
    ErrorBody {
        error: code.to_owned(),
        message,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_body) = self.status_and_body();
        (status, Json(error_body)).into_response()
    }
}
