//! Application router and HTTP serve loop.

use axum::{Json, Router, routing::get};
use serde::Serialize;
use std::io;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use super::config::ServerSettings;
use crate::task::{adapters::http, ports::TaskRepository, services::TaskService};

/// Body of `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthResponse {
    /// Liveness status; always `healthy` while the process serves requests.
    pub status: String,
    /// Human-readable description.
    pub message: String,
}

/// Body of `GET /`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiInfo {
    /// Service name.
    pub message: String,
    /// Crate version.
    pub version: String,
    /// Paths of the top-level endpoints.
    pub endpoints: ApiEndpoints,
}

/// Endpoint directory advertised by `GET /`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiEndpoints {
    /// Health check path.
    pub health: String,
    /// Task collection path.
    pub tasks: String,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_owned(),
        message: "Task Management API is running".to_owned(),
    })
}

async fn root() -> Json<ApiInfo> {
    Json(ApiInfo {
        message: "Task Management API".to_owned(),
        version: env!("CARGO_PKG_VERSION").to_owned(),
        endpoints: ApiEndpoints {
            health: "/health".to_owned(),
            tasks: "/tasks".to_owned(),
        },
    })
}

/// Builds the complete application router around `service`.
pub fn app<R>(service: TaskService<R>) -> Router
where
    R: TaskRepository + 'static,
{
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .merge(http::routes(service))
        .layer(TraceLayer::new_for_http())
}

/// Binds the configured address and serves `app` until Ctrl-C or SIGTERM.
///
/// # Errors
///
/// Returns an error if the listener cannot be bound or the server fails
/// while running.
pub async fn run_server(settings: &ServerSettings, app: Router) -> io::Result<()> {
    let listener = TcpListener::bind(settings.socket_addr()).await?;
    let addr: SocketAddr = listener.local_addr()?;
    tracing::info!(%addr, "taskboard listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("taskboard stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for Ctrl-C");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    tracing::info!("shutdown signal received");
}
