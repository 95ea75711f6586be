//! Runs the Taskboard HTTP service.
//!
//! Usage:
//!
//! ```text
//! TASKBOARD__SERVER__PORT=9000 taskboard
//! ```
//!
//! Configuration is described in [`taskboard::infrastructure::config`].

use std::sync::Arc;

use anyhow::Context;
use taskboard::infrastructure::{config::Settings, server, telemetry};
use taskboard::task::{adapters::memory::InMemoryTaskRepository, services::TaskService};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::load().context("failed to load configuration")?;
    telemetry::init(&settings.log).context("failed to initialise logging")?;

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "taskboard starting");

    let repository = Arc::new(InMemoryTaskRepository::new());
    let service = TaskService::new(repository);

    server::run_server(&settings.server, server::app(service))
        .await
        .context("server terminated with an error")
}
