//! In-memory integration tests for the task lifecycle.

use super::helpers::{TestService, seed_tasks, service};
use rstest::rstest;
use taskboard::task::{
    domain::{Task, TaskId, TaskStatus},
    services::{CreateTaskRequest, UpdateTaskRequest},
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn full_lifecycle_round_trip(service: TestService) -> Result<(), eyre::Report> {
    let created = service.create_task(CreateTaskRequest::new("A")).await?;
    eyre::ensure!(created.status() == TaskStatus::Pending, "status not defaulted");

    let listed = service.list_tasks(None).await?;
    eyre::ensure!(listed == vec![created.clone()], "created task not listed");

    let updated = service
        .update_task(created.id(), UpdateTaskRequest::new().with_status("done"))
        .await?;
    eyre::ensure!(updated.status() == TaskStatus::Done, "status not updated");
    eyre::ensure!(updated.title().as_str() == "A", "title changed unexpectedly");

    service.delete_task(created.id()).await?;
    let lookup = service.get_task(created.id()).await;
    eyre::ensure!(
        matches!(&lookup, Err(err) if err.is_not_found()),
        "expected not found after delete, got {lookup:?}"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn get_returns_same_task_until_mutated(service: TestService) -> Result<(), eyre::Report> {
    let seeded = seed_tasks(&service, &[("one", "pending"), ("two", "done")]).await?;

    for task in &seeded {
        let fetched = service.get_task(task.id()).await?;
        eyre::ensure!(&fetched == task, "task {} changed without update", task.id());
    }
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn status_filter_returns_exact_subset(service: TestService) -> Result<(), eyre::Report> {
    seed_tasks(
        &service,
        &[
            ("Task 1", "pending"),
            ("Task 2", "pending"),
            ("Task 3", "done"),
        ],
    )
    .await?;

    let pending = service.list_tasks(Some("pending")).await?;
    let done = service.list_tasks(Some("done")).await?;

    eyre::ensure!(pending.len() == 2, "expected 2 pending, found {}", pending.len());
    eyre::ensure!(done.len() == 1, "expected 1 done, found {}", done.len());
    eyre::ensure!(
        pending.iter().all(|task| task.status() == TaskStatus::Pending),
        "pending filter leaked other statuses"
    );
    let titles: Vec<&str> = pending.iter().map(|task| task.title().as_str()).collect();
    eyre::ensure!(titles == ["Task 1", "Task 2"], "unexpected order {titles:?}");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleting_one_task_keeps_order_of_others(
    service: TestService,
) -> Result<(), eyre::Report> {
    let seeded = seed_tasks(&service, &[("a", "pending"), ("b", "pending"), ("c", "done")]).await?;
    let middle = seeded
        .get(1)
        .ok_or_else(|| eyre::eyre!("expected three seeded tasks"))?;

    service.delete_task(middle.id()).await?;

    let remaining: Vec<TaskId> = service
        .list_tasks(None)
        .await?
        .iter()
        .map(Task::id)
        .collect();
    let expected: Vec<TaskId> = seeded
        .iter()
        .filter(|task| task.id() != middle.id())
        .map(Task::id)
        .collect();
    eyre::ensure!(remaining == expected, "order changed after delete");
    Ok(())
}
