//! Then steps for task lifecycle BDD scenarios.

use super::world::{TaskLifecycleWorld, run_async};
use rstest_bdd_macros::then;
use taskboard::task::domain::TaskStatus;

#[then(r#"the task status is "{status}""#)]
fn task_status_is(world: &TaskLifecycleWorld, status: String) -> Result<(), eyre::Report> {
    let expected = TaskStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid expected status in scenario: {err}"))?;
    let actual = world.task()?.status();
    eyre::ensure!(actual == expected, "expected status {expected}, found {actual}");
    Ok(())
}

#[then(r#"the task title is "{title}""#)]
fn task_title_is(world: &TaskLifecycleWorld, title: String) -> Result<(), eyre::Report> {
    let task = world.task()?;
    eyre::ensure!(
        task.title().as_str() == title,
        "expected title {title}, found {}",
        task.title()
    );
    Ok(())
}

#[then("the operation fails with a validation error")]
fn fails_with_validation_error(world: &TaskLifecycleWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing operation result"))?;
    eyre::ensure!(
        matches!(result, Err(err) if err.is_validation()),
        "expected validation error, got {result:?}"
    );
    Ok(())
}

#[then("the operation fails with a not found error")]
fn fails_with_not_found_error(world: &TaskLifecycleWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing operation result"))?;
    eyre::ensure!(
        matches!(result, Err(err) if err.is_not_found()),
        "expected not found error, got {result:?}"
    );
    Ok(())
}

#[then("looking up the task fails with a not found error")]
fn lookup_fails_with_not_found(world: &TaskLifecycleWorld) -> Result<(), eyre::Report> {
    let id = world.task()?.id();
    let lookup = run_async(world.service.get_task(id));
    eyre::ensure!(
        matches!(&lookup, Err(err) if err.is_not_found()),
        "expected not found on lookup, got {lookup:?}"
    );
    Ok(())
}
