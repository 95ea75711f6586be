//! When steps for task lifecycle BDD scenarios.

use super::world::{TaskLifecycleWorld, run_async};
use rstest_bdd_macros::when;
use taskboard::task::services::UpdateTaskRequest;

#[when("the task is created")]
fn create_task(world: &mut TaskLifecycleWorld) -> Result<(), eyre::Report> {
    let request = world
        .pending_request
        .clone()
        .ok_or_else(|| eyre::eyre!("missing pending request in scenario world"))?;
    let result = run_async(world.service.create_task(request));
    if let Ok(ref created) = result {
        world.last_task = Some(created.clone());
    }
    world.last_result = Some(result.map(|_| ()));
    Ok(())
}

#[when(r#"the task status is updated to "{status}""#)]
fn update_status(world: &mut TaskLifecycleWorld, status: String) -> Result<(), eyre::Report> {
    let id = world.task()?.id();
    let result = run_async(
        world
            .service
            .update_task(id, UpdateTaskRequest::new().with_status(status)),
    );
    if let Ok(ref updated) = result {
        world.last_task = Some(updated.clone());
    }
    world.last_result = Some(result.map(|_| ()));
    Ok(())
}

#[when("the task is deleted")]
fn delete_task(world: &mut TaskLifecycleWorld) -> Result<(), eyre::Report> {
    let id = world.task()?.id();
    world.last_result = Some(run_async(world.service.delete_task(id)));
    Ok(())
}

#[when("the task is deleted again")]
fn delete_task_again(world: &mut TaskLifecycleWorld) -> Result<(), eyre::Report> {
    let id = world.task()?.id();
    world.last_result = Some(run_async(world.service.delete_task(id)));
    Ok(())
}
