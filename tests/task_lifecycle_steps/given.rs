//! Given steps for task lifecycle BDD scenarios.

use super::world::{TaskLifecycleWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use taskboard::task::services::CreateTaskRequest;

#[given(r#"a task titled "{title}""#)]
fn task_titled(world: &mut TaskLifecycleWorld, title: String) {
    world.pending_request = Some(CreateTaskRequest::new(title));
}

#[given(r#"a new task "{title}" with status "{status}""#)]
fn task_titled_with_status(world: &mut TaskLifecycleWorld, title: String, status: String) {
    world.pending_request = Some(CreateTaskRequest::new(title).with_status(status));
}

#[given("the task has been created")]
fn task_has_been_created(world: &mut TaskLifecycleWorld) -> Result<(), eyre::Report> {
    let request = world
        .pending_request
        .clone()
        .ok_or_else(|| eyre::eyre!("missing pending request in scenario world"))?;
    let created = run_async(world.service.create_task(request))
        .wrap_err("create task for scenario setup")?;
    world.last_task = Some(created);
    Ok(())
}
