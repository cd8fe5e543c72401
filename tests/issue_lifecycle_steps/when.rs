//! When steps for issue lifecycle BDD scenarios.

use super::world::{IssueLifecycleWorld, run_async};
use rstest_bdd_macros::when;
use upkeep::issue::domain::{Actor, IssueId};

fn issue_id(world: &IssueLifecycleWorld) -> Result<IssueId, eyre::Report> {
    world
        .issue
        .as_ref()
        .map(|issue| issue.id())
        .ok_or_else(|| eyre::eyre!("missing reported issue in scenario world"))
}

fn record_start(world: &mut IssueLifecycleWorld, actor: Actor) -> Result<(), eyre::Report> {
    let id = issue_id(world)?;
    let result = run_async(world.service.start_work(id, &actor));
    if let Ok(ref updated) = result {
        world.issue = Some(updated.clone());
    }
    world.last_result = Some(result);
    Ok(())
}

fn record_close(world: &mut IssueLifecycleWorld) -> Result<(), eyre::Report> {
    let id = issue_id(world)?;
    let actor = world.ops_manager.clone();
    let result = run_async(world.service.close(id, &actor));
    if let Ok(ref updated) = result {
        world.issue = Some(updated.clone());
    }
    world.last_result = Some(result);
    Ok(())
}

#[when("the technician starts work")]
fn technician_starts(world: &mut IssueLifecycleWorld) -> Result<(), eyre::Report> {
    let actor = world.technician.clone();
    record_start(world, actor)
}

#[when("another technician starts work")]
fn other_technician_starts(world: &mut IssueLifecycleWorld) -> Result<(), eyre::Report> {
    let actor = world.other_technician.clone();
    record_start(world, actor)
}

#[when("the operations manager closes the issue")]
fn ops_manager_closes(world: &mut IssueLifecycleWorld) -> Result<(), eyre::Report> {
    record_close(world)
}

#[when("the operations manager closes the issue again")]
fn ops_manager_closes_again(world: &mut IssueLifecycleWorld) -> Result<(), eyre::Report> {
    record_close(world)
}
