//! Given steps for issue lifecycle BDD scenarios.

use super::world::{IssueLifecycleWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use upkeep::issue::{domain::Department, services::ReportIssueRequest};

#[given(r#"a reported issue titled "{title}""#)]
fn reported_issue(world: &mut IssueLifecycleWorld, title: String) -> Result<(), eyre::Report> {
    let request = ReportIssueRequest::new(
        title,
        "Reported through the front desk",
        "Building A, Room 203",
        Department::Facilities,
    );
    let issue = run_async(world.service.report(request, &world.reporter))
        .wrap_err("report issue in scenario setup")?;
    world.issue = Some(issue);
    Ok(())
}

#[given("the issue is assigned to the technician")]
fn issue_assigned(world: &mut IssueLifecycleWorld) -> Result<(), eyre::Report> {
    let issue = world
        .issue
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing reported issue in scenario world"))?;
    let technician_id = world.technician.id().clone();

    let updated = run_async(world.service.assign(
        issue.id(),
        &world.ops_manager,
        Some(technician_id),
    ))
    .wrap_err("assign issue in scenario setup")?;
    world.issue = Some(updated);
    Ok(())
}
