//! Then steps for issue lifecycle BDD scenarios.

use super::world::{IssueLifecycleWorld, run_async};
use rstest_bdd_macros::then;
use upkeep::issue::{
    domain::{Issue, IssueDomainError, Status},
    services::IssueLifecycleError,
};

fn fetch_fresh(world: &IssueLifecycleWorld) -> Result<Issue, eyre::Report> {
    let issue = world
        .issue
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing reported issue in scenario world"))?;
    run_async(world.service.find(issue.id()))
        .map_err(|err| eyre::eyre!("issue lookup failed: {err}"))?
        .ok_or_else(|| eyre::eyre!("issue vanished from the store"))
}

#[then(r#"the issue status is "{status}""#)]
fn issue_status_is(world: &IssueLifecycleWorld, status: String) -> Result<(), eyre::Report> {
    let expected = Status::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid expected status in scenario: {err}"))?;
    let fresh = fetch_fresh(world)?;

    if fresh.status() != expected {
        return Err(eyre::eyre!(
            "expected status {}, found {}",
            expected.as_str(),
            fresh.status().as_str()
        ));
    }
    Ok(())
}

#[then(r#"the displayed duration is "{value}""#)]
fn displayed_duration_is(world: &IssueLifecycleWorld, value: String) -> Result<(), eyre::Report> {
    let fresh = fetch_fresh(world)?;
    let shown = world
        .service
        .duration_display(&fresh)
        .ok_or_else(|| eyre::eyre!("issue has no displayable duration"))?;
    if shown != value {
        return Err(eyre::eyre!("expected duration {value}, found {shown}"));
    }
    Ok(())
}

#[then("the ledger records {count:usize} entries")]
fn ledger_records_entries(world: &IssueLifecycleWorld, count: usize) -> Result<(), eyre::Report> {
    let issue = world
        .issue
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing reported issue in scenario world"))?;
    let activity = run_async(world.service.activity(issue.id()))
        .map_err(|err| eyre::eyre!("activity listing failed: {err}"))?;
    if activity.len() != count {
        return Err(eyre::eyre!(
            "expected {count} ledger entries, found {}",
            activity.len()
        ));
    }
    Ok(())
}

#[then("the operation fails with a permission error")]
fn fails_with_permission_error(world: &IssueLifecycleWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing operation result in scenario world"))?;
    match result {
        Err(IssueLifecycleError::Domain(IssueDomainError::PermissionDenied { .. })) => Ok(()),
        other => Err(eyre::eyre!("expected permission denial, got {other:?}")),
    }
}

#[then("the operation fails with an invalid transition error")]
fn fails_with_invalid_transition(world: &IssueLifecycleWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing operation result in scenario world"))?;
    match result {
        Err(IssueLifecycleError::Domain(IssueDomainError::InvalidTransition { .. })) => Ok(()),
        other => Err(eyre::eyre!("expected invalid transition, got {other:?}")),
    }
}
