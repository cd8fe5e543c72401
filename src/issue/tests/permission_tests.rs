//! Unit tests for role-based permission checks on lifecycle operations.

use super::support::{fixed_clock, open_assigned_issue, open_issue};
use crate::issue::domain::{
    Actor, ActorId, IssueDomainError, LifecycleOperation, ResolvedAssignee, Role, Status,
    UNASSIGNED_LABEL,
};
use eyre::ensure;
use rstest::rstest;

fn actor_with(role: Role) -> Actor {
    Actor::new(ActorId::new("actor-1"), role)
}

#[rstest]
#[case(Role::OperationsManagement, true)]
#[case(Role::Technicians, true)]
#[case(Role::Housekeeping, false)]
#[case(Role::Security, false)]
#[case(Role::Engineering, false)]
#[case(Role::FoodService, false)]
#[case(Role::FrontOffice, false)]
#[case(Role::Grounds, false)]
#[case(Role::It, false)]
#[case(Role::Finance, false)]
#[case(Role::HumanResources, false)]
#[case(Role::Administration, false)]
fn only_operations_management_and_technicians_may_assign(
    #[case] role: Role,
    #[case] allowed: bool,
) -> eyre::Result<()> {
    let (mut issue, _) = open_issue(1)?;
    let actor = actor_with(role);

    let result = issue.assign(
        &actor,
        Some(ResolvedAssignee::new(ActorId::new("tech-42"), "Sam Nguyen")),
        UNASSIGNED_LABEL,
        &fixed_clock(),
    );

    ensure!(result.is_ok() == allowed);
    if !allowed {
        ensure!(
            result.err()
                == Some(IssueDomainError::PermissionDenied {
                    issue: issue.id(),
                    actor: actor.id().clone(),
                    role,
                    operation: LifecycleOperation::Assign,
                })
        );
        ensure!(issue.assignee().is_none());
    }
    Ok(())
}

#[rstest]
#[case(Role::OperationsManagement, true)]
#[case(Role::Technicians, false)]
#[case(Role::Housekeeping, false)]
#[case(Role::Security, false)]
#[case(Role::Engineering, false)]
#[case(Role::FoodService, false)]
#[case(Role::FrontOffice, false)]
#[case(Role::Grounds, false)]
#[case(Role::It, false)]
#[case(Role::Finance, false)]
#[case(Role::HumanResources, false)]
#[case(Role::Administration, false)]
fn start_work_on_unassigned_issue_needs_operations_management(
    #[case] role: Role,
    #[case] allowed: bool,
) -> eyre::Result<()> {
    let (mut issue, _) = open_issue(2)?;
    let result = issue.start_work(&actor_with(role), &fixed_clock());
    ensure!(result.is_ok() == allowed);
    if !allowed {
        ensure!(issue.status() == Status::Open);
        ensure!(issue.started_at().is_none());
    }
    Ok(())
}

#[rstest]
fn assigned_technician_may_start_work() -> eyre::Result<()> {
    let (mut issue, _) = open_assigned_issue(3, "tech-42")?;
    let tech = Actor::new(ActorId::new("tech-42"), Role::Technicians);

    issue.start_work(&tech, &fixed_clock())?;
    ensure!(issue.status() == Status::InProgress);
    Ok(())
}

#[rstest]
fn unassigned_technician_may_not_start_work() -> eyre::Result<()> {
    let (mut issue, _) = open_assigned_issue(4, "tech-42")?;
    let other = Actor::new(ActorId::new("tech-7"), Role::Technicians);

    let result = issue.start_work(&other, &fixed_clock());
    ensure!(
        result.err()
            == Some(IssueDomainError::PermissionDenied {
                issue: issue.id(),
                actor: ActorId::new("tech-7"),
                role: Role::Technicians,
                operation: LifecycleOperation::StartWork,
            })
    );
    ensure!(issue.status() == Status::Open);
    Ok(())
}

/// Close enforces the same rule as start: a differently-coded caller must
/// not be able to bypass it.
#[rstest]
fn close_mirrors_start_work_permissions() -> eyre::Result<()> {
    let (mut issue, _) = open_assigned_issue(5, "tech-42")?;

    let other = Actor::new(ActorId::new("tech-7"), Role::Technicians);
    let denied = issue.close(&other, &fixed_clock());
    ensure!(matches!(
        denied,
        Err(IssueDomainError::PermissionDenied {
            operation: LifecycleOperation::Close,
            ..
        })
    ));
    ensure!(issue.status() == Status::Open);

    let assigned = Actor::new(ActorId::new("tech-42"), Role::Technicians);
    issue.close(&assigned, &fixed_clock())?;
    ensure!(issue.status() == Status::Closed);
    Ok(())
}

#[rstest]
fn operations_management_may_close_regardless_of_assignment() -> eyre::Result<()> {
    let (mut issue, _) = open_assigned_issue(6, "tech-42")?;
    issue.close(&actor_with(Role::OperationsManagement), &fixed_clock())?;
    ensure!(issue.status() == Status::Closed);
    Ok(())
}
