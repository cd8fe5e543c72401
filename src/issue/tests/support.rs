//! Shared fixtures for issue lifecycle tests.

use crate::issue::domain::{
    Actor, ActorId, Department, Issue, IssueDomainError, IssueId, IssueIntake, Priority,
    ResolvedAssignee, TransitionOutcome,
};
use chrono::{DateTime, Local, Utc};
use mockable::Clock;

/// Clock pinned to a single instant for deterministic transitions.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

/// A well-known instant used as "now" across domain tests.
#[must_use]
pub fn test_instant() -> DateTime<Utc> {
    DateTime::from_timestamp(1_760_000_000, 0).unwrap_or_default()
}

/// Clock pinned to [`test_instant`].
#[must_use]
pub fn fixed_clock() -> FixedClock {
    FixedClock(test_instant())
}

/// Operations management actor.
#[must_use]
pub fn ops_manager() -> Actor {
    Actor::new(
        ActorId::new("ops-1"),
        crate::issue::domain::Role::OperationsManagement,
    )
}

/// Technician actor with the given identifier.
#[must_use]
pub fn technician(id: &str) -> Actor {
    Actor::new(ActorId::new(id), crate::issue::domain::Role::Technicians)
}

/// Valid intake for a typical facilities problem, unassigned.
#[must_use]
pub fn broken_ac_intake() -> IssueIntake {
    IssueIntake {
        title: "Broken AC".to_owned(),
        description: "The AC unit in room 203 is not cooling".to_owned(),
        area: "Building A, Room 203".to_owned(),
        department: Department::Facilities,
        priority: Priority::Normal,
        assignee: None,
    }
}

/// Opens a fresh issue with [`broken_ac_intake`] at [`test_instant`].
pub fn open_issue(id: i64) -> Result<(Issue, TransitionOutcome), IssueDomainError> {
    Issue::open(
        IssueId::new(id),
        broken_ac_intake(),
        &ops_manager(),
        &fixed_clock(),
    )
}

/// Opens a fresh issue already assigned to the given technician.
pub fn open_assigned_issue(
    id: i64,
    technician_id: &str,
) -> Result<(Issue, TransitionOutcome), IssueDomainError> {
    let intake = IssueIntake {
        assignee: Some(ResolvedAssignee::new(
            ActorId::new(technician_id),
            "Sam Nguyen",
        )),
        ..broken_ac_intake()
    };
    Issue::open(IssueId::new(id), intake, &ops_manager(), &fixed_clock())
}
