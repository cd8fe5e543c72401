//! Issue aggregate root and the lifecycle engine operations.

use super::{
    ActivityAction, ActivityDraft, Actor, ActorId, Department, IssueDomainError, IssueId,
    LifecycleOperation, ParseStatusError, Priority, Role, TransitionOutcome,
};
use chrono::{DateTime, TimeDelta, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// SLA window applied at creation: issues are due 72 hours after report.
pub const SLA_WINDOW_HOURS: i64 = 72;

/// Label shown for an empty assignee slot in ledger details.
pub const UNASSIGNED_LABEL: &str = "Unassigned";

/// Issue lifecycle status.
///
/// Status only moves forward: `Open → InProgress → Closed`, with `Open →
/// Closed` permitted directly. Closed issues never reopen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// Reported, work not started.
    Open,
    /// Work underway.
    InProgress,
    /// Resolved; retained forever for querying.
    Closed,
}

impl Status {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::InProgress => "in_progress",
            Self::Closed => "closed",
        }
    }

    /// Whether the status admits no further transitions.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Closed)
    }

    /// Whether the lifecycle permits moving from `self` to `next`.
    #[must_use]
    pub const fn can_transition_to(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Open, Self::InProgress | Self::Closed) | (Self::InProgress, Self::Closed)
        )
    }
}

impl TryFrom<&str> for Status {
    type Error = ParseStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "open" => Ok(Self::Open),
            "in_progress" => Ok(Self::InProgress),
            "closed" => Ok(Self::Closed),
            _ => Err(ParseStatusError(value.to_owned())),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An assignee whose display name has already been resolved by the caller.
///
/// Name resolution is best-effort and happens outside the engine; callers
/// fall back to the raw identifier when the identity collaborator cannot
/// supply a name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedAssignee {
    id: ActorId,
    display: String,
}

impl ResolvedAssignee {
    /// Pairs an assignee identifier with its resolved display label.
    #[must_use]
    pub fn new(id: ActorId, display: impl Into<String>) -> Self {
        Self {
            id,
            display: display.into(),
        }
    }

    /// Returns the assignee identifier.
    #[must_use]
    pub const fn id(&self) -> &ActorId {
        &self.id
    }

    /// Returns the display label.
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Consumes the pair, yielding the identifier.
    #[must_use]
    pub fn into_id(self) -> ActorId {
        self.id
    }
}

/// Validated intake fields for reporting a new issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueIntake {
    /// Short summary of the problem.
    pub title: String,
    /// Full description.
    pub description: String,
    /// Free-text location tag.
    pub area: String,
    /// Responsible department.
    pub department: Department,
    /// Urgency.
    pub priority: Priority,
    /// Initial assignee with resolved display label, if any.
    pub assignee: Option<ResolvedAssignee>,
}

/// Parameter object for reconstructing a persisted issue aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedIssueData {
    /// Persisted issue identifier.
    pub id: IssueId,
    /// Persisted title.
    pub title: String,
    /// Persisted description.
    pub description: String,
    /// Persisted location tag.
    pub area: String,
    /// Persisted department.
    pub department: Department,
    /// Persisted priority.
    pub priority: Priority,
    /// Persisted lifecycle status.
    pub status: Status,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted SLA deadline.
    pub due_at: DateTime<Utc>,
    /// Persisted creator reference.
    pub created_by: ActorId,
    /// Persisted assignee reference, if any.
    pub assignee: Option<ActorId>,
    /// Persisted work-start timestamp, if any.
    pub started_at: Option<DateTime<Utc>>,
    /// Persisted resolution timestamp, if any.
    pub resolved_at: Option<DateTime<Utc>>,
}

/// Issue aggregate root.
///
/// All mutation goes through the lifecycle engine operations ([`Self::open`],
/// [`Self::assign`], [`Self::start_work`], [`Self::close`]); each reads the
/// clock exactly once and returns the ledger drafts describing what changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    id: IssueId,
    title: String,
    description: String,
    area: String,
    department: Department,
    priority: Priority,
    status: Status,
    created_at: DateTime<Utc>,
    due_at: DateTime<Utc>,
    created_by: ActorId,
    assignee: Option<ActorId>,
    started_at: Option<DateTime<Utc>>,
    resolved_at: Option<DateTime<Utc>>,
}

impl Issue {
    /// Reports a new issue.
    ///
    /// Any authenticated actor may report. The SLA deadline is fixed at the
    /// creation instant plus [`SLA_WINDOW_HOURS`]. The outcome always
    /// carries a `created` draft, plus an `assigned` draft when an initial
    /// assignee was supplied.
    ///
    /// # Errors
    ///
    /// Returns [`IssueDomainError::MissingField`] when title, description,
    /// or area is empty after trimming.
    pub fn open(
        id: IssueId,
        intake: IssueIntake,
        reporter: &Actor,
        clock: &impl Clock,
    ) -> Result<(Self, TransitionOutcome), IssueDomainError> {
        let title = required_text(&intake.title, "title")?;
        let description = required_text(&intake.description, "description")?;
        let area = required_text(&intake.area, "area")?;

        let occurred_at = clock.utc();
        let mut entries = vec![ActivityDraft::new(ActivityAction::Created, "Issue reported")];
        if let Some(assignee) = &intake.assignee {
            entries.push(ActivityDraft::new(
                ActivityAction::Assigned,
                format!("Assigned to {}", assignee.display()),
            ));
        }

        let issue = Self {
            id,
            title,
            description,
            area,
            department: intake.department,
            priority: intake.priority,
            status: Status::Open,
            created_at: occurred_at,
            due_at: occurred_at + TimeDelta::hours(SLA_WINDOW_HOURS),
            created_by: reporter.id().clone(),
            assignee: intake.assignee.map(ResolvedAssignee::into_id),
            started_at: None,
            resolved_at: None,
        };

        Ok((issue, TransitionOutcome::new(occurred_at, entries)))
    }

    /// Reconstructs an issue from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedIssueData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            description: data.description,
            area: data.area,
            department: data.department,
            priority: data.priority,
            status: data.status,
            created_at: data.created_at,
            due_at: data.due_at,
            created_by: data.created_by,
            assignee: data.assignee,
            started_at: data.started_at,
            resolved_at: data.resolved_at,
        }
    }

    /// Changes or clears the assignee.
    ///
    /// Status is untouched. Exactly one `assigned` draft is emitted even
    /// when the assignee is unchanged; downstream consumers may rely on one
    /// record per assignment action. `previous_label` is the resolved label
    /// for the outgoing assignee slot.
    ///
    /// # Errors
    ///
    /// Returns [`IssueDomainError::PermissionDenied`] unless the actor's
    /// role may assign (operations management or technicians).
    pub fn assign(
        &mut self,
        actor: &Actor,
        new_assignee: Option<ResolvedAssignee>,
        previous_label: &str,
        clock: &impl Clock,
    ) -> Result<TransitionOutcome, IssueDomainError> {
        if !actor.role().may_assign() {
            return Err(self.permission_denied(actor, LifecycleOperation::Assign));
        }

        let occurred_at = clock.utc();
        let new_label = new_assignee
            .as_ref()
            .map_or(UNASSIGNED_LABEL, ResolvedAssignee::display);
        let details = format!("Assignee changed: {previous_label} \u{2192} {new_label}");
        self.assignee = new_assignee.map(ResolvedAssignee::into_id);

        Ok(TransitionOutcome::new(
            occurred_at,
            vec![ActivityDraft::new(ActivityAction::Assigned, details)],
        ))
    }

    /// Moves an open issue into progress.
    ///
    /// Sets `started_at` on the first start and emits a `work_started`
    /// draft; an already-set `started_at` is left alone and the draft
    /// skipped. A `status_changed` draft is always emitted.
    ///
    /// # Errors
    ///
    /// Returns [`IssueDomainError::InvalidTransition`] when the issue is not
    /// open, or [`IssueDomainError::PermissionDenied`] when the actor is
    /// neither operations management nor the assigned technician.
    pub fn start_work(
        &mut self,
        actor: &Actor,
        clock: &impl Clock,
    ) -> Result<TransitionOutcome, IssueDomainError> {
        if self.status != Status::Open {
            return Err(IssueDomainError::InvalidTransition {
                issue: self.id,
                from: self.status,
                operation: LifecycleOperation::StartWork,
            });
        }
        self.check_work_permission(actor, LifecycleOperation::StartWork)?;

        let occurred_at = clock.utc();
        let mut entries = Vec::with_capacity(2);
        if self.started_at.is_none() {
            self.started_at = Some(occurred_at);
            entries.push(ActivityDraft::new(ActivityAction::WorkStarted, "Started work"));
        }
        self.status = Status::InProgress;
        entries.push(ActivityDraft::new(
            ActivityAction::StatusChanged,
            "Status \u{2192} in_progress",
        ));

        Ok(TransitionOutcome::new(occurred_at, entries))
    }

    /// Resolves an issue, from either `Open` or `InProgress`.
    ///
    /// When work never started, `started_at` is set to the same instant as
    /// `resolved_at` and an auto-start draft precedes the completion draft,
    /// so a start always exists before a completion and turnaround is never
    /// negative.
    ///
    /// # Errors
    ///
    /// Returns [`IssueDomainError::InvalidTransition`] when the issue is
    /// already closed, or [`IssueDomainError::PermissionDenied`] when the
    /// actor is neither operations management nor the assigned technician.
    pub fn close(
        &mut self,
        actor: &Actor,
        clock: &impl Clock,
    ) -> Result<TransitionOutcome, IssueDomainError> {
        if self.status == Status::Closed {
            return Err(IssueDomainError::InvalidTransition {
                issue: self.id,
                from: self.status,
                operation: LifecycleOperation::Close,
            });
        }
        self.check_work_permission(actor, LifecycleOperation::Close)?;

        let occurred_at = clock.utc();
        let mut entries = Vec::with_capacity(3);
        if self.started_at.is_none() {
            self.started_at = Some(occurred_at);
            entries.push(ActivityDraft::new(
                ActivityAction::WorkStarted,
                "Auto-start on close",
            ));
        }
        self.resolved_at = Some(occurred_at);
        self.status = Status::Closed;
        entries.push(ActivityDraft::new(
            ActivityAction::WorkCompleted,
            "Marked complete",
        ));
        entries.push(ActivityDraft::new(
            ActivityAction::StatusChanged,
            "Status \u{2192} closed",
        ));

        Ok(TransitionOutcome::new(occurred_at, entries))
    }

    /// Time spent so far on an in-progress issue.
    ///
    /// Returns `None` for any other status.
    #[must_use]
    pub fn elapsed(&self, clock: &impl Clock) -> Option<TimeDelta> {
        match self.status {
            Status::InProgress => self.started_at.map(|started| clock.utc() - started),
            Status::Open | Status::Closed => None,
        }
    }

    /// Total time from work start to resolution for a closed issue.
    ///
    /// Returns `None` unless the issue is closed.
    #[must_use]
    pub fn turnaround(&self) -> Option<TimeDelta> {
        match (self.status, self.started_at, self.resolved_at) {
            (Status::Closed, Some(started), Some(resolved)) => {
                Some(resolved.signed_duration_since(started))
            }
            _ => None,
        }
    }

    /// Returns the issue identifier.
    #[must_use]
    pub const fn id(&self) -> IssueId {
        self.id
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the free-text location tag.
    #[must_use]
    pub fn area(&self) -> &str {
        &self.area
    }

    /// Returns the responsible department.
    #[must_use]
    pub const fn department(&self) -> Department {
        self.department
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the SLA deadline.
    #[must_use]
    pub const fn due_at(&self) -> DateTime<Utc> {
        self.due_at
    }

    /// Returns the creator reference.
    #[must_use]
    pub const fn created_by(&self) -> &ActorId {
        &self.created_by
    }

    /// Returns the current assignee, if any.
    #[must_use]
    pub const fn assignee(&self) -> Option<&ActorId> {
        self.assignee.as_ref()
    }

    /// Returns the work-start timestamp, if any.
    #[must_use]
    pub const fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    /// Returns the resolution timestamp, if any.
    #[must_use]
    pub const fn resolved_at(&self) -> Option<DateTime<Utc>> {
        self.resolved_at
    }

    /// Operations management acts on any issue; technicians only on issues
    /// currently assigned to them.
    fn check_work_permission(
        &self,
        actor: &Actor,
        operation: LifecycleOperation,
    ) -> Result<(), IssueDomainError> {
        let allowed = match actor.role() {
            Role::OperationsManagement => true,
            Role::Technicians => self.assignee.as_ref() == Some(actor.id()),
            _ => false,
        };
        if allowed {
            Ok(())
        } else {
            Err(self.permission_denied(actor, operation))
        }
    }

    fn permission_denied(&self, actor: &Actor, operation: LifecycleOperation) -> IssueDomainError {
        IssueDomainError::PermissionDenied {
            issue: self.id,
            actor: actor.id().clone(),
            role: actor.role(),
            operation,
        }
    }
}

/// Trims a required intake field, rejecting empty values.
fn required_text(value: &str, field: &'static str) -> Result<String, IssueDomainError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(IssueDomainError::MissingField(field));
    }
    Ok(trimmed.to_owned())
}
