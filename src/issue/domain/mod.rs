//! Domain model for the facility-maintenance issue lifecycle.
//!
//! The issue domain models issue intake, role-checked lifecycle transitions,
//! timestamp derivation, and the append-only activity record, while keeping
//! all infrastructure concerns outside of the domain boundary.

mod activity;
mod actor;
mod classification;
mod duration;
mod error;
mod ids;
mod issue;

pub use activity::{
    ActivityAction, ActivityDraft, ActivityEntry, SUMMARY_WINDOW, TransitionOutcome,
    chronological_window,
};
pub use actor::{Actor, Role};
pub use classification::{Department, Priority};
pub use duration::format_duration;
pub use error::{
    IssueDomainError, LifecycleOperation, ParseActivityActionError, ParseDepartmentError,
    ParsePriorityError, ParseRoleError, ParseStatusError,
};
pub use ids::{ActorId, IssueId};
pub use issue::{
    Issue, IssueIntake, PersistedIssueData, ResolvedAssignee, SLA_WINDOW_HOURS, Status,
    UNASSIGNED_LABEL,
};
