//! Error types for issue domain validation, permissions, and parsing.

use super::{ActorId, IssueId, Role, Status};
use std::fmt;
use thiserror::Error;

/// Lifecycle operations named in permission and transition errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleOperation {
    /// Changing or clearing the assignee.
    Assign,
    /// Moving an open issue into progress.
    StartWork,
    /// Resolving an issue.
    Close,
}

impl LifecycleOperation {
    /// Returns the operation name used in error messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Assign => "assign",
            Self::StartWork => "start work on",
            Self::Close => "close",
        }
    }
}

impl fmt::Display for LifecycleOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Errors returned by issue lifecycle engine operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IssueDomainError {
    /// The actor's role (and assignment, for technicians) does not allow
    /// the requested operation.
    #[error("actor {actor} with role {role} may not {operation} issue {issue}")]
    PermissionDenied {
        /// Issue the operation targeted.
        issue: IssueId,
        /// Acting party.
        actor: ActorId,
        /// Role the acting party held at call time.
        role: Role,
        /// Operation that was rejected.
        operation: LifecycleOperation,
    },

    /// The issue status does not permit the requested transition.
    #[error("cannot {operation} issue {issue} while its status is {from}")]
    InvalidTransition {
        /// Issue the operation targeted.
        issue: IssueId,
        /// Status the issue held at call time.
        from: Status,
        /// Operation that was rejected.
        operation: LifecycleOperation,
    },

    /// A required intake field was empty after trimming.
    #[error("missing required field: {0}")]
    MissingField(&'static str),
}

/// Error returned while parsing issue statuses from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown issue status: {0}")]
pub struct ParseStatusError(pub String);

/// Error returned while parsing priorities from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown priority: {0}")]
pub struct ParsePriorityError(pub String);

/// Error returned while parsing departments from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown department: {0}")]
pub struct ParseDepartmentError(pub String);

/// Error returned while parsing actor roles from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown role: {0}")]
pub struct ParseRoleError(pub String);

/// Error returned while parsing activity action tags from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown activity action: {0}")]
pub struct ParseActivityActionError(pub String);
