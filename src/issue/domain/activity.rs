//! Append-only activity ledger entries and transition outcomes.

use super::{ActorId, IssueId, ParseActivityActionError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of raw entries kept by summary views before reversing to
/// chronological order.
pub const SUMMARY_WINDOW: usize = 3;

/// Kinds of mutation recorded in the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityAction {
    /// Issue was reported.
    Created,
    /// Assignee was set, changed, or cleared.
    Assigned,
    /// Status moved forward.
    StatusChanged,
    /// Work began (explicitly or auto-started on close).
    WorkStarted,
    /// Work finished.
    WorkCompleted,
}

impl ActivityAction {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Assigned => "assigned",
            Self::StatusChanged => "status_changed",
            Self::WorkStarted => "work_started",
            Self::WorkCompleted => "work_completed",
        }
    }
}

impl TryFrom<&str> for ActivityAction {
    type Error = ParseActivityActionError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "created" => Ok(Self::Created),
            "assigned" => Ok(Self::Assigned),
            "status_changed" => Ok(Self::StatusChanged),
            "work_started" => Ok(Self::WorkStarted),
            "work_completed" => Ok(Self::WorkCompleted),
            _ => Err(ParseActivityActionError(value.to_owned())),
        }
    }
}

impl fmt::Display for ActivityAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One immutable fact about an issue mutation.
///
/// Entries are never edited or deleted. Per issue they are totally ordered
/// by `recorded_at`, ties broken by ledger insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityEntry {
    issue_id: IssueId,
    recorded_at: DateTime<Utc>,
    actor: ActorId,
    action: ActivityAction,
    details: Option<String>,
}

impl ActivityEntry {
    /// Creates an entry ready for ledger append.
    #[must_use]
    pub const fn new(
        issue_id: IssueId,
        recorded_at: DateTime<Utc>,
        actor: ActorId,
        action: ActivityAction,
        details: Option<String>,
    ) -> Self {
        Self {
            issue_id,
            recorded_at,
            actor,
            action,
            details,
        }
    }

    /// Returns the owning issue identifier.
    #[must_use]
    pub const fn issue_id(&self) -> IssueId {
        self.issue_id
    }

    /// Returns the instant the mutation was observed.
    #[must_use]
    pub const fn recorded_at(&self) -> DateTime<Utc> {
        self.recorded_at
    }

    /// Returns the acting party.
    #[must_use]
    pub const fn actor(&self) -> &ActorId {
        &self.actor
    }

    /// Returns the action tag.
    #[must_use]
    pub const fn action(&self) -> ActivityAction {
        self.action
    }

    /// Returns the free-text details, if any.
    #[must_use]
    pub fn details(&self) -> Option<&str> {
        self.details.as_deref()
    }
}

/// An entry computed by an engine operation, before the service stamps it
/// with the owning issue, actor, and the operation's shared instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityDraft {
    action: ActivityAction,
    details: Option<String>,
}

impl ActivityDraft {
    /// Creates a draft with details text.
    #[must_use]
    pub fn new(action: ActivityAction, details: impl Into<String>) -> Self {
        Self {
            action,
            details: Some(details.into()),
        }
    }

    /// Returns the action tag.
    #[must_use]
    pub const fn action(&self) -> ActivityAction {
        self.action
    }

    /// Returns the details text, if any.
    #[must_use]
    pub fn details(&self) -> Option<&str> {
        self.details.as_deref()
    }

    /// Stamps the draft into a ledger-ready entry.
    #[must_use]
    pub fn into_entry(
        self,
        issue_id: IssueId,
        actor: ActorId,
        recorded_at: DateTime<Utc>,
    ) -> ActivityEntry {
        ActivityEntry::new(issue_id, recorded_at, actor, self.action, self.details)
    }
}

/// Result of a successful engine operation: the instant read from the clock
/// and the entries to append, in order.
///
/// All drafts share `occurred_at`, so a single operation can never produce
/// entries with inconsistent timestamps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionOutcome {
    occurred_at: DateTime<Utc>,
    entries: Vec<ActivityDraft>,
}

impl TransitionOutcome {
    /// Creates an outcome from the operation's clock read and drafts.
    #[must_use]
    pub const fn new(occurred_at: DateTime<Utc>, entries: Vec<ActivityDraft>) -> Self {
        Self {
            occurred_at,
            entries,
        }
    }

    /// Returns the single instant shared by every draft.
    #[must_use]
    pub const fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }

    /// Returns the drafts in append order.
    #[must_use]
    pub fn entries(&self) -> &[ActivityDraft] {
        &self.entries
    }

    /// Consumes the outcome, yielding the drafts in append order.
    #[must_use]
    pub fn into_entries(self) -> Vec<ActivityDraft> {
        self.entries
    }
}

/// Windows a newest-first listing down to the `cap` most recent entries and
/// reverses them to chronological order for display.
///
/// Older entries are dropped from the summary only; the ledger keeps them.
#[must_use]
pub fn chronological_window(newest_first: &[ActivityEntry], cap: usize) -> Vec<ActivityEntry> {
    let mut window: Vec<ActivityEntry> = newest_first.iter().take(cap).cloned().collect();
    window.reverse();
    window
}
