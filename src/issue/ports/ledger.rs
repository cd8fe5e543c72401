//! Ledger port for append-only activity recording.

use crate::issue::domain::{ActivityEntry, IssueId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for activity ledger operations.
pub type ActivityLedgerResult<T> = Result<T, ActivityLedgerError>;

/// Append-only activity record contract.
///
/// Entries are immutable once appended; implementations must preserve
/// insertion order among entries sharing a timestamp.
#[async_trait]
pub trait ActivityLedger: Send + Sync {
    /// Appends one entry to the owning issue's record.
    ///
    /// # Errors
    ///
    /// Returns [`ActivityLedgerError::UnknownIssue`] when the owning issue
    /// does not exist; appends never fail otherwise.
    async fn append(&self, entry: &ActivityEntry) -> ActivityLedgerResult<()>;

    /// Lists all entries for an issue, newest first.
    async fn list_for_issue(&self, issue_id: IssueId) -> ActivityLedgerResult<Vec<ActivityEntry>>;
}

/// Errors returned by activity ledger implementations.
#[derive(Debug, Clone, Error)]
pub enum ActivityLedgerError {
    /// The owning issue does not exist.
    #[error("unknown issue for activity append: {0}")]
    UnknownIssue(IssueId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl ActivityLedgerError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
