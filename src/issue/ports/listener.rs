//! Notification port for post-commit change fan-out.

use crate::issue::domain::IssueId;
use async_trait::async_trait;

/// Listener informed after each successfully committed mutation.
///
/// Fire-and-forget: the lifecycle core does not depend on delivery
/// guarantees, so notification carries no error channel and runs after the
/// issue update and ledger appends have been stored.
#[async_trait]
pub trait ChangeListener: Send + Sync {
    /// Signals that the given issue (or its ledger) changed.
    async fn issue_changed(&self, issue_id: IssueId);
}
