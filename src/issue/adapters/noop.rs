//! No-op change listener for callers without a refresh surface.

use async_trait::async_trait;

use crate::issue::{domain::IssueId, ports::ChangeListener};

/// Change listener that drops every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopChangeListener;

#[async_trait]
impl ChangeListener for NoopChangeListener {
    async fn issue_changed(&self, _issue_id: IssueId) {}
}
