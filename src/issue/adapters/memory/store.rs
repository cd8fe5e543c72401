//! In-memory issue store backing lifecycle tests and embedding.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::issue::{
    domain::{ActivityEntry, Issue, IssueId},
    ports::{
        ActivityLedger, ActivityLedgerError, ActivityLedgerResult, IssueRepository,
        IssueRepositoryError, IssueRepositoryResult,
    },
};

/// Thread-safe in-memory issue repository and activity ledger.
///
/// One store implements both ports so ledger appends can verify the owning
/// issue exists, mirroring the foreign-key constraint a database would
/// enforce.
#[derive(Debug, Clone, Default)]
pub struct InMemoryIssueStore {
    state: Arc<RwLock<InMemoryIssueState>>,
}

#[derive(Debug)]
struct InMemoryIssueState {
    next_id: i64,
    issues: HashMap<IssueId, Issue>,
    // Sequence numbers break timestamp ties in insertion order.
    entries: HashMap<IssueId, Vec<(u64, ActivityEntry)>>,
    next_seq: u64,
}

impl Default for InMemoryIssueState {
    fn default() -> Self {
        Self {
            next_id: 1,
            issues: HashMap::new(),
            entries: HashMap::new(),
            next_seq: 0,
        }
    }
}

impl InMemoryIssueStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl IssueRepository for InMemoryIssueStore {
    async fn allocate_id(&self) -> IssueRepositoryResult<IssueId> {
        let mut state = self.state.write().map_err(|err| {
            IssueRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let id = IssueId::new(state.next_id);
        state.next_id += 1;
        Ok(id)
    }

    async fn insert(&self, issue: &Issue) -> IssueRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            IssueRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        if state.issues.contains_key(&issue.id()) {
            return Err(IssueRepositoryError::DuplicateIssue(issue.id()));
        }
        state.issues.insert(issue.id(), issue.clone());
        Ok(())
    }

    async fn update(&self, issue: &Issue) -> IssueRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            IssueRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        if !state.issues.contains_key(&issue.id()) {
            return Err(IssueRepositoryError::NotFound(issue.id()));
        }
        state.issues.insert(issue.id(), issue.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: IssueId) -> IssueRepositoryResult<Option<Issue>> {
        let state = self.state.read().map_err(|err| {
            IssueRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.issues.get(&id).cloned())
    }
}

#[async_trait]
impl ActivityLedger for InMemoryIssueStore {
    async fn append(&self, entry: &ActivityEntry) -> ActivityLedgerResult<()> {
        let mut state = self.state.write().map_err(|err| {
            ActivityLedgerError::persistence(std::io::Error::other(err.to_string()))
        })?;
        if !state.issues.contains_key(&entry.issue_id()) {
            return Err(ActivityLedgerError::UnknownIssue(entry.issue_id()));
        }
        let seq = state.next_seq;
        state.next_seq += 1;
        state
            .entries
            .entry(entry.issue_id())
            .or_default()
            .push((seq, entry.clone()));
        Ok(())
    }

    async fn list_for_issue(&self, issue_id: IssueId) -> ActivityLedgerResult<Vec<ActivityEntry>> {
        let state = self.state.read().map_err(|err| {
            ActivityLedgerError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let mut rows: Vec<(u64, ActivityEntry)> =
            state.entries.get(&issue_id).cloned().unwrap_or_default();
        rows.sort_by(|a, b| {
            b.1.recorded_at()
                .cmp(&a.1.recorded_at())
                .then_with(|| b.0.cmp(&a.0))
        });
        Ok(rows.into_iter().map(|(_, entry)| entry).collect())
    }
}
