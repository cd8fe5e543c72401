//! Service layer orchestrating issue lifecycle transitions over the ports.

use crate::issue::{
    domain::{
        ActivityEntry, Actor, ActorId, Department, Issue, IssueDomainError, IssueId, IssueIntake,
        Priority, ResolvedAssignee, SUMMARY_WINDOW, TransitionOutcome, UNASSIGNED_LABEL,
        chronological_window, format_duration,
    },
    ports::{
        ActivityLedger, ActivityLedgerError, ActorDirectory, ChangeListener, IssueRepository,
        IssueRepositoryError,
    },
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for reporting a new issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportIssueRequest {
    title: String,
    description: String,
    area: String,
    department: Department,
    priority: Priority,
    assignee: Option<ActorId>,
}

impl ReportIssueRequest {
    /// Creates a request with required intake fields and normal priority.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        area: impl Into<String>,
        department: Department,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            area: area.into(),
            department,
            priority: Priority::Normal,
            assignee: None,
        }
    }

    /// Sets the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Sets an initial assignee.
    #[must_use]
    pub fn with_assignee(mut self, assignee: ActorId) -> Self {
        self.assignee = Some(assignee);
        self
    }
}

/// Service-level errors for issue lifecycle operations.
#[derive(Debug, Error)]
pub enum IssueLifecycleError {
    /// Permission, transition, or validation failure in the engine.
    #[error(transparent)]
    Domain(#[from] IssueDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] IssueRepositoryError),
    /// Ledger append or listing failed.
    #[error(transparent)]
    Ledger(#[from] ActivityLedgerError),
}

/// Result type for issue lifecycle service operations.
pub type IssueLifecycleResult<T> = Result<T, IssueLifecycleError>;

/// Issue lifecycle orchestration service.
///
/// Reads the current issue through the repository, applies the engine
/// operation, then writes the issue update and the ledger appends before
/// notifying the change listener. Atomicity of that unit belongs to the
/// storage collaborator.
#[derive(Clone)]
pub struct IssueLifecycleService<R, L, D, N, C>
where
    R: IssueRepository,
    L: ActivityLedger,
    D: ActorDirectory,
    N: ChangeListener,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    ledger: Arc<L>,
    directory: Arc<D>,
    listener: Arc<N>,
    clock: Arc<C>,
}

impl<R, L, D, N, C> IssueLifecycleService<R, L, D, N, C>
where
    R: IssueRepository,
    L: ActivityLedger,
    D: ActorDirectory,
    N: ChangeListener,
    C: Clock + Send + Sync,
{
    /// Creates a new issue lifecycle service.
    #[must_use]
    pub const fn new(
        repository: Arc<R>,
        ledger: Arc<L>,
        directory: Arc<D>,
        listener: Arc<N>,
        clock: Arc<C>,
    ) -> Self {
        Self {
            repository,
            ledger,
            directory,
            listener,
            clock,
        }
    }

    /// Reports a new issue on behalf of `reporter`.
    ///
    /// # Errors
    ///
    /// Returns [`IssueLifecycleError`] when intake validation fails or the
    /// repository rejects persistence.
    pub async fn report(
        &self,
        request: ReportIssueRequest,
        reporter: &Actor,
    ) -> IssueLifecycleResult<Issue> {
        let assignee = self.resolve_optional(request.assignee).await;
        let intake = IssueIntake {
            title: request.title,
            description: request.description,
            area: request.area,
            department: request.department,
            priority: request.priority,
            assignee,
        };

        let id = self.repository.allocate_id().await?;
        let (issue, outcome) = Issue::open(id, intake, reporter, &*self.clock)?;
        self.repository.insert(&issue).await?;
        self.record(issue.id(), reporter, outcome).await?;
        self.listener.issue_changed(issue.id()).await;
        Ok(issue)
    }

    /// Changes or clears an issue's assignee.
    ///
    /// # Errors
    ///
    /// Returns [`IssueLifecycleError`] when the issue does not exist or the
    /// actor's role may not assign.
    pub async fn assign(
        &self,
        issue_id: IssueId,
        actor: &Actor,
        new_assignee: Option<ActorId>,
    ) -> IssueLifecycleResult<Issue> {
        let mut issue = self.fetch(issue_id).await?;
        let previous_label = self.slot_label(issue.assignee().cloned()).await;
        let resolved = self.resolve_optional(new_assignee).await;

        let outcome = issue.assign(actor, resolved, &previous_label, &*self.clock)?;
        self.commit(&issue, actor, outcome).await?;
        Ok(issue)
    }

    /// Moves an open issue into progress.
    ///
    /// # Errors
    ///
    /// Returns [`IssueLifecycleError`] when the issue does not exist, is not
    /// open, or the actor lacks permission.
    pub async fn start_work(&self, issue_id: IssueId, actor: &Actor) -> IssueLifecycleResult<Issue> {
        let mut issue = self.fetch(issue_id).await?;
        let outcome = issue.start_work(actor, &*self.clock)?;
        self.commit(&issue, actor, outcome).await?;
        Ok(issue)
    }

    /// Resolves an issue.
    ///
    /// # Errors
    ///
    /// Returns [`IssueLifecycleError`] when the issue does not exist, is
    /// already closed, or the actor lacks permission.
    pub async fn close(&self, issue_id: IssueId, actor: &Actor) -> IssueLifecycleResult<Issue> {
        let mut issue = self.fetch(issue_id).await?;
        let outcome = issue.close(actor, &*self.clock)?;
        self.commit(&issue, actor, outcome).await?;
        Ok(issue)
    }

    /// Retrieves an issue by identifier.
    ///
    /// Returns `Ok(None)` when no such issue exists.
    ///
    /// # Errors
    ///
    /// Returns [`IssueLifecycleError::Repository`] when persistence lookup
    /// fails.
    pub async fn find(&self, issue_id: IssueId) -> IssueLifecycleResult<Option<Issue>> {
        Ok(self.repository.find_by_id(issue_id).await?)
    }

    /// Lists the full activity record for an issue, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`IssueLifecycleError::Ledger`] when the listing fails.
    pub async fn activity(&self, issue_id: IssueId) -> IssueLifecycleResult<Vec<ActivityEntry>> {
        Ok(self.ledger.list_for_issue(issue_id).await?)
    }

    /// Returns the summary view: the three most recent entries, reversed to
    /// chronological order. Older entries stay in the ledger.
    ///
    /// # Errors
    ///
    /// Returns [`IssueLifecycleError::Ledger`] when the listing fails.
    pub async fn recent_activity(
        &self,
        issue_id: IssueId,
    ) -> IssueLifecycleResult<Vec<ActivityEntry>> {
        let newest_first = self.ledger.list_for_issue(issue_id).await?;
        Ok(chronological_window(&newest_first, SUMMARY_WINDOW))
    }

    /// Formats the display duration for an issue: elapsed time while in
    /// progress, total turnaround once closed, `None` while open.
    #[must_use]
    pub fn duration_display(&self, issue: &Issue) -> Option<String> {
        issue
            .elapsed(&*self.clock)
            .or_else(|| issue.turnaround())
            .map(format_duration)
    }

    async fn fetch(&self, issue_id: IssueId) -> IssueLifecycleResult<Issue> {
        let found = self.repository.find_by_id(issue_id).await?;
        found.ok_or_else(|| IssueRepositoryError::NotFound(issue_id).into())
    }

    /// Writes the issue update and ledger appends, then notifies.
    async fn commit(
        &self,
        issue: &Issue,
        actor: &Actor,
        outcome: TransitionOutcome,
    ) -> IssueLifecycleResult<()> {
        self.repository.update(issue).await?;
        self.record(issue.id(), actor, outcome).await?;
        self.listener.issue_changed(issue.id()).await;
        Ok(())
    }

    async fn record(
        &self,
        issue_id: IssueId,
        actor: &Actor,
        outcome: TransitionOutcome,
    ) -> IssueLifecycleResult<()> {
        let occurred_at = outcome.occurred_at();
        for draft in outcome.into_entries() {
            let entry = draft.into_entry(issue_id, actor.id().clone(), occurred_at);
            self.ledger.append(&entry).await?;
        }
        Ok(())
    }

    /// Resolves a display name, falling back to the raw identifier; lookup
    /// failure never aborts the operation.
    async fn resolve_label(&self, id: &ActorId) -> String {
        self.directory
            .display_name(id)
            .await
            .unwrap_or_else(|| id.as_str().to_owned())
    }

    async fn resolve_optional(&self, id: Option<ActorId>) -> Option<ResolvedAssignee> {
        let id = id?;
        let display = self.resolve_label(&id).await;
        Some(ResolvedAssignee::new(id, display))
    }

    async fn slot_label(&self, id: Option<ActorId>) -> String {
        if let Some(id) = id {
            return self.resolve_label(&id).await;
        }
        UNASSIGNED_LABEL.to_owned()
    }
}
