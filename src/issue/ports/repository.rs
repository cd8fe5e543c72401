//! Repository port for issue persistence and lookup.

use crate::issue::domain::{Issue, IssueId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for issue repository operations.
pub type IssueRepositoryResult<T> = Result<T, IssueRepositoryError>;

/// Issue persistence contract.
///
/// The storage collaborator owns atomicity of "update issue + append ledger
/// entries" and serialization of concurrent transitions on one issue; the
/// engine's precondition checks must run against the freshest read.
#[async_trait]
pub trait IssueRepository: Send + Sync {
    /// Allocates the next stable integer identifier.
    ///
    /// # Errors
    ///
    /// Returns [`IssueRepositoryError::Persistence`] when the backing store
    /// cannot produce an identifier.
    async fn allocate_id(&self) -> IssueRepositoryResult<IssueId>;

    /// Stores a newly reported issue.
    ///
    /// # Errors
    ///
    /// Returns [`IssueRepositoryError::DuplicateIssue`] when the identifier
    /// already exists.
    async fn insert(&self, issue: &Issue) -> IssueRepositoryResult<()>;

    /// Persists changes to an existing issue (status, assignee, timestamps).
    ///
    /// # Errors
    ///
    /// Returns [`IssueRepositoryError::NotFound`] when the issue does not
    /// exist.
    async fn update(&self, issue: &Issue) -> IssueRepositoryResult<()>;

    /// Finds an issue by identifier.
    ///
    /// Returns `None` when the issue does not exist. Closed issues remain
    /// retrievable forever.
    async fn find_by_id(&self, id: IssueId) -> IssueRepositoryResult<Option<Issue>>;
}

/// Errors returned by issue repository implementations.
#[derive(Debug, Clone, Error)]
pub enum IssueRepositoryError {
    /// An issue with the same identifier already exists.
    #[error("duplicate issue identifier: {0}")]
    DuplicateIssue(IssueId),

    /// The issue was not found.
    #[error("issue not found: {0}")]
    NotFound(IssueId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl IssueRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
