//! Port contracts for the issue lifecycle core.
//!
//! Ports define infrastructure-agnostic interfaces used by lifecycle
//! services: persistence, activity recording, identity resolution, and
//! post-commit notification.

pub mod directory;
pub mod ledger;
pub mod listener;
pub mod repository;

pub use directory::ActorDirectory;
pub use ledger::{ActivityLedger, ActivityLedgerError, ActivityLedgerResult};
pub use listener::ChangeListener;
pub use repository::{IssueRepository, IssueRepositoryError, IssueRepositoryResult};

#[cfg(test)]
pub use directory::MockActorDirectory;
