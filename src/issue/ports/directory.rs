//! Identity port for best-effort display-name resolution.

use crate::issue::domain::ActorId;
use async_trait::async_trait;

/// Display-name lookup against the identity collaborator.
///
/// Resolution is best-effort: `None` means the caller should fall back to
/// the raw identifier. Lookup failures must never abort a transition, so
/// the contract has no error channel.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ActorDirectory: Send + Sync {
    /// Resolves a display name for the given actor, if known.
    async fn display_name(&self, id: &ActorId) -> Option<String>;
}
