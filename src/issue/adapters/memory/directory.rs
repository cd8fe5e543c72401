//! In-memory actor directory for tests and embedding.

use async_trait::async_trait;
use std::collections::HashMap;

use crate::issue::{domain::ActorId, ports::ActorDirectory};

/// Fixed-map actor directory.
///
/// Actors absent from the map resolve to `None`, exercising the raw-id
/// fallback path in callers.
#[derive(Debug, Clone, Default)]
pub struct StaticActorDirectory {
    names: HashMap<ActorId, String>,
}

impl StaticActorDirectory {
    /// Creates an empty directory where every lookup misses.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a display name.
    #[must_use]
    pub fn with_name(mut self, id: ActorId, name: impl Into<String>) -> Self {
        self.names.insert(id, name.into());
        self
    }
}

#[async_trait]
impl ActorDirectory for StaticActorDirectory {
    async fn display_name(&self, id: &ActorId) -> Option<String> {
        self.names.get(id).cloned()
    }
}
