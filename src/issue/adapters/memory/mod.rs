//! In-memory adapter implementations for tests and embedding.

mod directory;
mod store;

pub use directory::StaticActorDirectory;
pub use store::InMemoryIssueStore;
