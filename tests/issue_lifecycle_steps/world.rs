//! Shared world state for issue lifecycle BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use upkeep::issue::{
    adapters::{NoopChangeListener, memory::InMemoryIssueStore, memory::StaticActorDirectory},
    domain::{Actor, ActorId, Issue, Role},
    services::{IssueLifecycleError, IssueLifecycleService},
};

/// Service type used by the BDD world.
pub type TestIssueService = IssueLifecycleService<
    InMemoryIssueStore,
    InMemoryIssueStore,
    StaticActorDirectory,
    NoopChangeListener,
    DefaultClock,
>;

/// Scenario world for issue lifecycle behaviour tests.
pub struct IssueLifecycleWorld {
    pub service: TestIssueService,
    pub reporter: Actor,
    pub ops_manager: Actor,
    pub technician: Actor,
    pub other_technician: Actor,
    pub issue: Option<Issue>,
    pub last_result: Option<Result<Issue, IssueLifecycleError>>,
}

impl IssueLifecycleWorld {
    /// Creates a world with a fresh in-memory store and known staff.
    #[must_use]
    pub fn new() -> Self {
        let store = Arc::new(InMemoryIssueStore::new());
        let directory = StaticActorDirectory::new()
            .with_name(ActorId::new("tech-42"), "Sam Nguyen")
            .with_name(ActorId::new("tech-7"), "Priya Patel");
        let service = IssueLifecycleService::new(
            Arc::clone(&store),
            store,
            Arc::new(directory),
            Arc::new(NoopChangeListener),
            Arc::new(DefaultClock),
        );

        Self {
            service,
            reporter: Actor::new(ActorId::new("fo-3"), Role::FrontOffice),
            ops_manager: Actor::new(ActorId::new("ops-1"), Role::OperationsManagement),
            technician: Actor::new(ActorId::new("tech-42"), Role::Technicians),
            other_technician: Actor::new(ActorId::new("tech-7"), Role::Technicians),
            issue: None,
            last_result: None,
        }
    }
}

impl Default for IssueLifecycleWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> IssueLifecycleWorld {
    IssueLifecycleWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
