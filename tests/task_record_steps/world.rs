//! Shared world state for task record BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use taskbook::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{AuthorId, Task, TaskId},
    services::{TaskRecordError, TaskRecordService},
};

/// Service type used by the BDD world.
pub type TestRecordService = TaskRecordService<InMemoryTaskRepository, DefaultClock>;

/// Scenario world for task record behaviour tests.
pub struct RecordWorld {
    pub service: TestRecordService,
    pub author: AuthorId,
    pub pending_task_id: Option<TaskId>,
    pub pending_text: Option<String>,
    pub created_task: Option<Task>,
    pub last_create_result: Option<Result<Task, TaskRecordError>>,
    pub last_update_result: Option<Result<Task, TaskRecordError>>,
    pub last_fetch_result: Option<Result<Task, TaskRecordError>>,
}

impl RecordWorld {
    /// Creates a world with empty pending scenario state.
    #[must_use]
    pub fn new() -> Self {
        let service = TaskRecordService::new(
            Arc::new(InMemoryTaskRepository::new()),
            Arc::new(DefaultClock),
        );
        Self {
            service,
            author: AuthorId::new(),
            pending_task_id: None,
            pending_text: None,
            created_task: None,
            last_create_result: None,
            last_update_result: None,
            last_fetch_result: None,
        }
    }
}

impl Default for RecordWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> RecordWorld {
    RecordWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
