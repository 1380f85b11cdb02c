//! Repository port for task record persistence and lookup.

use crate::task::domain::{AuthorId, Task, TaskId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Filter applied when listing task records.
///
/// The default filter matches every record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskFilter {
    author: Option<AuthorId>,
}

impl TaskFilter {
    /// Matches every task record.
    #[must_use]
    pub const fn all() -> Self {
        Self { author: None }
    }

    /// Matches only records created by the given author.
    #[must_use]
    pub const fn by_author(author: AuthorId) -> Self {
        Self {
            author: Some(author),
        }
    }

    /// Returns the author restriction, if any.
    #[must_use]
    pub const fn author(&self) -> Option<AuthorId> {
        self.author
    }
}

/// Task record persistence contract.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Stores a new task record.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::IdentifierTaken`] when the identifier
    /// already names a record; the existing record is left untouched.
    async fn store(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Persists changes to an existing task record (completion flag,
    /// timestamps).
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the record does not
    /// exist.
    async fn update(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Finds a task record by identifier.
    ///
    /// Returns `None` when the record does not exist.
    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Returns every task record matching the filter.
    async fn list(&self, filter: TaskFilter) -> TaskRepositoryResult<Vec<Task>>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// A task record with the same identifier already exists.
    #[error("task identifier already taken: {0}")]
    IdentifierTaken(TaskId),

    /// The task record was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
