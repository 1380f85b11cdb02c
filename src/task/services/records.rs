//! Service layer for task record creation, retrieval, and updates.

use crate::task::{
    domain::{AuthorId, Task, TaskDomainError, TaskId, TaskText},
    ports::{TaskFilter, TaskRepository, TaskRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a task record.
///
/// The identifier is supplied by the caller, so callers can reference the
/// record before the create call resolves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    task_id: TaskId,
    author: AuthorId,
    text: String,
}

impl CreateTaskRequest {
    /// Creates a request with the caller-supplied identifier, author, and
    /// raw text.
    #[must_use]
    pub fn new(task_id: TaskId, author: AuthorId, text: impl Into<String>) -> Self {
        Self {
            task_id,
            author,
            text: text.into(),
        }
    }
}

/// Request payload for updating a task record's completion flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateTaskRequest {
    task_id: TaskId,
    caller: AuthorId,
    is_done: bool,
}

impl UpdateTaskRequest {
    /// Creates a request to set the completion flag on behalf of `caller`.
    #[must_use]
    pub const fn new(task_id: TaskId, caller: AuthorId, is_done: bool) -> Self {
        Self {
            task_id,
            caller,
            is_done,
        }
    }
}

/// Service-level errors for task record operations.
#[derive(Debug, Error)]
pub enum TaskRecordError {
    /// No record exists for the requested identifier.
    #[error("no task record for identifier: {0}")]
    UnknownTask(TaskId),
    /// Domain validation or authorisation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// Result type for task record service operations.
pub type TaskRecordResult<T> = Result<T, TaskRecordError>;

/// Task record orchestration service.
pub struct TaskRecordService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> Clone for TaskRecordService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<R, C> TaskRecordService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task record service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Creates and persists a new task record.
    ///
    /// Returns the stored record so callers observe the timestamps and
    /// completion flag the store now holds.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRecordError::Domain`] when the text fails validation,
    /// or [`TaskRecordError::Repository`] when the identifier is already
    /// taken or persistence fails.
    pub async fn create(&self, request: CreateTaskRequest) -> TaskRecordResult<Task> {
        let text = TaskText::new(request.text)?;
        let task = Task::new(request.task_id, request.author, text, &*self.clock);
        self.repository.store(&task).await?;
        Ok(task)
    }

    /// Retrieves a task record by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRecordError::UnknownTask`] when no record exists for
    /// the identifier, or [`TaskRecordError::Repository`] when the lookup
    /// fails.
    pub async fn fetch(&self, task_id: TaskId) -> TaskRecordResult<Task> {
        self.repository
            .find_by_id(task_id)
            .await?
            .ok_or(TaskRecordError::UnknownTask(task_id))
    }

    /// Sets the completion flag of an existing record on behalf of the
    /// calling author, then persists the change.
    ///
    /// Returns the updated record. The flag is written even when the
    /// requested value matches the stored one, so `updated_at` always
    /// reflects the latest successful update call.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRecordError::UnknownTask`] when no record exists for
    /// the identifier, [`TaskRecordError::Domain`] when the caller is not
    /// the record's author, or [`TaskRecordError::Repository`] when
    /// persistence fails.
    pub async fn update(&self, request: UpdateTaskRequest) -> TaskRecordResult<Task> {
        let mut task = self.fetch(request.task_id).await?;
        task.set_done(request.caller, request.is_done, &*self.clock)?;
        self.repository.update(&task).await?;
        Ok(task)
    }

    /// Marks an existing record as done on behalf of the calling author.
    ///
    /// Completion is a terminal marker rather than a removal; the record
    /// stays fetchable and listable afterwards.
    ///
    /// # Errors
    ///
    /// Propagates the same errors as [`TaskRecordService::update`].
    pub async fn close(&self, task_id: TaskId, caller: AuthorId) -> TaskRecordResult<Task> {
        self.update(UpdateTaskRequest::new(task_id, caller, true))
            .await
    }

    /// Lists task records matching the filter.
    ///
    /// Record order is unspecified.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRecordError::Repository`] when the listing fails.
    pub async fn list(&self, filter: TaskFilter) -> TaskRecordResult<Vec<Task>> {
        let tasks = self.repository.list(filter).await?;
        Ok(tasks)
    }
}
