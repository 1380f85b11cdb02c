//! Error types for task domain validation and authorization.

use super::{AuthorId, TaskId};
use thiserror::Error;

/// Errors returned while constructing or mutating domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task text has no characters.
    #[error("task text must contain at least one character")]
    EmptyText,

    /// The task text exceeds the record length bound.
    #[error("task text is {length} characters, exceeds limit of {max}")]
    TextTooLong {
        /// The number of characters in the rejected text.
        length: usize,
        /// The largest accepted number of characters.
        max: usize,
    },

    /// The caller does not hold the author capability for the record.
    #[error("caller {caller} is not the author of task {task_id}")]
    NotTaskAuthor {
        /// The identifier of the record the caller tried to mutate.
        task_id: TaskId,
        /// The identity that attempted the mutation.
        caller: AuthorId,
    },
}
