//! Task aggregate root.

use super::{AuthorId, TaskDomainError, TaskId, TaskText, authorization};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Task aggregate root.
///
/// `id`, `author`, `text`, and `created_at` are fixed at creation;
/// `is_done` is the only mutable field and `updated_at` tracks the latest
/// successful mutation. `updated_at >= created_at` holds for the lifetime
/// of the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    author: AuthorId,
    text: TaskText,
    is_done: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted task record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted author identity.
    pub author: AuthorId,
    /// Persisted task text.
    pub text: TaskText,
    /// Persisted completion flag.
    pub is_done: bool,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest mutation timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new task record for the given author.
    ///
    /// Captures a single timestamp for both `created_at` and
    /// `updated_at`; the record starts not done.
    #[must_use]
    pub fn new(id: TaskId, author: AuthorId, text: TaskText, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            id,
            author,
            text,
            is_done: false,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Reconstructs a task record from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            author: data.author,
            text: data.text,
            is_done: data.is_done,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the author identity recorded at creation.
    #[must_use]
    pub const fn author(&self) -> AuthorId {
        self.author
    }

    /// Returns the task text.
    #[must_use]
    pub const fn text(&self) -> &TaskText {
        &self.text
    }

    /// Returns whether the task has been marked done.
    #[must_use]
    pub const fn is_done(&self) -> bool {
        self.is_done
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest mutation timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Sets the completion flag on behalf of `caller`.
    ///
    /// Refreshes `updated_at` on success. The flag is written
    /// unconditionally, so setting the current value again still counts
    /// as a successful update and still refreshes the timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::NotTaskAuthor`] when `caller` does not
    /// match the recorded author; the record is left unchanged.
    pub fn set_done(
        &mut self,
        caller: AuthorId,
        done: bool,
        clock: &impl Clock,
    ) -> Result<(), TaskDomainError> {
        if !authorization::is_author(self.author, caller) {
            return Err(TaskDomainError::NotTaskAuthor {
                task_id: self.id,
                caller,
            });
        }
        self.is_done = done;
        self.touch(clock);
        Ok(())
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}
