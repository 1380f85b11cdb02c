//! Validated task text.

use super::TaskDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Task text validated against the record length bounds.
///
/// The bounds are counted in Unicode scalar values, not bytes, and are
/// enforced only at construction. Records reconstructed from persistence
/// deserialize transparently without re-validation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskText(String);

impl TaskText {
    /// Smallest accepted number of characters.
    pub const MIN_CHARS: usize = 1;

    /// Largest accepted number of characters.
    pub const MAX_CHARS: usize = 400;

    /// Creates validated task text.
    ///
    /// The value is stored exactly as given; no trimming or normalization
    /// is applied.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyText`] when the value has no
    /// characters and [`TaskDomainError::TextTooLong`] when it exceeds
    /// [`Self::MAX_CHARS`] characters.
    pub fn new(value: impl Into<String>) -> Result<Self, TaskDomainError> {
        let raw = value.into();
        let length = raw.chars().count();
        if length < Self::MIN_CHARS {
            return Err(TaskDomainError::EmptyText);
        }
        if length > Self::MAX_CHARS {
            return Err(TaskDomainError::TextTooLong {
                length,
                max: Self::MAX_CHARS,
            });
        }
        Ok(Self(raw))
    }

    /// Returns the text as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the number of characters in the text.
    #[must_use]
    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }
}

impl AsRef<str> for TaskText {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TaskText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
