//! Author-capability check for task record mutation.
//!
//! Authorization is a pure comparison between the identity recorded at
//! creation and the identity attributed to the current operation, so it
//! can be tested without any storage in play.

use super::AuthorId;

/// Returns whether `caller` holds the author capability over a record
/// whose stored author is `stored`.
#[must_use]
pub fn is_author(stored: AuthorId, caller: AuthorId) -> bool {
    stored == caller
}
