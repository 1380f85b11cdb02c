//! Domain model for task record management.
//!
//! The task domain models record creation under caller-supplied
//! identifiers, author-capability checks for mutation, and completion
//! updates while keeping all infrastructure concerns outside of the
//! domain boundary.

pub mod authorization;
mod error;
mod ids;
mod task;
mod text;

pub use error::TaskDomainError;
pub use ids::{AuthorId, TaskId};
pub use task::{PersistedTaskData, Task};
pub use text::TaskText;
