//! Domain model for the task list.
//!
//! The domain holds the task entity and its validated values. It knows
//! nothing about how identifiers are produced or how state is shared.

mod error;
mod ids;
mod snapshot;
mod task;
mod title;

pub use error::TaskDomainError;
pub use ids::TaskId;
pub use snapshot::TaskListSnapshot;
pub use task::{Task, TaskCounts};
pub use title::TaskTitle;
