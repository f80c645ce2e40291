//! Detached copies of task list state for presentation layers.

use super::{Task, TaskCounts};
use serde::{Deserialize, Serialize};

/// Owned copy of the task list and draft input at one point in time.
///
/// A snapshot does not observe later changes to the store it came from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskListSnapshot {
    /// Tasks in insertion order.
    pub tasks: Vec<Task>,
    /// Draft text for the next task.
    pub pending_input: String,
}

impl TaskListSnapshot {
    /// Derives completion counts from the captured tasks.
    #[must_use]
    pub fn counts(&self) -> TaskCounts {
        TaskCounts::from_tasks(&self.tasks)
    }

    /// Returns `true` when no tasks were captured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
