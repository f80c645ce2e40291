//! Task entity and values derived from a list of tasks.

use super::{TaskId, TaskTitle};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A single to-do item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: TaskTitle,
    completed: bool,
    created_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new, not yet completed task.
    #[must_use]
    pub fn new(id: TaskId, title: TaskTitle, clock: &impl Clock) -> Self {
        Self {
            id,
            title,
            completed: false,
            created_at: clock.utc(),
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns whether the task has been marked complete.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.completed
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Flips the completed flag and returns the new value.
    pub(crate) const fn toggle(&mut self) -> bool {
        self.completed = !self.completed;
        self.completed
    }
}

/// Completion counts derived from a task list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskCounts {
    /// Number of tasks marked complete.
    pub completed: usize,
    /// Number of tasks held.
    pub total: usize,
}

impl TaskCounts {
    /// Tallies the given tasks.
    #[must_use]
    pub fn from_tasks(tasks: &[Task]) -> Self {
        let completed = tasks.iter().filter(|task| task.is_completed()).count();
        Self {
            completed,
            total: tasks.len(),
        }
    }

    /// Number of tasks not yet completed.
    #[must_use]
    pub const fn active(self) -> usize {
        self.total.saturating_sub(self.completed)
    }

    /// Returns `true` when at least one task is completed.
    #[must_use]
    pub const fn has_completed(self) -> bool {
        self.completed > 0
    }
}
