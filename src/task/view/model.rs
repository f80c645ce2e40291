//! Display-ready view of a task list snapshot.

use serde::{Deserialize, Serialize};

use super::ViewConfig;
use crate::task::domain::{Task, TaskCounts, TaskId, TaskListSnapshot};

/// One rendered line of the task list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRow {
    /// Identifier to pass back to toggle and delete actions.
    pub id: TaskId,
    /// Task title.
    pub title: String,
    /// Whether the row is drawn as completed.
    pub completed: bool,
}

impl From<&Task> for TaskRow {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id(),
            title: task.title().as_str().to_owned(),
            completed: task.is_completed(),
        }
    }
}

/// Everything a presentation layer needs to draw the screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskListView {
    /// Screen heading.
    pub heading: String,
    /// Progress line, e.g. `1 / 3 completed`.
    pub counter_label: String,
    /// Placeholder for the input field.
    pub input_placeholder: String,
    /// Current draft input.
    pub input_value: String,
    /// Rows in store order.
    pub rows: Vec<TaskRow>,
    /// Shown only when there are no rows.
    pub empty_message: Option<String>,
    /// Label of the clear button; `None` hides the button.
    pub clear_completed_label: Option<String>,
}

impl TaskListView {
    /// Builds the view for a snapshot.
    #[must_use]
    pub fn from_snapshot(snapshot: &TaskListSnapshot, config: &ViewConfig) -> Self {
        let counts = snapshot.counts();
        Self {
            heading: config.heading.clone(),
            counter_label: counter_label(counts),
            input_placeholder: config.input_placeholder.clone(),
            input_value: snapshot.pending_input.clone(),
            rows: snapshot.tasks.iter().map(TaskRow::from).collect(),
            empty_message: snapshot
                .is_empty()
                .then(|| config.empty_message.clone()),
            clear_completed_label: clear_completed_label(counts),
        }
    }
}

/// Formats the progress line shown under the heading.
#[must_use]
pub fn counter_label(counts: TaskCounts) -> String {
    format!("{} / {} completed", counts.completed, counts.total)
}

/// Formats the clear button label, or `None` when nothing is completed.
#[must_use]
pub fn clear_completed_label(counts: TaskCounts) -> Option<String> {
    if !counts.has_completed() {
        return None;
    }
    let suffix = if counts.completed > 1 { "s" } else { "" };
    Some(format!("Clear {} Completed Task{suffix}", counts.completed))
}
