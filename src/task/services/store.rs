//! The task list store: sole owner of the tasks and the draft input.

use mockable::{Clock, DefaultClock};

use crate::task::{
    adapters::SequentialTaskIdGenerator,
    domain::{Task, TaskCounts, TaskId, TaskListSnapshot, TaskTitle},
    ports::TaskIdGenerator,
};

/// A single user intent applied to a [`TaskListStore`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskListAction {
    /// Replace the draft input verbatim.
    SetPendingInput(String),
    /// Commit the draft input as a new task.
    AddTask,
    /// Flip the completed flag of a task.
    ToggleTask(TaskId),
    /// Remove a task.
    DeleteTask(TaskId),
    /// Remove every completed task.
    ClearCompleted,
}

/// Owns the ordered task collection and the pending input text.
///
/// Every operation either applies its effect or leaves the store untouched;
/// none of them fails. Return values only report what happened.
///
/// # Examples
///
/// ```
/// use tasklist::task::services::TaskListStore;
///
/// let mut store = TaskListStore::new();
/// store.set_pending_input("Buy milk");
/// let id = store.add_task().expect("non-blank input creates a task");
///
/// assert_eq!(store.toggle_task(id), Some(true));
/// assert_eq!(store.derived_counts().completed, 1);
/// assert_eq!(store.clear_completed(), 1);
/// assert!(store.tasks().is_empty());
/// ```
#[derive(Debug)]
pub struct TaskListStore<G = SequentialTaskIdGenerator, C = DefaultClock>
where
    G: TaskIdGenerator,
    C: Clock,
{
    tasks: Vec<Task>,
    pending_input: String,
    id_generator: G,
    clock: C,
}

impl TaskListStore {
    /// Creates an empty store with a counter-based id generator and the
    /// system clock.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_parts(SequentialTaskIdGenerator::new(), DefaultClock)
    }
}

impl Default for TaskListStore {
    fn default() -> Self {
        Self::new()
    }
}

impl<G, C> TaskListStore<G, C>
where
    G: TaskIdGenerator,
    C: Clock,
{
    /// Creates an empty store from explicit collaborators.
    #[must_use]
    pub const fn with_parts(id_generator: G, clock: C) -> Self {
        Self {
            tasks: Vec::new(),
            pending_input: String::new(),
            id_generator,
            clock,
        }
    }

    /// Returns the tasks in insertion order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns the draft input text.
    #[must_use]
    pub fn pending_input(&self) -> &str {
        &self.pending_input
    }

    /// Looks up a task by identifier.
    #[must_use]
    pub fn find(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    /// Captures an owned copy of the current state.
    #[must_use]
    pub fn snapshot(&self) -> TaskListSnapshot {
        TaskListSnapshot {
            tasks: self.tasks.clone(),
            pending_input: self.pending_input.clone(),
        }
    }

    /// Counts completed and total tasks.
    #[must_use]
    pub fn derived_counts(&self) -> TaskCounts {
        TaskCounts::from_tasks(&self.tasks)
    }

    /// Replaces the draft input. The text is stored as given, untrimmed.
    pub fn set_pending_input(&mut self, text: impl Into<String>) {
        self.pending_input = text.into();
    }

    /// Commits the draft input as a new task at the end of the list.
    ///
    /// Returns the new task's identifier, or `None` when nothing was added.
    /// Blank input is ignored and left in place. The draft is also kept
    /// when the id generator cannot issue a fresh identifier.
    pub fn add_task(&mut self) -> Option<TaskId> {
        let Ok(title) = TaskTitle::new(&self.pending_input) else {
            tracing::trace!("ignoring add with blank input");
            return None;
        };

        let id = match self.id_generator.next_id() {
            Ok(id) => id,
            Err(err) => {
                tracing::warn!(error = %err, "could not allocate task identifier");
                return None;
            }
        };
        if self.find(id).is_some() {
            tracing::warn!(task_id = %id, "id generator reissued a live identifier");
            return None;
        }

        self.tasks.push(Task::new(id, title, &self.clock));
        self.pending_input.clear();
        tracing::debug!(task_id = %id, total = self.tasks.len(), "task added");
        Some(id)
    }

    /// Flips the completed flag of the task with the given identifier.
    ///
    /// Returns the new flag, or `None` if no such task exists.
    pub fn toggle_task(&mut self, id: TaskId) -> Option<bool> {
        let Some(task) = self.tasks.iter_mut().find(|task| task.id() == id) else {
            tracing::trace!(task_id = %id, "ignoring toggle of unknown task");
            return None;
        };
        let completed = task.toggle();
        tracing::debug!(task_id = %id, completed, "task toggled");
        Some(completed)
    }

    /// Removes the task with the given identifier, keeping the order of the
    /// remaining tasks.
    ///
    /// Returns the removed task, or `None` if no such task exists.
    pub fn delete_task(&mut self, id: TaskId) -> Option<Task> {
        let Some(position) = self.tasks.iter().position(|task| task.id() == id) else {
            tracing::trace!(task_id = %id, "ignoring delete of unknown task");
            return None;
        };
        let removed = self.tasks.remove(position);
        tracing::debug!(task_id = %id, total = self.tasks.len(), "task deleted");
        Some(removed)
    }

    /// Removes every completed task, keeping the order of the rest.
    ///
    /// Returns how many tasks were removed.
    pub fn clear_completed(&mut self) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|task| !task.is_completed());
        let removed = before.saturating_sub(self.tasks.len());
        if removed > 0 {
            tracing::debug!(removed, total = self.tasks.len(), "completed tasks cleared");
        }
        removed
    }

    /// Applies one action and returns the resulting state.
    pub fn dispatch(&mut self, action: TaskListAction) -> TaskListSnapshot {
        match action {
            TaskListAction::SetPendingInput(text) => self.set_pending_input(text),
            TaskListAction::AddTask => {
                self.add_task();
            }
            TaskListAction::ToggleTask(id) => {
                self.toggle_task(id);
            }
            TaskListAction::DeleteTask(id) => {
                self.delete_task(id);
            }
            TaskListAction::ClearCompleted => {
                self.clear_completed();
            }
        }
        self.snapshot()
    }
}
