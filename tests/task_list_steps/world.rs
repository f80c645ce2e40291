//! Shared world state for task list BDD scenarios.

use rstest::fixture;
use tasklist::task::{
    domain::TaskId,
    services::TaskListStore,
    view::{TaskListView, ViewConfig},
};

/// Scenario world for task list behaviour tests.
pub struct TaskListWorld {
    /// The store under test.
    pub store: TaskListStore,
    /// Display configuration used for view assertions.
    pub config: ViewConfig,
}

impl TaskListWorld {
    /// Creates a world around an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            store: TaskListStore::new(),
            config: ViewConfig::default(),
        }
    }

    /// Finds the identifier of the first task with the given title.
    pub fn task_id(&self, title: &str) -> Result<TaskId, eyre::Report> {
        self.store
            .tasks()
            .iter()
            .find(|task| task.title().as_str() == title)
            .map(|task| task.id())
            .ok_or_else(|| eyre::eyre!("no task titled {title:?} in scenario world"))
    }

    /// Builds the current view model.
    #[must_use]
    pub fn view(&self) -> TaskListView {
        TaskListView::from_snapshot(&self.store.snapshot(), &self.config)
    }
}

impl Default for TaskListWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskListWorld {
    TaskListWorld::default()
}
