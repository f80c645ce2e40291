//! Display text configuration for the task list view.

use serde::{Deserialize, Serialize};

/// Static strings shown by the task list screen.
///
/// Missing fields fall back to their defaults when deserialized, so a host
/// can override only the strings it cares about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Screen heading.
    pub heading: String,
    /// Placeholder shown in the empty input field.
    pub input_placeholder: String,
    /// Message shown when the list holds no tasks.
    pub empty_message: String,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            heading: "Task Manager".to_owned(),
            input_placeholder: "Add a new task...".to_owned(),
            empty_message: "No tasks yet. Add one to get started!".to_owned(),
        }
    }
}

impl ViewConfig {
    /// Sets the screen heading.
    #[must_use]
    pub fn with_heading(mut self, heading: impl Into<String>) -> Self {
        self.heading = heading.into();
        self
    }

    /// Sets the input placeholder.
    #[must_use]
    pub fn with_input_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.input_placeholder = placeholder.into();
        self
    }

    /// Sets the empty-state message.
    #[must_use]
    pub fn with_empty_message(mut self, message: impl Into<String>) -> Self {
        self.empty_message = message.into();
        self
    }
}
