//! View model for presentation layers.
//!
//! Turns a [`TaskListSnapshot`](crate::task::domain::TaskListSnapshot) into
//! the text and rows a screen shows. Drawing and styling are left to the
//! host.

mod config;
mod model;

pub use config::ViewConfig;
pub use model::{TaskListView, TaskRow, clear_completed_label, counter_label};
