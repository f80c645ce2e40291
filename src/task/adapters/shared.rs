//! Thread-safe handle for hosts that render and handle input on different
//! threads.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use mockable::{Clock, DefaultClock};

use crate::task::{
    adapters::SequentialTaskIdGenerator,
    domain::{TaskCounts, TaskListSnapshot},
    ports::TaskIdGenerator,
    services::{TaskListAction, TaskListStore},
};

/// Cloneable handle that serializes access to one [`TaskListStore`].
///
/// All mutations go through [`SharedTaskList::dispatch`] and run under the
/// write lock, so readers only ever observe state between actions.
#[derive(Debug)]
pub struct SharedTaskList<G = SequentialTaskIdGenerator, C = DefaultClock>
where
    G: TaskIdGenerator,
    C: Clock + Send + Sync,
{
    store: Arc<RwLock<TaskListStore<G, C>>>,
}

impl<G, C> Clone for SharedTaskList<G, C>
where
    G: TaskIdGenerator,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl SharedTaskList {
    /// Creates a handle over a new, empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::from_store(TaskListStore::new())
    }
}

impl Default for SharedTaskList {
    fn default() -> Self {
        Self::new()
    }
}

impl<G, C> SharedTaskList<G, C>
where
    G: TaskIdGenerator,
    C: Clock + Send + Sync,
{
    /// Wraps an existing store.
    #[must_use]
    pub fn from_store(store: TaskListStore<G, C>) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }

    /// Applies one action and returns the state it produced.
    pub fn dispatch(&self, action: TaskListAction) -> TaskListSnapshot {
        self.write().dispatch(action)
    }

    /// Captures the current state.
    #[must_use]
    pub fn snapshot(&self) -> TaskListSnapshot {
        self.read().snapshot()
    }

    /// Counts completed and total tasks.
    #[must_use]
    pub fn derived_counts(&self) -> TaskCounts {
        self.read().derived_counts()
    }

    // Store operations never leave partial state, so a poisoned lock still
    // guards a consistent store.
    fn read(&self) -> RwLockReadGuard<'_, TaskListStore<G, C>> {
        self.store.read().unwrap_or_else(|err| {
            tracing::warn!("recovering task list from poisoned lock");
            PoisonError::into_inner(err)
        })
    }

    fn write(&self) -> RwLockWriteGuard<'_, TaskListStore<G, C>> {
        self.store.write().unwrap_or_else(|err| {
            tracing::warn!("recovering task list from poisoned lock");
            PoisonError::into_inner(err)
        })
    }
}
