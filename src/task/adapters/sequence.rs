//! Monotonic counter identifier generator.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::task::{
    domain::TaskId,
    ports::{TaskIdGenerator, TaskIdGeneratorError, TaskIdGeneratorResult},
};

/// Issues strictly increasing identifiers starting from a fixed value.
#[derive(Debug)]
pub struct SequentialTaskIdGenerator {
    next: AtomicU64,
}

impl SequentialTaskIdGenerator {
    /// First identifier issued by [`SequentialTaskIdGenerator::new`].
    pub const FIRST_ID: u64 = 1;

    /// Creates a generator that starts at [`Self::FIRST_ID`].
    #[must_use]
    pub const fn new() -> Self {
        Self::starting_at(Self::FIRST_ID)
    }

    /// Creates a generator whose first identifier is `first`.
    ///
    /// `u64::MAX` is reserved as the exhaustion sentinel and is never issued.
    #[must_use]
    pub const fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first),
        }
    }
}

impl Default for SequentialTaskIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskIdGenerator for SequentialTaskIdGenerator {
    fn next_id(&self) -> TaskIdGeneratorResult<TaskId> {
        self.next
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |current| {
                current.checked_add(1)
            })
            .map(TaskId::from_raw)
            .map_err(|_| TaskIdGeneratorError::Exhausted)
    }
}
