//! Identifier generation port.

use crate::task::domain::TaskId;
use thiserror::Error;

/// Result type for identifier generation.
pub type TaskIdGeneratorResult<T> = Result<T, TaskIdGeneratorError>;

/// Source of task identifiers.
///
/// Implementations must not issue the same identifier twice over their
/// lifetime.
pub trait TaskIdGenerator: Send + Sync {
    /// Issues the next identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskIdGeneratorError::Exhausted`] when no further unique
    /// identifier can be issued.
    fn next_id(&self) -> TaskIdGeneratorResult<TaskId>;
}

/// Errors returned by identifier generators.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskIdGeneratorError {
    /// The identifier space has been used up.
    #[error("task identifier space exhausted")]
    Exhausted,
}
