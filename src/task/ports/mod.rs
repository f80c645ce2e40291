//! Port contracts for the task list.
//!
//! Ports define the seams the store is assembled from, so tests can swap
//! in deterministic or failing collaborators.

pub mod id_generator;

pub use id_generator::{TaskIdGenerator, TaskIdGeneratorError, TaskIdGeneratorResult};
