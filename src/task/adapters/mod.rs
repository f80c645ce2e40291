//! Adapter implementations for task list ports and hosting.

pub mod sequence;
pub mod shared;

pub use sequence::SequentialTaskIdGenerator;
pub use shared::SharedTaskList;
