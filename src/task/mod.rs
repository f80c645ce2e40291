//! Task list state management.
//!
//! A single [`TaskListStore`](services::TaskListStore) owns the ordered
//! tasks and the draft input. Presentation layers call its operations in
//! response to user actions and re-read a snapshot afterwards. The module
//! follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - The store itself in [`services`]
//! - Display derivations in [`view`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
pub mod view;
