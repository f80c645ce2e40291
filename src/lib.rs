//! Tasklist: state management for a single-screen to-do list.
//!
//! This crate holds the part of a to-do application that is independent of
//! any UI toolkit: an in-memory, insertion-ordered list of tasks plus the
//! draft text for the next one. Users add short text tasks, mark them
//! complete, delete them and clear completed items in bulk.
//!
//! # Architecture
//!
//! The store is an explicitly owned value with no global state. Hosts
//! either own it directly or share it through
//! [`SharedTaskList`](task::adapters::SharedTaskList) when input handling
//! and rendering run on different threads.
//!
//! # Modules
//!
//! - [`task`]: Task domain, store and view model

pub mod task;
