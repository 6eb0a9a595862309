//! Shared types and pure domain rules for the volunteer hub.
//!
//! Nothing in this crate performs I/O; the storage adapter and HTTP layer
//! build on top of it.

pub mod collections;
pub mod error;
pub mod project_status;
pub mod threads;
pub mod types;
