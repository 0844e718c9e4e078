//! Core domain model for todo.
//!
//! Tasks, the store that owns them, and the pure projection the screen
//! is derived from.

pub mod projection;
pub mod store;
pub mod task;

pub use projection::{project, Filter, Summary};
pub use store::{LogObserver, StoreEvent, StoreObserver, TaskStore};
pub use task::{Task, TaskId};
