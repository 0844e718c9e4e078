pub mod config;
pub mod core;
pub mod error;
pub mod log;

// Decoupled game loop architecture
pub mod app;
pub mod render;
pub mod tea;
pub mod ui;

pub use crate::core::{Filter, Task, TaskId, TaskStore};
pub use error::{Error, Result};
