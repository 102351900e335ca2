//! todo_manager - Use-case layer for the todo system
//!
//! `TodoManager` drives the todo workflows (add, list, complete, rename,
//! remove) against any `TodoRepository` implementation. The repository is a
//! typed constructor parameter, so the full dependency graph is visible and
//! checked at compile time.

pub mod error;
pub mod manager;

// Re-export commonly used types
pub use error::{Result, TodoError};
pub use manager::TodoManager;
