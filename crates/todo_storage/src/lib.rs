//! todo_storage - Repository abstraction and in-memory store for todos
//!
//! This crate defines the storage boundary of the todo system:
//! - `TodoRepository`: the async trait service layers depend on
//! - `InMemoryTodoRepository`: the reference implementation backed by a
//!   `tokio::sync::RwLock<HashMap>`
//! - `StorageError`: storage-level failures (currently just `NotFound`)

pub mod error;
pub mod memory;
pub mod repository;

// Re-export commonly used types
pub use error::{Result, StorageError};
pub use memory::InMemoryTodoRepository;
pub use repository::TodoRepository;
