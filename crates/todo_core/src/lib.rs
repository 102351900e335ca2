//! todo_core - Domain types and business rules for the todo system
//!
//! This crate provides the entity layer consumed by the storage and manager
//! crates:
//! - `todo` - the `Todo` entity and its `TodoStatus` state machine
//! - `id` - opaque `TodoId` identifiers
//! - `error` - the `DomainError` taxonomy raised by entity methods

pub mod error;
pub mod id;
pub mod todo;

// Re-export commonly used types
pub use error::{DomainError, DomainResult};
pub use id::TodoId;
pub use todo::{Todo, TodoStatus};
