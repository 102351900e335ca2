//! Storage error types

use thiserror::Error;
use todo_core::TodoId;

/// Errors raised by repository implementations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// The referenced todo does not exist in the store
    #[error("Todo not found: {0}")]
    NotFound(TodoId),
}

/// Result type for storage operations
pub type Result<T> = std::result::Result<T, StorageError>;
