//! Service-level error types

use thiserror::Error;
use todo_core::DomainError;
use todo_storage::StorageError;

/// Errors surfaced by todo service operations.
///
/// The service layer is the one place the lower layers meet, so this is the
/// only error that wraps; the source error is preserved intact either way.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TodoError {
    /// A validation or business rule failure from the entity
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// A failure from the repository
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Result type for service operations
pub type Result<T> = std::result::Result<T, TodoError>;
