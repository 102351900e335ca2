//! Todo repository trait

use async_trait::async_trait;
use todo_core::{Todo, TodoId};

use crate::error::Result;

/// Storage boundary for todos.
///
/// Implementations own the canonical copies; callers receive clones and must
/// re-fetch to observe later writes. The trait is async so implementations
/// backed by real I/O stay expressible behind the same interface.
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// List every stored todo, newest first (descending `created_at`,
    /// ties broken by ascending id)
    async fn find_all(&self) -> Result<Vec<Todo>>;

    /// Look up a todo by id; `None` when absent
    async fn find_by_id(&self, id: &TodoId) -> Result<Option<Todo>>;

    /// Store a todo keyed by its id, overwriting any existing entry,
    /// and return the stored entity
    async fn create(&self, todo: Todo) -> Result<Todo>;

    /// Replace an existing todo wholesale; fails with `NotFound` when the
    /// id is absent
    async fn update(&self, todo: Todo) -> Result<Todo>;

    /// Remove a todo by id; fails with `NotFound` when absent
    async fn delete(&self, id: &TodoId) -> Result<()>;
}
