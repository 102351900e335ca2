//! In-memory repository implementation
//!
//! Reference `TodoRepository` backed by a `HashMap` behind a
//! `tokio::sync::RwLock`. Every operation takes the lock once for its whole
//! body, so the check-then-act pairs in `update` and `delete` are serialized
//! against concurrent callers.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use todo_core::{Todo, TodoId};

use crate::error::{Result, StorageError};
use crate::repository::TodoRepository;

/// In-memory todo store
#[derive(Debug, Default)]
pub struct InMemoryTodoRepository {
    todos: RwLock<HashMap<TodoId, Todo>>,
}

impl InMemoryTodoRepository {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored todos
    pub async fn len(&self) -> usize {
        self.todos.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.todos.read().await.is_empty()
    }
}

#[async_trait]
impl TodoRepository for InMemoryTodoRepository {
    async fn find_all(&self) -> Result<Vec<Todo>> {
        let todos = self.todos.read().await;

        let mut result: Vec<Todo> = todos.values().cloned().collect();
        result.sort_by(|a, b| {
            b.created_at()
                .cmp(&a.created_at())
                .then_with(|| a.id().cmp(b.id()))
        });

        Ok(result)
    }

    async fn find_by_id(&self, id: &TodoId) -> Result<Option<Todo>> {
        let todos = self.todos.read().await;
        Ok(todos.get(id).cloned())
    }

    async fn create(&self, todo: Todo) -> Result<Todo> {
        let mut todos = self.todos.write().await;

        debug!(todo_id = %todo.id(), "storing todo");
        todos.insert(todo.id().clone(), todo.clone());

        Ok(todo)
    }

    async fn update(&self, todo: Todo) -> Result<Todo> {
        let mut todos = self.todos.write().await;

        if !todos.contains_key(todo.id()) {
            return Err(StorageError::NotFound(todo.id().clone()));
        }

        debug!(todo_id = %todo.id(), "replacing stored todo");
        todos.insert(todo.id().clone(), todo.clone());

        Ok(todo)
    }

    async fn delete(&self, id: &TodoId) -> Result<()> {
        let mut todos = self.todos.write().await;

        match todos.remove(id) {
            Some(_) => {
                debug!(todo_id = %id, "deleted todo");
                Ok(())
            }
            None => Err(StorageError::NotFound(id.clone())),
        }
    }
}
