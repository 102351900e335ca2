//! Todo Manager service

use std::sync::Arc;

use tracing::{debug, info};

use todo_core::{Todo, TodoId};
use todo_storage::{StorageError, TodoRepository};

use crate::error::Result;

/// Todo Manager - drives the todo use cases against an injected repository
pub struct TodoManager<R: TodoRepository> {
    repository: Arc<R>,
}

impl<R: TodoRepository> TodoManager<R> {
    /// Create a new TodoManager owning the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Access the underlying repository
    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Create and store a new pending todo.
    ///
    /// No title validation happens here: a blank-titled todo is stored and
    /// simply cannot be completed until renamed.
    pub async fn add_todo(&self, title: &str, description: &str) -> Result<Todo> {
        let todo = Todo::new(TodoId::generate(), title, description);
        let stored = self.repository.create(todo).await?;

        info!(todo_id = %stored.id(), title = %stored.title(), "added todo");
        Ok(stored)
    }

    /// List every todo, newest first
    pub async fn list_todos(&self) -> Result<Vec<Todo>> {
        Ok(self.repository.find_all().await?)
    }

    /// Fetch a single todo; `None` when absent
    pub async fn get_todo(&self, id: &TodoId) -> Result<Option<Todo>> {
        Ok(self.repository.find_by_id(id).await?)
    }

    /// Mark a todo completed and persist it
    pub async fn complete_todo(&self, id: &TodoId) -> Result<Todo> {
        let mut todo = self.require(id).await?;
        todo.complete()?;
        let stored = self.repository.update(todo).await?;

        debug!(todo_id = %id, "completed todo");
        Ok(stored)
    }

    /// Reopen a completed todo and persist it
    pub async fn uncomplete_todo(&self, id: &TodoId) -> Result<Todo> {
        let mut todo = self.require(id).await?;
        todo.uncomplete()?;
        let stored = self.repository.update(todo).await?;

        debug!(todo_id = %id, "reopened todo");
        Ok(stored)
    }

    /// Change a todo's title and persist it
    pub async fn rename_todo(&self, id: &TodoId, new_title: &str) -> Result<Todo> {
        let mut todo = self.require(id).await?;
        todo.update_title(new_title)?;
        let stored = self.repository.update(todo).await?;

        debug!(todo_id = %id, "renamed todo");
        Ok(stored)
    }

    /// Change a todo's description and persist it
    pub async fn update_description(&self, id: &TodoId, new_description: &str) -> Result<Todo> {
        let mut todo = self.require(id).await?;
        todo.update_description(new_description);
        let stored = self.repository.update(todo).await?;

        debug!(todo_id = %id, "updated todo description");
        Ok(stored)
    }

    /// Delete a todo from the store
    pub async fn remove_todo(&self, id: &TodoId) -> Result<()> {
        self.repository.delete(id).await?;

        info!(todo_id = %id, "removed todo");
        Ok(())
    }

    /// Fetch a todo, turning absence into `NotFound`
    async fn require(&self, id: &TodoId) -> Result<Todo> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| StorageError::NotFound(id.clone()).into())
    }
}
