//! In-process todo store, used where a database file is not wanted.

use super::{StoreError, TodoStore};
use crate::domain::{NewTodo, Todo, TodoId};
use async_trait::async_trait;
use tokio::sync::RwLock;

#[derive(Debug, Default)]
struct Inner {
    todos: Vec<Todo>,
    last_id: i64,
}

/// Todo store that keeps everything in memory for the process lifetime.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TodoStore for MemoryStore {
    async fn create(&self, todo: NewTodo) -> Result<Todo, StoreError> {
        let mut inner = self.inner.write().await;
        // ids keep counting past deletions
        inner.last_id += 1;
        let todo = todo.into_todo(TodoId::new(inner.last_id));
        inner.todos.push(todo.clone());
        Ok(todo)
    }

    async fn list(&self) -> Result<Vec<Todo>, StoreError> {
        Ok(self.inner.read().await.todos.clone())
    }

    async fn get_by_id(&self, id: TodoId) -> Result<Todo, StoreError> {
        self.inner
            .read()
            .await
            .todos
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    async fn update(&self, id: TodoId, todo: NewTodo) -> Result<Todo, StoreError> {
        let mut inner = self.inner.write().await;
        let slot = inner
            .todos
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(StoreError::NotFound(id))?;
        *slot = todo.into_todo(id);
        Ok(slot.clone())
    }

    async fn delete_by_id(&self, id: TodoId) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        let pos = inner
            .todos
            .iter()
            .position(|t| t.id == id)
            .ok_or(StoreError::NotFound(id))?;
        inner.todos.remove(pos);
        Ok(())
    }
}
