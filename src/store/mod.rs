//! Storage abstraction for todos.

use crate::domain::{NewTodo, Todo, TodoId};
use async_trait::async_trait;
use std::fmt;
use thiserror::Error;

pub mod memory;

pub use memory::MemoryStore;

/// Owner of the todo collection.
///
/// Handlers only ever reach todos through this trait, so the SQLite
/// [`Repository`](crate::db::Repository) and [`MemoryStore`] are interchangeable.
#[async_trait]
pub trait TodoStore: Send + Sync + fmt::Debug {
    /// Persist a new todo and return it with its assigned id.
    async fn create(&self, todo: NewTodo) -> Result<Todo, StoreError>;

    /// All todos in creation order.
    async fn list(&self) -> Result<Vec<Todo>, StoreError>;

    /// Fetch one todo.
    ///
    /// # Errors
    /// `StoreError::NotFound` if no todo has this id.
    async fn get_by_id(&self, id: TodoId) -> Result<Todo, StoreError>;

    /// Overwrite title, description and status of an existing todo.
    ///
    /// # Errors
    /// `StoreError::NotFound` if no todo has this id.
    async fn update(&self, id: TodoId, todo: NewTodo) -> Result<Todo, StoreError>;

    /// Permanently remove a todo.
    ///
    /// # Errors
    /// `StoreError::NotFound` if no todo has this id.
    async fn delete_by_id(&self, id: TodoId) -> Result<(), StoreError>;

    /// Check that the backing storage is reachable.
    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("todo {0} not found")]
    NotFound(TodoId),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}
