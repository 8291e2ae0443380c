//! Shapes of data crossing the HTTP boundary.

use serde::{Deserialize, Serialize};

use crate::domain::{NewTodo, Todo};

/// Body accepted by create and update.
///
/// `title` and `status` are required; a missing or `null` `description`
/// stays absent rather than becoming an empty string.
#[derive(Debug, Clone, Deserialize)]
pub struct TodoInput {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub status: String,
}

impl From<TodoInput> for NewTodo {
    fn from(input: TodoInput) -> Self {
        NewTodo {
            title: input.title,
            description: input.description,
            status: input.status,
        }
    }
}

/// A todo as returned to clients. `description` is always present, possibly `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TodoResponse {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub status: String,
}

impl From<Todo> for TodoResponse {
    fn from(todo: Todo) -> Self {
        TodoResponse {
            id: todo.id.as_i64(),
            title: todo.title,
            description: todo.description,
            status: todo.status,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailResponse {
    pub detail: String,
}

impl DetailResponse {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}
