//! Todo record and its identifier.

use serde::{Deserialize, Serialize};

/// Store-assigned identifier of a todo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(pub i64);

impl TodoId {
    /// Create a TodoId from a raw row id.
    pub fn new(id: i64) -> Self {
        TodoId(id)
    }

    /// Get the underlying row id.
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for TodoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A persisted todo.
///
/// `description` is `None` when the client never supplied one; it is never
/// collapsed to an empty string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
    pub description: Option<String>,
    pub status: String,
}

/// Field values for creating or overwriting a todo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodo {
    pub title: String,
    pub description: Option<String>,
    pub status: String,
}

impl NewTodo {
    pub fn new(
        title: impl Into<String>,
        description: Option<String>,
        status: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description,
            status: status.into(),
        }
    }

    /// Materialize this input as a stored record under `id`.
    pub fn into_todo(self, id: TodoId) -> Todo {
        Todo {
            id,
            title: self.title,
            description: self.description,
            status: self.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_todo_id_serializes_as_bare_integer() {
        let json = serde_json::to_value(TodoId::new(7)).unwrap();
        assert_eq!(json, serde_json::json!(7));
    }

    #[test]
    fn test_into_todo_keeps_absent_description() {
        let todo = NewTodo::new("Tarefa", None, "pending").into_todo(TodoId::new(3));
        assert_eq!(todo.id, TodoId::new(3));
        assert_eq!(todo.title, "Tarefa");
        assert_eq!(todo.description, None);
        assert_eq!(todo.status, "pending");
    }
}
