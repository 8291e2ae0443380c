//! SQLite-backed todo repository.

use crate::domain::{NewTodo, Todo, TodoId};
use crate::store::{StoreError, TodoStore};
use async_trait::async_trait;
use sqlx::sqlite::{SqlitePool, SqliteRow};
use sqlx::Row;
use tracing::{debug, info};

/// Repository for the `todos` table.
///
/// Every call checks a connection out of the pool for the duration of a
/// single statement; the pool takes it back on success and on error alike.
#[derive(Debug, Clone)]
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Repository { pool }
    }

    /// Close the pool, waiting for checked-out connections to be returned.
    pub async fn close(&self) {
        self.pool.close().await;
        info!("Database pool closed");
    }
}

fn row_to_todo(row: &SqliteRow) -> Todo {
    Todo {
        id: TodoId::new(row.get("id")),
        title: row.get("title"),
        description: row.get("description"),
        status: row.get("status"),
    }
}

#[async_trait]
impl TodoStore for Repository {
    async fn create(&self, todo: NewTodo) -> Result<Todo, StoreError> {
        let row = sqlx::query(
            r#"
            INSERT INTO todos (title, description, status)
            VALUES (?, ?, ?)
            RETURNING id, title, description, status
            "#,
        )
        .bind(&todo.title)
        .bind(todo.description.as_deref())
        .bind(&todo.status)
        .fetch_one(&self.pool)
        .await?;

        let created = row_to_todo(&row);
        debug!(id = %created.id, "created todo");
        Ok(created)
    }

    async fn list(&self) -> Result<Vec<Todo>, StoreError> {
        let rows = sqlx::query(
            r#"
            SELECT id, title, description, status
            FROM todos
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(row_to_todo).collect())
    }

    async fn get_by_id(&self, id: TodoId) -> Result<Todo, StoreError> {
        let row = sqlx::query(
            r#"
            SELECT id, title, description, status
            FROM todos
            WHERE id = ?
            "#,
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref()
            .map(row_to_todo)
            .ok_or(StoreError::NotFound(id))
    }

    async fn update(&self, id: TodoId, todo: NewTodo) -> Result<Todo, StoreError> {
        let row = sqlx::query(
            r#"
            UPDATE todos
            SET title = ?, description = ?, status = ?
            WHERE id = ?
            RETURNING id, title, description, status
            "#,
        )
        .bind(&todo.title)
        .bind(todo.description.as_deref())
        .bind(&todo.status)
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await?;

        let updated = row
            .as_ref()
            .map(row_to_todo)
            .ok_or(StoreError::NotFound(id))?;
        debug!(id = %id, "updated todo");
        Ok(updated)
    }

    async fn delete_by_id(&self, id: TodoId) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM todos WHERE id = ?")
            .bind(id.as_i64())
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(id));
        }
        debug!(id = %id, "deleted todo");
        Ok(())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
