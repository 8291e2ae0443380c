use axum::extract::State;
use axum::Json;
use tracing::info;

use super::extract::{AppJson, AppPath};
use super::schemas::{DetailResponse, TodoInput, TodoResponse};
use super::AppState;
use crate::domain::TodoId;
use crate::error::AppError;

pub async fn create_todo(
    State(state): State<AppState>,
    AppJson(input): AppJson<TodoInput>,
) -> Result<Json<TodoResponse>, AppError> {
    let todo = state.store.create(input.into()).await?;
    info!(id = %todo.id, "todo created");
    Ok(Json(todo.into()))
}

pub async fn list_todos(
    State(state): State<AppState>,
) -> Result<Json<Vec<TodoResponse>>, AppError> {
    let todos = state.store.list().await?;
    Ok(Json(todos.into_iter().map(TodoResponse::from).collect()))
}

pub async fn get_todo(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<TodoResponse>, AppError> {
    let todo = state.store.get_by_id(TodoId::new(id)).await?;
    Ok(Json(todo.into()))
}

pub async fn update_todo(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
    AppJson(input): AppJson<TodoInput>,
) -> Result<Json<TodoResponse>, AppError> {
    let todo = state.store.update(TodoId::new(id), input.into()).await?;
    info!(id = %todo.id, "todo updated");
    Ok(Json(todo.into()))
}

pub async fn delete_todo(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<DetailResponse>, AppError> {
    state.store.delete_by_id(TodoId::new(id)).await?;
    info!(id, "todo deleted");
    Ok(Json(DetailResponse::new("Todo deleted")))
}
