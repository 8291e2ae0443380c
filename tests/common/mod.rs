#![allow(dead_code)]

use axum::http::StatusCode;
use serde_json::Value;
use std::sync::Arc;
use tempfile::TempDir;
use todo_api::api::{self, AppState};
use todo_api::db::init_db;
use todo_api::{MemoryStore, Repository, TodoStore};
use tower::util::ServiceExt;

/// A router wired to a throwaway store. The temp dir, if any, lives as long as this.
pub struct TestApp {
    pub app: axum::Router,
    pub store: Arc<dyn TodoStore>,
    _temp: Option<TempDir>,
}

/// Router over a fresh SQLite file in its own temp dir.
pub async fn setup_sqlite_app() -> TestApp {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir
        .path()
        .join("test.db")
        .to_string_lossy()
        .to_string();
    let pool = init_db(&db_path, 1).await.expect("init_db failed");
    let store: Arc<dyn TodoStore> = Arc::new(Repository::new(pool));

    TestApp {
        app: api::create_router(AppState::new(store.clone())),
        store,
        _temp: Some(temp_dir),
    }
}

/// Router over an empty in-memory store.
pub fn setup_memory_app() -> TestApp {
    let store: Arc<dyn TodoStore> = Arc::new(MemoryStore::new());
    TestApp {
        app: api::create_router(AppState::new(store.clone())),
        store,
        _temp: None,
    }
}

impl TestApp {
    pub async fn request(&self, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = axum::http::Request::builder().method(method).uri(uri);
        let req = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(axum::body::Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(axum::body::Body::empty()).unwrap(),
        };
        self.send(req).await
    }

    pub async fn send(&self, req: axum::http::Request<axum::body::Body>) -> (StatusCode, Value) {
        let resp = self.app.clone().oneshot(req).await.unwrap();
        let status = resp.status();
        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = if body.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&body).unwrap()
        };
        (status, json)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.request("GET", uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.request("POST", uri, Some(body)).await
    }

    pub async fn put(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.request("PUT", uri, Some(body)).await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.request("DELETE", uri, None).await
    }

    /// POST a todo and return its assigned id.
    pub async fn create(&self, body: Value) -> i64 {
        let (status, json) = self.post("/todos/", body).await;
        assert_eq!(status, StatusCode::OK);
        json["id"].as_i64().expect("id missing from create response")
    }
}
