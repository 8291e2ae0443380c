pub mod api;
pub mod config;
pub mod db;
pub mod domain;
pub mod error;
pub mod store;

pub use config::Config;
pub use db::{init_db, Repository};
pub use domain::{NewTodo, Todo, TodoId};
pub use error::AppError;
pub use store::{MemoryStore, StoreError, TodoStore};
