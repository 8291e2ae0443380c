//! Database initialization and schema setup.

use sqlx::sqlite::{
    SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions, SqliteSynchronous,
};
use sqlx::Executor;
use std::path::Path;
use std::time::Duration;
use tracing::{info, warn};

const SCHEMA_SQL: &str = include_str!("schema.sql");

/// Open the SQLite database at `db_path`, creating the file, its parent
/// directory, and the `todos` table as needed.
///
/// # Errors
/// `sqlx::Error::Io` if the parent directory cannot be created, otherwise
/// whatever sqlx reports while connecting or applying the schema.
pub async fn init_db(db_path: &str, max_connections: u32) -> Result<SqlitePool, sqlx::Error> {
    if let Some(parent) = Path::new(db_path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| {
                warn!("Cannot create database directory {}: {}", parent.display(), e);
                sqlx::Error::Io(e)
            })?;
        }
    }

    let options = SqliteConnectOptions::new()
        .filename(db_path)
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .synchronous(SqliteSynchronous::Normal)
        .busy_timeout(Duration::from_secs(5));

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;

    apply_schema(&pool).await?;

    info!(max_connections, "Database ready at {}", db_path);
    Ok(pool)
}

/// Statements in `schema.sql` are all `IF NOT EXISTS`, so this is safe to repeat.
pub(crate) async fn apply_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    pool.execute(SCHEMA_SQL).await?;
    Ok(())
}
