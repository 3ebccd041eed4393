//! SQLite-backed task store.
//!
//! Writes run inside explicit transactions: commit on success, and any error
//! before the commit drops the transaction, which rolls it back.

use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};

use crate::{Task, TaskStore, TaskStoreError, TaskStoreResult};

/// Maximum number of database connections in the pool.
const MAX_CONNECTIONS: u32 = 5;

/// The single table this application persists.
const SCHEMA_SQL: &str = "CREATE TABLE IF NOT EXISTS todo_items (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    task TEXT NOT NULL
)";

/// SQLite-backed task store over a connection pool.
///
/// Handlers borrow a pooled connection for the duration of one operation;
/// the connection is returned to the pool on every exit path.
#[derive(Debug, Clone)]
pub struct SqliteTaskStore {
    pool: Pool<Sqlite>,
}

impl SqliteTaskStore {
    /// Opens (or creates) the database file at `db_path` and ensures the
    /// `todo_items` table exists.
    ///
    /// Safe to call on every process start: an existing table is never
    /// recreated or truncated. When table setup fails after a successful
    /// connect, the pool is closed before the error is surfaced.
    pub async fn connect(db_path: &Path) -> TaskStoreResult<Self> {
        // Ensure parent directory exists
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).ok();
        }

        let db_exists = db_path.exists();

        let options = SqliteConnectOptions::new()
            .filename(db_path)
            .create_if_missing(true)
            .busy_timeout(Duration::from_secs(5));

        let pool = SqlitePoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .connect_with(options)
            .await
            .map_err(|source| TaskStoreError::open(db_path, source))?;

        if db_exists {
            tracing::info!(path = %db_path.display(), "Connected to existing database");
        } else {
            tracing::info!(path = %db_path.display(), "Created new database");
        }

        let store = Self { pool };
        if let Err(error) = store.ensure_schema().await {
            store.pool.close().await;
            return Err(error);
        }

        Ok(store)
    }

    /// Returns a reference to the connection pool.
    pub fn pool(&self) -> &Pool<Sqlite> {
        &self.pool
    }

    /// Creates the `todo_items` table when it is not already present.
    ///
    /// The existence check runs first; creation only happens when the check
    /// finds nothing.
    async fn ensure_schema(&self) -> TaskStoreResult<()> {
        let table = sqlx::query(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name = 'todo_items'",
        )
        .fetch_optional(&self.pool)
        .await
        .map_err(TaskStoreError::Schema)?;

        if table.is_none() {
            sqlx::query(SCHEMA_SQL)
                .execute(&self.pool)
                .await
                .map_err(TaskStoreError::Schema)?;
            tracing::info!("Created the todo_items table");
        }

        Ok(())
    }
}

#[async_trait]
impl TaskStore for SqliteTaskStore {
    async fn list_tasks(&self) -> TaskStoreResult<Vec<Task>> {
        let tasks = sqlx::query_as::<_, Task>("SELECT id, task FROM todo_items ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(tasks)
    }

    async fn get_task(&self, id: i64) -> TaskStoreResult<Option<Task>> {
        let task = sqlx::query_as::<_, Task>("SELECT id, task FROM todo_items WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(task)
    }

    async fn insert_task(&self, text: &str) -> TaskStoreResult<Task> {
        let mut tx = self.pool.begin().await?;

        let task =
            sqlx::query_as::<_, Task>("INSERT INTO todo_items (task) VALUES (?) RETURNING id, task")
                .bind(text)
                .fetch_one(&mut *tx)
                .await?;

        tx.commit().await?;
        Ok(task)
    }

    async fn update_task(&self, id: i64, text: &str) -> TaskStoreResult<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("UPDATE todo_items SET task = ? WHERE id = ?")
            .bind(text)
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(())
    }

    async fn delete_task(&self, id: i64) -> TaskStoreResult<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM todo_items WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(())
    }
}
