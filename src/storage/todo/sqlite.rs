//! SQLite-backed store implementation over an sqlx connection pool.

use crate::domain::item::{validate_name, NewTodoItem, TodoItem};
use crate::infra::config;
use crate::storage::todo::{StoreError, TodoStore};
use async_trait::async_trait;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions, SqliteRow};
use sqlx::Row;

/// A persistent to-do store backed by a SQLite connection pool.
///
/// `AUTOINCREMENT` keeps the ids of deleted rows from being handed out
/// again.
#[derive(Clone)]
pub struct SqliteTodoStore {
    pool: SqlitePool,
}

impl SqliteTodoStore {
    /// Connects using `DATABASE_URL` and prepares the schema.
    pub async fn new() -> anyhow::Result<Self> {
        dotenv::dotenv().ok();
        let database_url = config::database_url();
        let pool = SqlitePoolOptions::new()
            .max_connections(config::db_max_connections())
            .connect(&database_url)
            .await?;
        Self::new_with_pool(pool).await
    }

    /// Wraps an existing pool and prepares the schema.
    pub async fn new_with_pool(pool: SqlitePool) -> anyhow::Result<Self> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS todo_items (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                is_complete BOOLEAN NOT NULL DEFAULT FALSE
            )",
        )
        .execute(&pool)
        .await?;
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

fn row_to_item(row: &SqliteRow) -> Result<TodoItem, sqlx::Error> {
    Ok(TodoItem {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        is_complete: row.try_get("is_complete")?,
    })
}

#[async_trait]
impl TodoStore for SqliteTodoStore {
    async fn add(&self, new: NewTodoItem) -> Result<TodoItem, StoreError> {
        validate_name(&new.name).map_err(StoreError::Validation)?;
        let row = sqlx::query("INSERT INTO todo_items (name, is_complete) VALUES ($1, $2) RETURNING id")
            .bind(&new.name)
            .bind(new.is_complete)
            .fetch_one(&self.pool)
            .await?;
        let id: i64 = row.try_get("id")?;
        Ok(TodoItem {
            id,
            name: new.name,
            is_complete: new.is_complete,
        })
    }

    async fn get(&self, id: i64) -> Result<TodoItem, StoreError> {
        let row = sqlx::query("SELECT id, name, is_complete FROM todo_items WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        match row {
            Some(row) => Ok(row_to_item(&row)?),
            None => Err(StoreError::NotFound),
        }
    }

    async fn replace(&self, id: i64, item: TodoItem) -> Result<(), StoreError> {
        if id != item.id {
            return Err(StoreError::Validation(format!(
                "id mismatch: path addresses {} but body carries {}",
                id, item.id
            )));
        }
        validate_name(&item.name).map_err(StoreError::Validation)?;
        let result = sqlx::query("UPDATE todo_items SET name = $1, is_complete = $2 WHERE id = $3")
            .bind(&item.name)
            .bind(item.is_complete)
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }

    async fn remove(&self, id: i64) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM todo_items WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }

    async fn count(&self) -> Result<i64, StoreError> {
        let row = sqlx::query("SELECT COUNT(*) AS count FROM todo_items")
            .fetch_one(&self.pool)
            .await?;
        Ok(row.try_get("count")?)
    }
}
