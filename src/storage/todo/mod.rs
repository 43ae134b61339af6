//! Durable persistence of to-do item rows.

mod sqlite;

pub use sqlite::SqliteTodoStore;

use crate::domain::item::{NewTodoItem, TodoItem};
use async_trait::async_trait;
use thiserror::Error;

/// Errors surfaced by the storage adapter.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The payload was rejected before any write reached the table.
    #[error("{0}")]
    Validation(String),
    /// No row matches the given id.
    #[error("no item with the given id")]
    NotFound,
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// Row-level CRUD over the to-do item table.
///
/// The handler layer only sees this trait, so the backing store can be
/// swapped without touching it.
#[async_trait]
pub trait TodoStore: Send + Sync {
    /// Inserts a new row and returns the stored item with its assigned id.
    async fn add(&self, new: NewTodoItem) -> Result<TodoItem, StoreError>;

    /// Fetches one row by id.
    async fn get(&self, id: i64) -> Result<TodoItem, StoreError>;

    /// Overwrites all mutable fields of row `id`. Requires `id == item.id`;
    /// the mismatch is rejected before any write.
    async fn replace(&self, id: i64, item: TodoItem) -> Result<(), StoreError>;

    /// Deletes row `id`.
    async fn remove(&self, id: i64) -> Result<(), StoreError>;

    /// Number of rows in the table. Used by the startup seed step.
    async fn count(&self) -> Result<i64, StoreError>;
}

/// Inserts the default `Item1` row when the table is empty.
///
/// Invoked once from `main` at process start. Deleting every item later in
/// the session leaves the table empty until the next restart runs this
/// again.
pub async fn seed_if_empty(store: &dyn TodoStore) -> Result<Option<TodoItem>, StoreError> {
    if store.count().await? > 0 {
        return Ok(None);
    }
    let seeded = store
        .add(NewTodoItem {
            name: "Item1".to_string(),
            is_complete: false,
        })
        .await?;
    Ok(Some(seeded))
}
