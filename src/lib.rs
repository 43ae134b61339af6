pub mod domain;
pub mod infra;
pub mod storage;
pub mod transport;

// Convenience re-exports (keeps call-sites clean)
pub use domain::item::{NewTodoItem, TodoItem, MAX_NAME_LEN};
pub use storage::todo::{seed_if_empty, SqliteTodoStore, StoreError, TodoStore};
