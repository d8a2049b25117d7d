//! Persistence backends for todo items.
//!
//! # Design
//! Handlers depend on the [`Storage`] trait only, so backends swap freely:
//! [`MemoryStorage`] for development and tests, [`PostgresStorage`] for
//! deployments. Cancellation rides the calling future — dropping a request
//! task drops the storage future with it, which aborts any query still in
//! flight.

pub mod memory;
pub mod postgres;

pub use memory::{MemoryStorage, MemoryStore};
pub use postgres::PostgresStorage;

use async_trait::async_trait;

use crate::error::StorageError;
use crate::models::{Todo, TodoRequest};

/// The capability set any backing store must implement.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Returns every stored todo. An empty store is an empty list, never
    /// an error. Ordering is the backend's natural one: insertion order
    /// in memory, scan order in postgres.
    async fn get_todos(&self) -> Result<Vec<Todo>, StorageError>;

    /// Fails with [`StorageError::NotFound`] if no todo has `id`.
    async fn get_todo_by_id(&self, id: i64) -> Result<Todo, StorageError>;

    /// Assigns a fresh id and returns the stored todo with
    /// `completed = false`, `enabled = true`, and both timestamps set to
    /// the moment of creation.
    async fn add_todo(&self, request: TodoRequest) -> Result<Todo, StorageError>;

    /// Flips the enabled flag. A todo already in the requested state is
    /// treated the same as a missing one and fails with
    /// [`StorageError::EnableConflict`].
    async fn change_enable_status(&self, id: i64, enabled: bool) -> Result<Todo, StorageError>;

    /// Replaces name and description and refreshes `updated_at`.
    /// `completed` and `enabled` are left untouched.
    async fn update_todo(&self, id: i64, request: TodoRequest) -> Result<Todo, StorageError>;

    /// Removes the todo permanently.
    async fn delete_todo(&self, id: i64) -> Result<(), StorageError>;
}
