//! In-memory backend: an ordered list plus an id counter.
//!
//! `MemoryStore` is a plain value with `&mut self` methods and no internal
//! locking — single-writer by construction, cheap to instantiate per test.
//! `MemoryStorage` wraps it in a `tokio::sync::RwLock` to make it safe to
//! share across concurrent request handlers.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::error::StorageError;
use crate::models::{Todo, TodoRequest};
use crate::storage::Storage;

/// Ordered todo list with linear scans by id.
#[derive(Debug, Default)]
pub struct MemoryStore {
    todos: Vec<Todo>,
    next_id: i64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the store with existing todos. The id counter continues from
    /// the seed length, so a `1..=n` seed keeps assigning unique ids.
    pub fn with_todos(todos: Vec<Todo>) -> Self {
        let next_id = todos.len() as i64;
        Self { todos, next_id }
    }

    pub fn get_todos(&self) -> Vec<Todo> {
        self.todos.clone()
    }

    pub fn get_todo_by_id(&self, id: i64) -> Result<Todo, StorageError> {
        self.todos
            .iter()
            .find(|todo| todo.id == id)
            .cloned()
            .ok_or(StorageError::NotFound(id))
    }

    pub fn add_todo(&mut self, request: TodoRequest) -> Todo {
        self.next_id += 1;
        let now = Utc::now();
        let todo = Todo {
            id: self.next_id,
            name: request.name,
            description: request.description,
            completed: false,
            created_at: now,
            updated_at: now,
            enabled: true,
        };
        self.todos.push(todo.clone());
        todo
    }

    pub fn change_enable_status(&mut self, id: i64, enabled: bool) -> Result<Todo, StorageError> {
        match self
            .todos
            .iter_mut()
            .find(|todo| todo.id == id && todo.enabled != enabled)
        {
            Some(todo) => {
                todo.enabled = enabled;
                todo.updated_at = Utc::now();
                Ok(todo.clone())
            }
            None => Err(StorageError::enable_conflict(id, enabled)),
        }
    }

    pub fn update_todo(&mut self, id: i64, request: TodoRequest) -> Result<Todo, StorageError> {
        let todo = self
            .todos
            .iter_mut()
            .find(|todo| todo.id == id)
            .ok_or(StorageError::NotFound(id))?;
        todo.name = request.name;
        todo.description = request.description;
        todo.updated_at = Utc::now();
        Ok(todo.clone())
    }

    /// Splices the matched element out, preserving the order of the rest.
    pub fn delete_todo(&mut self, id: i64) -> Result<(), StorageError> {
        let position = self
            .todos
            .iter()
            .position(|todo| todo.id == id)
            .ok_or(StorageError::NotFound(id))?;
        self.todos.remove(position);
        Ok(())
    }
}

/// [`Storage`] adapter sharing a [`MemoryStore`] across handlers. The
/// RwLock is the external mutual-exclusion wrapper the plain store needs
/// in a concurrent server.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    inner: RwLock<MemoryStore>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_todos(todos: Vec<Todo>) -> Self {
        Self {
            inner: RwLock::new(MemoryStore::with_todos(todos)),
        }
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn get_todos(&self) -> Result<Vec<Todo>, StorageError> {
        Ok(self.inner.read().await.get_todos())
    }

    async fn get_todo_by_id(&self, id: i64) -> Result<Todo, StorageError> {
        self.inner.read().await.get_todo_by_id(id)
    }

    async fn add_todo(&self, request: TodoRequest) -> Result<Todo, StorageError> {
        Ok(self.inner.write().await.add_todo(request))
    }

    async fn change_enable_status(&self, id: i64, enabled: bool) -> Result<Todo, StorageError> {
        self.inner.write().await.change_enable_status(id, enabled)
    }

    async fn update_todo(&self, id: i64, request: TodoRequest) -> Result<Todo, StorageError> {
        self.inner.write().await.update_todo(id, request)
    }

    async fn delete_todo(&self, id: i64) -> Result<(), StorageError> {
        self.inner.write().await.delete_todo(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: &str, description: &str) -> TodoRequest {
        TodoRequest {
            name: name.to_string(),
            description: description.to_string(),
        }
    }

    #[test]
    fn add_assigns_sequential_ids_and_defaults() {
        let mut store = MemoryStore::new();
        let first = store.add_todo(request("Buy milk", "2%"));
        let second = store.add_todo(request("Walk dog", ""));

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert!(!first.completed);
        assert!(first.enabled);
        assert_eq!(first.created_at, first.updated_at);
    }

    #[test]
    fn with_todos_continues_ids_after_seed() {
        let mut seeded = MemoryStore::new();
        let seed: Vec<Todo> = (0..3).map(|i| seeded.add_todo(request(&format!("Todo {i}"), ""))).collect();

        let mut store = MemoryStore::with_todos(seed);
        let next = store.add_todo(request("Fresh", ""));
        assert_eq!(next.id, 4);
    }

    #[test]
    fn get_todo_by_id_missing_is_not_found() {
        let store = MemoryStore::new();
        assert!(matches!(
            store.get_todo_by_id(7),
            Err(StorageError::NotFound(7))
        ));
    }

    #[test]
    fn change_enable_status_flips_value() {
        let mut store = MemoryStore::new();
        let todo = store.add_todo(request("Buy milk", ""));

        let disabled = store.change_enable_status(todo.id, false).unwrap();
        assert!(!disabled.enabled);
        assert!(disabled.updated_at >= todo.updated_at);

        let enabled = store.change_enable_status(todo.id, true).unwrap();
        assert!(enabled.enabled);
    }

    #[test]
    fn change_enable_status_same_state_is_conflict() {
        let mut store = MemoryStore::new();
        let todo = store.add_todo(request("Buy milk", ""));

        let err = store.change_enable_status(todo.id, true).unwrap_err();
        assert!(matches!(err, StorageError::EnableConflict { id: 1, .. }));
        assert_eq!(err.to_string(), "disabled todo with id 1 not found");
    }

    #[test]
    fn change_enable_status_missing_id_is_conflict() {
        let mut store = MemoryStore::new();
        let err = store.change_enable_status(9, false).unwrap_err();
        assert_eq!(err.to_string(), "enabled todo with id 9 not found");
    }

    #[test]
    fn update_replaces_fields_and_preserves_flags() {
        let mut store = MemoryStore::new();
        let todo = store.add_todo(request("Buy milk", "2%"));
        store.change_enable_status(todo.id, false).unwrap();

        let updated = store
            .update_todo(todo.id, request("Buy oat milk", "barista"))
            .unwrap();
        assert_eq!(updated.name, "Buy oat milk");
        assert_eq!(updated.description, "barista");
        assert!(!updated.completed);
        assert!(!updated.enabled);
        assert_eq!(updated.created_at, todo.created_at);
        assert!(updated.updated_at >= todo.updated_at);
    }

    #[test]
    fn update_missing_is_not_found() {
        let mut store = MemoryStore::new();
        assert!(matches!(
            store.update_todo(3, request("Anything", "")),
            Err(StorageError::NotFound(3))
        ));
    }

    #[test]
    fn delete_splices_preserving_order() {
        let mut store = MemoryStore::new();
        for i in 1..=3 {
            store.add_todo(request(&format!("Todo {i}"), ""));
        }

        store.delete_todo(2).unwrap();
        let ids: Vec<i64> = store.get_todos().iter().map(|todo| todo.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn delete_then_get_is_not_found() {
        let mut store = MemoryStore::new();
        let todo = store.add_todo(request("Buy milk", ""));

        store.delete_todo(todo.id).unwrap();
        assert!(matches!(
            store.get_todo_by_id(todo.id),
            Err(StorageError::NotFound(_))
        ));
    }

    #[test]
    fn delete_missing_is_not_found() {
        let mut store = MemoryStore::new();
        assert!(matches!(
            store.delete_todo(999),
            Err(StorageError::NotFound(999))
        ));
    }
}
