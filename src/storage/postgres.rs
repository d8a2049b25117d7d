//! Relational backend: one parameterized statement per operation.
//!
//! Mutating statements use `RETURNING` so the post-operation row comes
//! back in the same round trip; zero rows from the database maps straight
//! to the not-found error class. Concurrency safety is the pool's problem.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;

use crate::error::StorageError;
use crate::models::{Todo, TodoRequest};
use crate::storage::Storage;

const TODO_COLUMNS: &str = "id, name, description, completed, enabled, created_at, updated_at";

pub struct PostgresStorage {
    pool: PgPool,
}

impl PostgresStorage {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Storage for PostgresStorage {
    async fn get_todos(&self) -> Result<Vec<Todo>, StorageError> {
        let sql = format!("SELECT {TODO_COLUMNS} FROM todos");
        let todos = sqlx::query_as::<_, Todo>(&sql).fetch_all(&self.pool).await?;
        Ok(todos)
    }

    async fn get_todo_by_id(&self, id: i64) -> Result<Todo, StorageError> {
        let sql = format!("SELECT {TODO_COLUMNS} FROM todos WHERE id = $1");
        sqlx::query_as::<_, Todo>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StorageError::NotFound(id))
    }

    async fn add_todo(&self, request: TodoRequest) -> Result<Todo, StorageError> {
        let now = Utc::now();
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO todos (name, description, completed, enabled, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING id",
        )
        .bind(&request.name)
        .bind(&request.description)
        .bind(false)
        .bind(true)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(Todo {
            id,
            name: request.name,
            description: request.description,
            completed: false,
            created_at: now,
            updated_at: now,
            enabled: true,
        })
    }

    async fn change_enable_status(&self, id: i64, enabled: bool) -> Result<Todo, StorageError> {
        // The `enabled = NOT $1` guard makes the statement affect zero
        // rows when the todo is already in the requested state, which is
        // what turns a same-state transition into an error.
        let sql = format!(
            "UPDATE todos SET enabled = $1, updated_at = $2 \
             WHERE id = $3 AND enabled = NOT $1 RETURNING {TODO_COLUMNS}"
        );
        sqlx::query_as::<_, Todo>(&sql)
            .bind(enabled)
            .bind(Utc::now())
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| StorageError::enable_conflict(id, enabled))
    }

    async fn update_todo(&self, id: i64, request: TodoRequest) -> Result<Todo, StorageError> {
        let sql = format!(
            "UPDATE todos SET name = $1, description = $2, updated_at = $3 \
             WHERE id = $4 RETURNING {TODO_COLUMNS}"
        );
        sqlx::query_as::<_, Todo>(&sql)
            .bind(&request.name)
            .bind(&request.description)
            .bind(Utc::now())
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StorageError::NotFound(id))
    }

    async fn delete_todo(&self, id: i64) -> Result<(), StorageError> {
        let result = sqlx::query("DELETE FROM todos WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound(id));
        }
        Ok(())
    }
}
