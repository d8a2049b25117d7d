//! Domain types for the todo service.
//!
//! # Design
//! `Todo` doubles as the wire representation and the database row, so the
//! serde field order matches the API contract and the struct derives
//! `sqlx::FromRow` for the relational backend. `TodoRequest` carries only
//! the client-supplied fields; everything else (id, flags, timestamps) is
//! assigned by storage.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A single todo item as stored and as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Todo {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub enabled: bool,
}

/// Payload for creating or replacing a todo. `name` is required by the
/// deserializer; a missing `description` decodes to the empty string.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct TodoRequest {
    #[validate(length(min = 3, max = 100))]
    pub name: String,
    #[serde(default)]
    #[validate(length(max = 1000))]
    pub description: String,
}
