//! HTTP CRUD service for todo items.
//!
//! # Overview
//! Inbound requests flow router → handler (decode + validate) → storage →
//! handler (status mapping). Handlers depend only on the [`storage::Storage`]
//! trait; the process entry point picks the postgres backend, tests the
//! in-memory one.
//!
//! # Design
//! - `app()` returns a plain `Router` so tests can drive it without a
//!   socket; `run()` serves it on a listener.
//! - Errors are two-tier: backends speak [`error::StorageError`], handlers
//!   translate into [`error::ApiError`], which renders as a JSON
//!   `{status, message}` body.

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod storage;

pub use config::AppConfig;
pub use error::{ApiError, StorageError};
pub use models::{Todo, TodoRequest};
pub use routes::{app, run};
pub use storage::{MemoryStorage, PostgresStorage, Storage};
