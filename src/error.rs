//! Error types for the todo service.
//!
//! # Design
//! `StorageError` is the language the backends speak. `NotFound` gets a
//! dedicated variant because handlers must distinguish "the record does
//! not exist" (404) from "the database fell over" (500). `EnableConflict`
//! covers the enable/disable statements, where a missing row and a row
//! already in the requested state are indistinguishable; both read as
//! not-found by policy. `ApiError` is the HTTP-facing half: it renders as
//! the JSON object `{"status": u16, "message": String}`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Failures reported by a [`crate::storage::Storage`] backend.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("todo with id {0} not found")]
    NotFound(i64),

    /// Enable/disable matched no row: the todo is missing or already in
    /// the requested state.
    #[error("{state} todo with id {id} not found")]
    EnableConflict { id: i64, state: &'static str },

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl StorageError {
    /// The message names the state the todo would have to be in for the
    /// requested transition to apply.
    pub fn enable_conflict(id: i64, requested: bool) -> Self {
        let state = if requested { "disabled" } else { "enabled" };
        StorageError::EnableConflict { id, state }
    }
}

/// Client-visible request outcome, one variant per status class.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("internal server error")]
    Internal,
}

impl From<StorageError> for ApiError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::NotFound(_) | StorageError::EnableConflict { .. } => {
                ApiError::NotFound(err.to_string())
            }
            StorageError::Database(cause) => {
                // The cause stays in the server log; the client gets a
                // generic 500.
                tracing::error!(%cause, "storage operation failed");
                ApiError::Internal
            }
        }
    }
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(json!({
            "status": status.as_u16(),
            "message": self.to_string(),
        }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_includes_id() {
        assert_eq!(
            StorageError::NotFound(42).to_string(),
            "todo with id 42 not found"
        );
    }

    #[test]
    fn enable_conflict_names_required_prior_state() {
        assert_eq!(
            StorageError::enable_conflict(1, true).to_string(),
            "disabled todo with id 1 not found"
        );
        assert_eq!(
            StorageError::enable_conflict(1, false).to_string(),
            "enabled todo with id 1 not found"
        );
    }

    #[test]
    fn storage_errors_map_to_api_classes() {
        assert!(matches!(
            ApiError::from(StorageError::NotFound(1)),
            ApiError::NotFound(_)
        ));
        assert!(matches!(
            ApiError::from(StorageError::enable_conflict(1, true)),
            ApiError::NotFound(_)
        ));
        assert!(matches!(
            ApiError::from(StorageError::Database(sqlx::Error::PoolTimedOut)),
            ApiError::Internal
        ));
    }
}
