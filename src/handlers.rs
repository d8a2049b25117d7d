//! Request handlers: decode and validate input, call storage, map the
//! outcome to a status code.
//!
//! Path ids arrive as strings and are parsed here so a malformed id
//! becomes this service's 400 JSON error instead of the framework's
//! plain-text rejection; JSON bodies are extracted as a `Result` for the
//! same reason.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::error::ApiError;
use crate::models::{Todo, TodoRequest};
use crate::storage::Storage;

pub type AppState = Arc<dyn Storage>;

/// Liveness probe.
pub async fn ping() -> &'static str {
    "pong"
}

fn parse_id(raw: &str) -> Result<i64, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::BadRequest("invalid ID".to_string()))
}

fn decode_request(
    payload: Result<Json<TodoRequest>, JsonRejection>,
) -> Result<TodoRequest, ApiError> {
    let Json(request) =
        payload.map_err(|_| ApiError::BadRequest("invalid request payload".to_string()))?;
    request
        .validate()
        .map_err(|err| ApiError::BadRequest(format!("invalid payload: {err}")))?;
    Ok(request)
}

pub async fn list_todos(State(storage): State<AppState>) -> Result<Json<Vec<Todo>>, ApiError> {
    Ok(Json(storage.get_todos().await?))
}

pub async fn get_todo(
    State(storage): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Todo>, ApiError> {
    let id = parse_id(&id)?;
    Ok(Json(storage.get_todo_by_id(id).await?))
}

pub async fn create_todo(
    State(storage): State<AppState>,
    payload: Result<Json<TodoRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    let request = decode_request(payload)?;
    let todo = storage.add_todo(request).await?;
    Ok((StatusCode::CREATED, Json(todo)))
}

pub async fn update_todo(
    State(storage): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<TodoRequest>, JsonRejection>,
) -> Result<Json<Todo>, ApiError> {
    let id = parse_id(&id)?;
    let request = decode_request(payload)?;
    Ok(Json(storage.update_todo(id, request).await?))
}

pub async fn enable_todo(
    State(storage): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Todo>, ApiError> {
    change_enable(storage, &id, true).await
}

pub async fn disable_todo(
    State(storage): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Todo>, ApiError> {
    change_enable(storage, &id, false).await
}

async fn change_enable(
    storage: AppState,
    raw_id: &str,
    enabled: bool,
) -> Result<Json<Todo>, ApiError> {
    let id = parse_id(raw_id)?;
    Ok(Json(storage.change_enable_status(id, enabled).await?))
}

pub async fn delete_todo(
    State(storage): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&id)?;
    storage.delete_todo(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
