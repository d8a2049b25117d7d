//! Route table and server loop.

use axum::{
    routing::{get, patch},
    Router,
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::handlers::{self, AppState};

/// Builds the application router over any [`crate::storage::Storage`]
/// backend. Tests drive the returned router directly with
/// `tower::ServiceExt::oneshot`; production wraps it in [`run`].
pub fn app(storage: AppState) -> Router {
    Router::new()
        .route("/ping", get(handlers::ping))
        .route(
            "/todos",
            get(handlers::list_todos).post(handlers::create_todo),
        )
        .route(
            "/todos/{id}",
            get(handlers::get_todo)
                .put(handlers::update_todo)
                .delete(handlers::delete_todo),
        )
        .route("/todos/{id}/enable", patch(handlers::enable_todo))
        .route("/todos/{id}/disable", patch(handlers::disable_todo))
        .layer(TraceLayer::new_for_http())
        .with_state(storage)
}

pub async fn run(listener: TcpListener, storage: AppState) -> Result<(), std::io::Error> {
    axum::serve(listener, app(storage)).await
}
