pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::notes::handlers;
use crate::state::AppState;

/// Headroom for the non-file multipart fields and part headers.
const FORM_OVERHEAD_BYTES: usize = 64 * 1024;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state
        .config
        .max_upload_bytes
        .saturating_add(FORM_OVERHEAD_BYTES);

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/notes", get(handlers::handle_list_notes))
        .route(
            "/api/v1/notes/generate",
            post(handlers::handle_generate_notes),
        )
        .route("/api/v1/notes/:id", get(handlers::handle_get_notes))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
