use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Returns service status, version and the active generation policy.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    let policy = if state.generator.is_assisted() {
        "assisted"
    } else {
        "template"
    };

    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "diamond-notes-api",
        "generation_policy": policy
    }))
}
