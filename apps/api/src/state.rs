use std::sync::Arc;

use crate::config::Config;
use crate::notes::generator::NotesGenerator;
use crate::request_log::RequestLog;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Template-only or assisted, chosen at startup from `ANTHROPIC_API_KEY`.
    pub generator: Arc<NotesGenerator>,
    /// Pluggable request log. In-memory by default, PostgreSQL when `DATABASE_URL` is set.
    pub request_log: Arc<dyn RequestLog>,
    pub config: Config,
}
