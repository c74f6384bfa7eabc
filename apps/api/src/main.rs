mod config;
mod errors;
mod llm_client;
mod models;
mod notes;
mod request_log;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::notes::generator::NotesGenerator;
use crate::request_log::{InMemoryRequestLog, PgRequestLog, RequestLog};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Diamond Notes API v{}", env!("CARGO_PKG_VERSION"));

    // Request log: PostgreSQL when configured, otherwise in memory
    let request_log: Arc<dyn RequestLog> = match &config.database_url {
        Some(url) => Arc::new(PgRequestLog::connect(url).await?),
        None => {
            info!(
                "DATABASE_URL not set; using in-memory request log (capacity: {:?})",
                config.request_log_capacity
            );
            Arc::new(InMemoryRequestLog::new(config.request_log_capacity))
        }
    };

    // Generation policy: assisted when an API key is present
    let generator = match &config.anthropic_api_key {
        Some(key) => {
            let llm = LlmClient::new(key.clone())?;
            info!(
                "Assisted generation enabled (model: {}, timeout: {:?})",
                llm_client::MODEL,
                config.llm_timeout
            );
            NotesGenerator::assisted(Arc::new(llm), config.llm_timeout)
        }
        None => {
            info!("ANTHROPIC_API_KEY not set; using template generation only");
            NotesGenerator::deterministic()
        }
    };

    let state = AppState {
        generator: Arc::new(generator),
        request_log,
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
