use std::time::Duration;

use anyhow::{Context, Result};

const DEFAULT_REQUEST_LOG_CAPACITY: usize = 1000;
const DEFAULT_LLM_TIMEOUT_SECS: u64 = 30;
const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// When set, requests are logged to PostgreSQL instead of memory.
    pub database_url: Option<String>,
    /// In-memory log bound. `None` keeps every request.
    pub request_log_capacity: Option<usize>,
    /// When set, notes are generated by the LLM with template fallback.
    pub anthropic_api_key: Option<String>,
    pub llm_timeout: Duration,
    pub max_upload_bytes: usize,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let request_log_capacity = match parse_env::<usize>("REQUEST_LOG_CAPACITY")? {
            Some(0) => None,
            Some(n) => Some(n),
            None => Some(DEFAULT_REQUEST_LOG_CAPACITY),
        };

        Ok(Config {
            database_url: optional_env("DATABASE_URL"),
            request_log_capacity,
            anthropic_api_key: optional_env("ANTHROPIC_API_KEY"),
            llm_timeout: Duration::from_secs(
                parse_env("LLM_TIMEOUT_SECS")?.unwrap_or(DEFAULT_LLM_TIMEOUT_SECS),
            ),
            max_upload_bytes: parse_env("MAX_UPLOAD_BYTES")?.unwrap_or(DEFAULT_MAX_UPLOAD_BYTES),
            port: parse_env("PORT")?.unwrap_or(8080),
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            database_url: None,
            request_log_capacity: Some(DEFAULT_REQUEST_LOG_CAPACITY),
            anthropic_api_key: None,
            llm_timeout: Duration::from_secs(DEFAULT_LLM_TIMEOUT_SECS),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            port: 8080,
            rust_log: "info".to_string(),
        }
    }
}

/// Blank values count as unset.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_env<T>(key: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    optional_env(key)
        .map(|raw| {
            raw.parse::<T>()
                .with_context(|| format!("Environment variable '{key}' has an invalid value: {raw}"))
        })
        .transpose()
}
