//! Request Log — records every accepted notes request together with its document.
//!
//! Pluggable, trait-based store. `InMemoryRequestLog` is the default;
//! `PgRequestLog` is used when `DATABASE_URL` is configured.
//! `AppState` holds an `Arc<dyn RequestLog>`, chosen at startup.

use async_trait::async_trait;
use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::notes::models::{GeneratedDocument, GenerationRequest, Language};

pub mod memory;
pub mod postgres;

pub use memory::InMemoryRequestLog;
pub use postgres::PgRequestLog;

/// A logged request. Uploaded bytes are not retained, only the file name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredRequest {
    pub id: Uuid,
    pub class_level: u8,
    pub subject: String,
    pub chapter_title: Option<String>,
    pub source_file_name: Option<String>,
    pub language: Language,
    pub notes: GeneratedDocument,
    pub created_at: DateTime<Utc>,
}

impl StoredRequest {
    /// Builds a new entry with a fresh v4 identifier. `created_at` is truncated to
    /// microseconds, the precision PostgreSQL keeps, so the returned entry equals
    /// what a later read decodes.
    pub fn new(
        request: &GenerationRequest,
        document: &GeneratedDocument,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            class_level: request.class_level,
            subject: request.subject.clone(),
            chapter_title: request.chapter_title.clone(),
            source_file_name: request
                .source_document
                .as_ref()
                .map(|d| d.file_name.clone()),
            language: request.language,
            notes: document.clone(),
            created_at: created_at.trunc_subsecs(6),
        }
    }
}

#[derive(Debug, Error)]
pub enum RequestLogError {
    #[error("Request {0} not found")]
    NotFound(Uuid),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Stored notes could not be decoded: {0}")]
    Decode(String),
}

#[async_trait]
pub trait RequestLog: Send + Sync {
    /// Persists a request and its document, returning the stored entry.
    async fn record(
        &self,
        request: &GenerationRequest,
        document: &GeneratedDocument,
    ) -> Result<StoredRequest, RequestLogError>;

    /// Up to `limit` entries, most recent first.
    async fn list_recent(&self, limit: usize) -> Result<Vec<StoredRequest>, RequestLogError>;

    async fn get_by_id(&self, id: Uuid) -> Result<StoredRequest, RequestLogError>;
}
