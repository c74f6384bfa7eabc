use async_trait::async_trait;
use chrono::Utc;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::models::notes_request::NotesRequestRow;
use crate::notes::models::{GeneratedDocument, GenerationRequest, Language};
use crate::request_log::{RequestLog, RequestLogError, StoredRequest};

const CREATE_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS notes_requests (
        id               UUID PRIMARY KEY,
        class_level      SMALLINT    NOT NULL,
        subject          TEXT        NOT NULL,
        chapter_title    TEXT,
        source_file_name TEXT,
        language         TEXT        NOT NULL,
        notes            JSONB       NOT NULL,
        created_at       TIMESTAMPTZ NOT NULL DEFAULT now()
    )
"#;

const MAX_CONNECTIONS: u32 = 10;

const CREATE_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS notes_requests_created_at_idx ON notes_requests (created_at DESC)";

/// PostgreSQL-backed request log. Rows are append-only.
#[derive(Clone)]
pub struct PgRequestLog {
    pool: PgPool,
}

impl PgRequestLog {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Opens a connection pool and makes sure the table exists.
    pub async fn connect(database_url: &str) -> Result<Self, RequestLogError> {
        info!("Connecting to PostgreSQL...");

        let pool = PgPoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .connect(database_url)
            .await?;

        info!("PostgreSQL connection pool established");
        let log = Self::new(pool);
        log.ensure_schema().await?;
        Ok(log)
    }

    /// Creates the `notes_requests` table if it does not exist yet.
    pub async fn ensure_schema(&self) -> Result<(), RequestLogError> {
        sqlx::query(CREATE_TABLE).execute(&self.pool).await?;
        sqlx::query(CREATE_INDEX).execute(&self.pool).await?;
        info!("notes_requests schema ready");
        Ok(())
    }
}

impl TryFrom<NotesRequestRow> for StoredRequest {
    type Error = RequestLogError;

    fn try_from(row: NotesRequestRow) -> Result<Self, Self::Error> {
        let class_level = u8::try_from(row.class_level)
            .map_err(|_| RequestLogError::Decode(format!("class_level {}", row.class_level)))?;
        let language = row
            .language
            .parse::<Language>()
            .map_err(|e| RequestLogError::Decode(e.to_string()))?;
        let notes: GeneratedDocument = serde_json::from_value(row.notes)
            .map_err(|e| RequestLogError::Decode(e.to_string()))?;

        Ok(StoredRequest {
            id: row.id,
            class_level,
            subject: row.subject,
            chapter_title: row.chapter_title,
            source_file_name: row.source_file_name,
            language,
            notes,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl RequestLog for PgRequestLog {
    async fn record(
        &self,
        request: &GenerationRequest,
        document: &GeneratedDocument,
    ) -> Result<StoredRequest, RequestLogError> {
        let stored = StoredRequest::new(request, document, Utc::now());
        let notes = serde_json::to_value(&stored.notes)
            .map_err(|e| RequestLogError::Decode(e.to_string()))?;

        sqlx::query(
            r#"
            INSERT INTO notes_requests
                (id, class_level, subject, chapter_title, source_file_name, language, notes, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(stored.id)
        .bind(i16::from(stored.class_level))
        .bind(&stored.subject)
        .bind(&stored.chapter_title)
        .bind(&stored.source_file_name)
        .bind(stored.language.as_str())
        .bind(&notes)
        .bind(stored.created_at)
        .execute(&self.pool)
        .await?;

        Ok(stored)
    }

    async fn list_recent(&self, limit: usize) -> Result<Vec<StoredRequest>, RequestLogError> {
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);
        let rows = sqlx::query_as::<_, NotesRequestRow>(
            "SELECT * FROM notes_requests ORDER BY created_at DESC LIMIT $1",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(StoredRequest::try_from).collect()
    }

    async fn get_by_id(&self, id: Uuid) -> Result<StoredRequest, RequestLogError> {
        let row = sqlx::query_as::<_, NotesRequestRow>("SELECT * FROM notes_requests WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(RequestLogError::NotFound(id))?;

        StoredRequest::try_from(row)
    }
}
