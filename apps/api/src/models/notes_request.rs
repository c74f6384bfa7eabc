use chrono::{DateTime, Utc};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, FromRow)]
pub struct NotesRequestRow {
    pub id: Uuid,
    pub class_level: i16,
    pub subject: String,
    pub chapter_title: Option<String>,
    pub source_file_name: Option<String>,
    pub language: String,
    pub notes: Value,
    pub created_at: DateTime<Utc>,
}
