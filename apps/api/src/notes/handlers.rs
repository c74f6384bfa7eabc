//! Axum route handlers for the Notes API.

use axum::{
    extract::{multipart::MultipartError, Multipart, Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use crate::errors::AppError;
use crate::notes::models::{GeneratedDocument, GenerationRequest, Language, SourceDocument};
use crate::request_log::StoredRequest;
use crate::state::AppState;

const ALLOWED_EXTENSIONS: &[&str] = &["pdf", "doc", "docx", "txt"];
const DEFAULT_LIST_LIMIT: usize = 10;
const MAX_LIST_LIMIT: usize = 100;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// Raw multipart fields, before validation.
#[derive(Debug, Default)]
pub struct NotesForm {
    pub class: Option<String>,
    pub subject: Option<String>,
    pub chapter_name: Option<String>,
    pub language: Option<String>,
    pub file: Option<SourceDocument>,
}

#[derive(Debug, Serialize)]
pub struct GenerateNotesResponse {
    pub id: Uuid,
    pub notes: GeneratedDocument,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub limit: Option<usize>,
}

// ────────────────────────────────────────────────────────────────────────────
// Form parsing and validation
// ────────────────────────────────────────────────────────────────────────────

fn upload_limit_message(max_upload_bytes: usize) -> String {
    format!("the limit is {max_upload_bytes} bytes")
}

fn multipart_error(e: MultipartError, max_upload_bytes: usize) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(format!(
            "Request body is too large; {}",
            upload_limit_message(max_upload_bytes)
        ))
    } else {
        AppError::Validation(format!("Malformed multipart body: {}", e.body_text()))
    }
}

/// Trims and drops blank values.
fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl NotesForm {
    /// Reads the multipart fields. `max_upload_bytes` is only used to word the error
    /// when the body limit cuts the stream.
    pub async fn from_multipart(
        mut multipart: Multipart,
        max_upload_bytes: usize,
    ) -> Result<Self, AppError> {
        let mut form = NotesForm::default();
        let read_error = |e: MultipartError| multipart_error(e, max_upload_bytes);

        while let Some(field) = multipart.next_field().await.map_err(read_error)? {
            let name = field.name().unwrap_or_default().to_string();
            match name.as_str() {
                "file" | "pdf" => {
                    let file_name = field.file_name().unwrap_or_default().to_string();
                    let content_type = field.content_type().map(str::to_string);
                    let bytes = field.bytes().await.map_err(read_error)?;
                    // Browsers send an empty part when no file was chosen.
                    if file_name.is_empty() && bytes.is_empty() {
                        continue;
                    }
                    let file = SourceDocument {
                        file_name,
                        content_type,
                        bytes,
                    };
                    debug!(
                        "Received upload {} ({}, {} bytes)",
                        file.file_name,
                        file.content_type.as_deref().unwrap_or("unknown type"),
                        file.bytes.len()
                    );
                    form.file = Some(file);
                }
                "class" => form.class = Some(field.text().await.map_err(read_error)?),
                "subject" => form.subject = Some(field.text().await.map_err(read_error)?),
                "chapter_name" | "chapterName" => {
                    form.chapter_name = Some(field.text().await.map_err(read_error)?)
                }
                "language" => form.language = Some(field.text().await.map_err(read_error)?),
                _ => {}
            }
        }

        Ok(form)
    }

    /// Validates the form into a `GenerationRequest`. Rejects requests with neither a
    /// chapter name nor a document, and any language other than English or Hindi.
    pub fn into_request(self, max_upload_bytes: usize) -> Result<GenerationRequest, AppError> {
        let class_level = non_blank(self.class)
            .ok_or_else(|| AppError::Validation("class is required".to_string()))?
            .parse::<u8>()
            .ok()
            .filter(|c| (1..=12).contains(c))
            .ok_or_else(|| AppError::Validation("class must be a number from 1 to 12".to_string()))?;

        let subject = non_blank(self.subject)
            .ok_or_else(|| AppError::Validation("subject is required".to_string()))?;

        // Absent means English; a present but unrecognised (or blank) value is rejected.
        let language = match self.language {
            Some(raw) => raw.parse::<Language>()?,
            None => Language::default(),
        };

        if let Some(file) = &self.file {
            validate_upload(file, max_upload_bytes)?;
        }

        let chapter_title = non_blank(self.chapter_name);
        if chapter_title.is_none() && self.file.is_none() {
            return Err(AppError::Validation(
                "Provide either a chapter name or a document".to_string(),
            ));
        }

        Ok(GenerationRequest {
            class_level,
            subject,
            chapter_title,
            source_document: self.file,
            language,
        })
    }
}

fn validate_upload(file: &SourceDocument, max_upload_bytes: usize) -> Result<(), AppError> {
    let extension = std::path::Path::new(&file.file_name)
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    if !ALLOWED_EXTENSIONS.contains(&extension.as_str()) {
        return Err(AppError::Validation(format!(
            "Unsupported file type '{}': allowed types are {}",
            file.file_name,
            ALLOWED_EXTENSIONS.join(", ")
        )));
    }
    if file.bytes.is_empty() {
        return Err(AppError::Validation(format!("File '{}' is empty", file.file_name)));
    }
    if file.bytes.len() > max_upload_bytes {
        return Err(AppError::PayloadTooLarge(format!(
            "File '{}' is {} bytes; {}",
            file.file_name,
            file.bytes.len(),
            upload_limit_message(max_upload_bytes)
        )));
    }
    Ok(())
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/notes/generate
///
/// Multipart form: class, subject, chapter_name and/or file, language.
/// Generates notes, logs the request and returns the document with its id.
pub async fn handle_generate_notes(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<GenerateNotesResponse>, AppError> {
    let form = NotesForm::from_multipart(multipart, state.config.max_upload_bytes).await?;
    let request = form.into_request(state.config.max_upload_bytes)?;

    let outcome = state.generator.generate_with_outcome(&request).await;
    let policy = outcome.label();
    let notes = outcome.into_document();

    let stored = state.request_log.record(&request, &notes).await?;
    info!(
        "Stored notes request {} (class {}, {}, {}, via {})",
        stored.id, stored.class_level, stored.subject, stored.language, policy
    );

    Ok(Json(GenerateNotesResponse {
        id: stored.id,
        notes: stored.notes,
        created_at: stored.created_at,
    }))
}

/// GET /api/v1/notes?limit=N
///
/// Most recent requests first. `limit` defaults to 10 and is clamped to 1..=100.
pub async fn handle_list_notes(
    State(state): State<AppState>,
    Query(params): Query<ListQuery>,
) -> Result<Json<Vec<StoredRequest>>, AppError> {
    let limit = params
        .limit
        .unwrap_or(DEFAULT_LIST_LIMIT)
        .clamp(1, MAX_LIST_LIMIT);
    let recent = state.request_log.list_recent(limit).await?;
    Ok(Json(recent))
}

/// GET /api/v1/notes/:id
pub async fn handle_get_notes(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<StoredRequest>, AppError> {
    let stored = state.request_log.get_by_id(id).await?;
    Ok(Json(stored))
}
