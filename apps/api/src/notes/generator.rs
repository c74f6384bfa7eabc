//! Notes generation — the facade the HTTP layer calls.
//!
//! Flow (template policy): classify → assemble sections → compose conclusion + keywords.
//! Flow (assisted policy): build prompt → completion service (timeout-bound) →
//!       parse JSON → on any failure, fall back to the template policy.
//!
//! The fallback is invisible to callers: both policies return a `GeneratedDocument`
//! of the same shape, and assisted-path failures are only logged.

use std::sync::Arc;
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;
use tracing::{info, warn};

use crate::llm_client::prompts::JSON_ONLY_SYSTEM;
use crate::llm_client::{strip_json_fences, CompletionService, LlmError};
use crate::notes::assembler::{assemble, document_title, resolve_chapter_title};
use crate::notes::classifier::classify;
use crate::notes::composer::{compose_conclusion, compose_keywords};
use crate::notes::models::{GeneratedDocument, GenerationRequest, Section};
use crate::notes::prompts::{
    category_guidance, language_instruction, NOTES_PROMPT_TEMPLATE, NOTES_SYSTEM,
};
use crate::notes::templates::fill;

// ────────────────────────────────────────────────────────────────────────────
// Template policy
// ────────────────────────────────────────────────────────────────────────────

/// Deterministic notes from the bilingual template table. Never fails.
pub fn generate_template_notes(request: &GenerationRequest) -> GeneratedDocument {
    let category = classify(&request.subject);
    let chapter = resolve_chapter_title(request.chapter_title.as_deref(), request.language);

    GeneratedDocument {
        title: document_title(&chapter, request.language),
        sections: assemble(
            category,
            &chapter,
            request.class_level,
            &request.subject,
            request.language,
        ),
        conclusion: compose_conclusion(
            &chapter,
            &request.subject,
            request.class_level,
            request.language,
        ),
        keywords: compose_keywords(&chapter, &request.subject, request.class_level, category),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Assisted policy
// ────────────────────────────────────────────────────────────────────────────

/// Why an assisted attempt was abandoned. Recovered locally, never returned to callers.
#[derive(Debug, Error)]
pub enum AssistError {
    #[error("completion service timed out after {0:?}")]
    Timeout(Duration),

    #[error("completion service failed: {0}")]
    Service(#[from] LlmError),

    #[error("response is not valid notes JSON: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("response is missing required field '{0}'")]
    MissingField(&'static str),
}

/// Which path produced a document. `Assisted` and `FellBack` are the two terminal
/// states of an assisted attempt.
#[derive(Debug)]
pub enum GenerationOutcome {
    Template(GeneratedDocument),
    Assisted(GeneratedDocument),
    FellBack {
        document: GeneratedDocument,
        reason: AssistError,
    },
}

impl GenerationOutcome {
    /// Short label for logs.
    pub fn label(&self) -> &'static str {
        match self {
            GenerationOutcome::Template(_) => "template",
            GenerationOutcome::Assisted(_) => "assisted",
            GenerationOutcome::FellBack { .. } => "fallback",
        }
    }

    pub fn into_document(self) -> GeneratedDocument {
        match self {
            GenerationOutcome::Template(d) | GenerationOutcome::Assisted(d) => d,
            GenerationOutcome::FellBack { document, .. } => document,
        }
    }
}

/// Lenient mirror of `GeneratedDocument` for LLM output: every field may be absent.
#[derive(Debug, Deserialize)]
struct AssistedDocument {
    title: Option<String>,
    headings: Option<Vec<AssistedSection>>,
    conclusion: Option<String>,
    keywords: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
struct AssistedSection {
    number: Option<u32>,
    title: Option<String>,
    points: Option<Vec<String>>,
}

/// Parses completion output into a document. `title` and a non-empty `headings`
/// array are required; everything else defaults to empty.
fn parse_assisted_document(text: &str) -> Result<GeneratedDocument, AssistError> {
    let raw: AssistedDocument = serde_json::from_str(strip_json_fences(text))?;

    let title = raw
        .title
        .filter(|t| !t.trim().is_empty())
        .ok_or(AssistError::MissingField("title"))?;
    let headings = raw
        .headings
        .filter(|h| !h.is_empty())
        .ok_or(AssistError::MissingField("headings"))?;

    let sections = headings
        .into_iter()
        .enumerate()
        .map(|(i, h)| Section {
            ordinal: h.number.unwrap_or(i as u32 + 1),
            title: h.title.unwrap_or_default(),
            bullet_points: h.points.unwrap_or_default(),
        })
        .collect();

    Ok(GeneratedDocument {
        title,
        sections,
        conclusion: raw.conclusion.unwrap_or_default(),
        keywords: raw.keywords.unwrap_or_default(),
    })
}

/// Fills the notes prompt. Uploaded bytes are never included; only the file name is
/// mentioned so the model knows the chapter came from a document.
fn build_notes_prompt(request: &GenerationRequest) -> String {
    let category = classify(&request.subject);
    let chapter = resolve_chapter_title(request.chapter_title.as_deref(), request.language);

    let source_note = match &request.source_document {
        Some(doc) => format!(
            "Source: the student uploaded the document \"{}\" for this chapter. \
            Base the notes on the chapter it covers.\n",
            doc.file_name
        ),
        None => String::new(),
    };

    let template = NOTES_PROMPT_TEMPLATE
        .replace("{category_guidance}", category_guidance(category))
        .replace("{language_instruction}", language_instruction(request.language));

    // User text (chapter, subject, file name) is inserted exactly once and never rescanned.
    template
        .split("{source_note}")
        .map(|part| fill(part, &chapter, request.class_level, &request.subject))
        .collect::<Vec<_>>()
        .join(source_note.as_str())
}

#[derive(Clone)]
struct Assistant {
    service: Arc<dyn CompletionService>,
    timeout: Duration,
}

impl Assistant {
    async fn attempt(&self, request: &GenerationRequest) -> Result<GeneratedDocument, AssistError> {
        let prompt = build_notes_prompt(request);
        let system = format!("{NOTES_SYSTEM} {JSON_ONLY_SYSTEM}");

        // Attempting → Parsing
        let text = tokio::time::timeout(self.timeout, self.service.complete(&prompt, &system))
            .await
            .map_err(|_| AssistError::Timeout(self.timeout))??;

        // Parsing → Succeeded | FellBack
        parse_assisted_document(&text)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Facade
// ────────────────────────────────────────────────────────────────────────────

/// Generates notes with either the template policy or the assisted policy.
/// Holds no mutable state; share it behind an `Arc`.
#[derive(Clone)]
pub struct NotesGenerator {
    assistant: Option<Assistant>,
}

impl NotesGenerator {
    /// Template policy only.
    pub fn deterministic() -> Self {
        Self { assistant: None }
    }

    /// Assisted policy: try the completion service within `timeout`, fall back to
    /// templates on any failure.
    pub fn assisted(service: Arc<dyn CompletionService>, timeout: Duration) -> Self {
        Self {
            assistant: Some(Assistant { service, timeout }),
        }
    }

    pub fn is_assisted(&self) -> bool {
        self.assistant.is_some()
    }

    pub async fn generate(&self, request: &GenerationRequest) -> GeneratedDocument {
        self.generate_with_outcome(request).await.into_document()
    }

    pub async fn generate_with_outcome(&self, request: &GenerationRequest) -> GenerationOutcome {
        let Some(assistant) = &self.assistant else {
            return GenerationOutcome::Template(generate_template_notes(request));
        };

        match assistant.attempt(request).await {
            Ok(document) => {
                info!(
                    "Assisted notes generated for class {} {} ({} headings)",
                    request.class_level,
                    request.subject,
                    document.sections.len()
                );
                GenerationOutcome::Assisted(document)
            }
            Err(reason) => {
                warn!("Assisted generation failed, falling back to templates: {reason}");
                GenerationOutcome::FellBack {
                    document: generate_template_notes(request),
                    reason,
                }
            }
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use bytes::Bytes;

    use super::*;
    use crate::notes::models::{Language, SourceDocument};

    fn request(language: Language) -> GenerationRequest {
        GenerationRequest {
            class_level: 10,
            subject: "Mathematics".to_string(),
            chapter_title: Some("Linear Equations".to_string()),
            source_document: None,
            language,
        }
    }

    fn pdf_only_request(language: Language) -> GenerationRequest {
        GenerationRequest {
            class_level: 8,
            subject: "Science".to_string(),
            chapter_title: None,
            source_document: Some(SourceDocument {
                file_name: "crop-production.pdf".to_string(),
                content_type: Some("application/pdf".to_string()),
                bytes: Bytes::from_static(b"%PDF-1.4 secret-bytes"),
            }),
            language,
        }
    }

    struct FailingService;

    #[async_trait]
    impl CompletionService for FailingService {
        async fn complete(&self, _prompt: &str, _system: &str) -> Result<String, LlmError> {
            Err(LlmError::Api {
                status: 503,
                message: "overloaded".to_string(),
            })
        }
    }

    struct SlowService;

    #[async_trait]
    impl CompletionService for SlowService {
        async fn complete(&self, _prompt: &str, _system: &str) -> Result<String, LlmError> {
            tokio::time::sleep(Duration::from_secs(600)).await;
            Ok("{}".to_string())
        }
    }

    /// Returns a canned response and records every prompt it receives.
    struct CannedService {
        response: String,
        prompts: Mutex<Vec<String>>,
    }

    impl CannedService {
        fn new(response: &str) -> Arc<Self> {
            Arc::new(Self {
                response: response.to_string(),
                prompts: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl CompletionService for CannedService {
        async fn complete(&self, prompt: &str, _system: &str) -> Result<String, LlmError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            Ok(self.response.clone())
        }
    }

    fn assisted(service: Arc<dyn CompletionService>) -> NotesGenerator {
        NotesGenerator::assisted(service, Duration::from_secs(5))
    }

    #[test]
    fn test_english_mathematics_scenario() {
        let doc = generate_template_notes(&request(Language::English));

        assert_eq!(doc.title, "Linear Equations");
        assert_eq!(doc.sections.len(), 4);
        assert_eq!(doc.sections[1].title, "Key Concepts and Formulas");
        for keyword in ["Linear Equations", "Mathematics", "Class 10", "Formula"] {
            assert!(doc.keywords.iter().any(|k| k == keyword), "missing {keyword}");
        }
        assert!(!doc.conclusion.is_empty());
    }

    #[test]
    fn test_hindi_scenario_has_same_shape_with_hindi_text() {
        let english = generate_template_notes(&request(Language::English));
        let hindi = generate_template_notes(&request(Language::Hindi));

        assert_eq!(hindi.title, "अध्याय: Linear Equations");
        assert_eq!(hindi.sections.len(), english.sections.len());
        for (h, e) in hindi.sections.iter().zip(&english.sections) {
            assert_eq!(h.ordinal, e.ordinal);
            assert_eq!(h.bullet_points.len(), e.bullet_points.len());
            assert_ne!(h.title, e.title);
        }
        assert_eq!(hindi.sections[1].title, "मुख्य अवधारणाएँ और सूत्र");
        assert!(hindi.conclusion.starts_with("निष्कर्ष"));
        assert_eq!(hindi.keywords, english.keywords);
    }

    #[test]
    fn test_missing_chapter_uses_placeholder_in_requested_language() {
        let english = generate_template_notes(&pdf_only_request(Language::English));
        assert_eq!(english.title, "Chapter from PDF");
        assert_eq!(english.keywords[0], "Chapter from PDF");

        let hindi = generate_template_notes(&pdf_only_request(Language::Hindi));
        assert_eq!(hindi.title, "अध्याय: PDF से अध्याय");
        assert_eq!(hindi.sections[0].title, "PDF से अध्याय का परिचय");
    }

    #[tokio::test]
    async fn test_deterministic_generator_reports_template_outcome() {
        let generator = NotesGenerator::deterministic();
        assert!(!generator.is_assisted());
        let outcome = generator.generate_with_outcome(&request(Language::English)).await;
        assert!(matches!(outcome, GenerationOutcome::Template(_)));
        assert_eq!(
            outcome.into_document(),
            generate_template_notes(&request(Language::English))
        );
    }

    #[tokio::test]
    async fn test_service_failure_falls_back_to_template_notes() {
        let generator = assisted(Arc::new(FailingService));
        let req = request(Language::Hindi);

        let outcome = generator.generate_with_outcome(&req).await;
        assert!(matches!(
            outcome,
            GenerationOutcome::FellBack {
                reason: AssistError::Service(_),
                ..
            }
        ));
        assert_eq!(outcome.into_document(), generate_template_notes(&req));
    }

    #[tokio::test(start_paused = true)]
    async fn test_timeout_falls_back_to_template_notes() {
        let generator = assisted(Arc::new(SlowService));
        let req = request(Language::English);

        let outcome = generator.generate_with_outcome(&req).await;
        assert!(matches!(
            outcome,
            GenerationOutcome::FellBack {
                reason: AssistError::Timeout(_),
                ..
            }
        ));
        assert_eq!(outcome.label(), "fallback");
        assert_eq!(outcome.into_document(), generate_template_notes(&req));
    }

    #[tokio::test]
    async fn test_malformed_json_falls_back() {
        let generator = assisted(CannedService::new("Sure! Here are your notes: ..."));
        let req = request(Language::English);

        let outcome = generator.generate_with_outcome(&req).await;
        assert!(matches!(
            outcome,
            GenerationOutcome::FellBack {
                reason: AssistError::Malformed(_),
                ..
            }
        ));
        assert_eq!(generator.generate(&req).await, generate_template_notes(&req));
    }

    #[tokio::test]
    async fn test_missing_headings_falls_back() {
        let generator = assisted(CannedService::new(r#"{"title": "Linear Equations", "headings": []}"#));
        let outcome = generator.generate_with_outcome(&request(Language::English)).await;
        assert!(matches!(
            outcome,
            GenerationOutcome::FellBack {
                reason: AssistError::MissingField("headings"),
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_missing_title_falls_back() {
        let generator = assisted(CannedService::new(
            r#"{"headings": [{"number": 1, "title": "Intro", "points": ["a", "b"]}]}"#,
        ));
        let outcome = generator.generate_with_outcome(&request(Language::English)).await;
        assert!(matches!(
            outcome,
            GenerationOutcome::FellBack {
                reason: AssistError::MissingField("title"),
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_well_formed_response_is_adopted_with_defaults() {
        let response = r#"```json
        {
          "title": "Linear Equations",
          "headings": [
            {"number": 1, "title": "What is a linear equation?", "points": ["An equation of degree one.", "Graph is a line."]},
            {"title": "Solving", "points": null},
            {"number": 3}
          ]
        }
        ```"#;
        let generator = assisted(CannedService::new(response));

        let outcome = generator.generate_with_outcome(&request(Language::English)).await;
        let GenerationOutcome::Assisted(doc) = outcome else {
            panic!("expected assisted outcome");
        };

        assert_eq!(doc.title, "Linear Equations");
        assert_eq!(doc.sections.len(), 3);
        assert_eq!(doc.sections[0].bullet_points.len(), 2);
        assert_eq!(doc.sections[1].ordinal, 2);
        assert!(doc.sections[1].bullet_points.is_empty());
        assert_eq!(doc.sections[2].title, "");
        assert_eq!(doc.conclusion, "");
        assert!(doc.keywords.is_empty());
    }

    #[tokio::test]
    async fn test_prompt_carries_category_guidance_and_parameters() {
        let service = CannedService::new("not json");
        let generator = assisted(service.clone());
        generator.generate(&request(Language::Hindi)).await;

        let prompts = service.prompts.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        let prompt = &prompts[0];
        assert!(prompt.contains("Class: 10"));
        assert!(prompt.contains("Subject: Mathematics"));
        assert!(prompt.contains("Chapter: Linear Equations"));
        assert!(prompt.contains("formulas"));
        assert!(prompt.contains("Devanagari"));
        assert!(!prompt.contains("Source:"));
        assert!(!prompt.contains("{chapter}"));
        assert!(!prompt.contains("{source_note}"));
    }

    #[tokio::test]
    async fn test_prompt_mentions_upload_without_forwarding_bytes() {
        let service = CannedService::new("not json");
        let generator = assisted(service.clone());
        generator.generate(&pdf_only_request(Language::English)).await;

        let prompts = service.prompts.lock().unwrap();
        let prompt = &prompts[0];
        assert!(prompt.contains("crop-production.pdf"));
        assert!(prompt.contains("Chapter: Chapter from PDF"));
        assert!(!prompt.contains("secret-bytes"));
    }

    #[test]
    fn test_prompt_inserts_user_text_verbatim() {
        let mut request = pdf_only_request(Language::English);
        request.chapter_title = Some("A {source_note} B".to_string());
        if let Some(doc) = request.source_document.as_mut() {
            doc.file_name = "{chapter}.pdf".to_string();
        }

        let prompt = build_notes_prompt(&request);

        assert!(prompt.contains("Chapter: A {source_note} B"));
        assert!(prompt.contains("\"{chapter}.pdf\""));
        assert_eq!(prompt.matches("Source:").count(), 1);
    }
}
