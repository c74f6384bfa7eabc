use std::fmt;
use std::str::FromStr;

use bytes::Bytes;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Output language of the notes. English is the primary language, Hindi the secondary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    Hindi,
}

impl Language {
    pub fn as_str(self) -> &'static str {
        match self {
            Language::English => "english",
            Language::Hindi => "hindi",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unsupported language '{0}' (expected 'english' or 'hindi')")]
pub struct UnsupportedLanguage(pub String);

impl FromStr for Language {
    type Err = UnsupportedLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "english" | "en" => Ok(Language::English),
            "hindi" | "hi" => Ok(Language::Hindi),
            _ => Err(UnsupportedLanguage(s.to_string())),
        }
    }
}

/// Content category derived from the free-text subject. Never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ContentCategory {
    Mathematics,
    Science,
    SocialStudies,
    Other,
}

/// An uploaded chapter document. The bytes are carried but never parsed.
#[derive(Debug, Clone)]
pub struct SourceDocument {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

/// A validated notes request. At least one of `chapter_title` and `source_document`
/// is present; the HTTP boundary rejects requests with neither.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub class_level: u8,
    pub subject: String,
    pub chapter_title: Option<String>,
    pub source_document: Option<SourceDocument>,
    pub language: Language,
}

/// One heading of the notes with its bullet points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    #[serde(rename = "number")]
    pub ordinal: u32,
    pub title: String,
    #[serde(rename = "points")]
    pub bullet_points: Vec<String>,
}

/// The structured study notes returned to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedDocument {
    pub title: String,
    #[serde(rename = "headings")]
    pub sections: Vec<Section>,
    pub conclusion: String,
    pub keywords: Vec<String>,
}
