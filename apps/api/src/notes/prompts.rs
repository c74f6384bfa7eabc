// LLM prompt constants for assisted notes generation.
// Reuses the JSON-only fragment from llm_client::prompts.

use crate::notes::models::{ContentCategory, Language};

/// System prompt for notes generation. Append `JSON_ONLY_SYSTEM` before sending.
pub const NOTES_SYSTEM: &str = "You are an experienced teacher who writes clear, \
    exam-oriented study notes for Indian school students following the NCERT syllabus.";

/// Notes generation prompt template.
/// Replace: {class}, {subject}, {chapter}, {category_guidance}, {language_instruction},
///          {source_note}
pub const NOTES_PROMPT_TEMPLATE: &str = r#"Create Diamond Notes (structured study notes) for the following chapter.

Class: {class}
Subject: {subject}
Chapter: {chapter}
{source_note}
Subject guidance: {category_guidance}

{language_instruction}

Return a JSON object with this EXACT schema (no extra fields):
{
  "title": "Chapter title",
  "headings": [
    {
      "number": 1,
      "title": "Introduction to the chapter",
      "points": ["Point one", "Point two", "Point three", "Point four"]
    }
  ],
  "conclusion": "A short paragraph summarising the chapter",
  "keywords": ["keyword one", "keyword two"]
}

HARD RULES:
1. Produce exactly 4 headings numbered 1 to 4: an introduction, two subject-specific headings, and "Important Points to Remember"
2. Each heading has between 2 and 6 points; each point is one complete sentence
3. Content must be accurate for the Class {class} NCERT syllabus
4. Keywords must include the chapter title and the subject"#;

/// Category hint embedded in the prompt.
pub fn category_guidance(category: ContentCategory) -> &'static str {
    match category {
        ContentCategory::Mathematics => {
            "Focus on definitions, formulas with the meaning of each symbol, and step-by-step solved examples."
        }
        ContentCategory::Science => {
            "Focus on scientific principles, laws, diagrams to remember, experiments and their observations."
        }
        ContentCategory::SocialStudies => {
            "Focus on key events, dates, places and personalities, and on causes, effects and significance."
        }
        ContentCategory::Other => {
            "Focus on the main theme, important terms, and a clear explanation of each concept."
        }
    }
}

pub fn language_instruction(language: Language) -> &'static str {
    match language {
        Language::English => "Write every title, point, conclusion and keyword in English.",
        Language::Hindi => {
            "Write every title, point and the conclusion in Hindi (Devanagari script). \
            Prefix the document title with \"अध्याय: \". Keywords may stay in English."
        }
    }
}
