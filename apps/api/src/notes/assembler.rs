//! Section assembly — turns a category and request parameters into the four
//! fixed-order sections of a notes document.

use crate::notes::models::{ContentCategory, Language, Section};
use crate::notes::templates::{
    chapter_placeholder, fill, section_template, title_template, SECTION_ORDER,
};

/// Returns the chapter title to template with, substituting the language-aware
/// placeholder when only a document was supplied.
pub fn resolve_chapter_title(chapter_title: Option<&str>, language: Language) -> String {
    chapter_title
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| chapter_placeholder(language))
        .to_string()
}

/// Renders the document title for a resolved chapter title.
pub fn document_title(chapter_title: &str, language: Language) -> String {
    title_template(language).replace("{chapter}", chapter_title)
}

/// Builds Introduction, the two category sections and Important Points, numbered 1–4.
pub fn assemble(
    category: ContentCategory,
    chapter_title: &str,
    class_level: u8,
    subject: &str,
    language: Language,
) -> Vec<Section> {
    SECTION_ORDER
        .iter()
        .enumerate()
        .map(|(i, role)| {
            let template = section_template(category, *role, language);
            Section {
                ordinal: i as u32 + 1,
                title: fill(template.title, chapter_title, class_level, subject),
                bullet_points: template
                    .points
                    .iter()
                    .map(|p| fill(p, chapter_title, class_level, subject))
                    .collect(),
            }
        })
        .collect()
}
