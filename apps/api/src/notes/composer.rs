//! Conclusion paragraph and keyword list.

use crate::notes::models::{ContentCategory, Language};
use crate::notes::templates::{conclusion_template, fill};

const BASE_KEYWORDS: &[&str] = &["NCERT", "Education", "Study Notes", "Diamond Notes"];

fn category_keywords(category: ContentCategory) -> &'static [&'static str] {
    match category {
        ContentCategory::Mathematics => &[
            "Formula",
            "Calculation",
            "Problem Solving",
            "Mathematical Concepts",
        ],
        ContentCategory::Science => &[
            "Experiment",
            "Scientific Method",
            "Observation",
            "Scientific Concepts",
        ],
        ContentCategory::SocialStudies => &[
            "Historical Events",
            "Geography",
            "Civics",
            "Social Concepts",
        ],
        ContentCategory::Other => &[],
    }
}

pub fn compose_conclusion(
    chapter_title: &str,
    subject: &str,
    class_level: u8,
    language: Language,
) -> String {
    fill(conclusion_template(language), chapter_title, class_level, subject)
}

/// `[chapter, subject, "Class N", NCERT, Education, Study Notes, Diamond Notes]`
/// followed by the category's extra terms. Duplicates are kept.
pub fn compose_keywords(
    chapter_title: &str,
    subject: &str,
    class_level: u8,
    category: ContentCategory,
) -> Vec<String> {
    let mut keywords = vec![
        chapter_title.to_string(),
        subject.to_string(),
        format!("Class {class_level}"),
    ];
    keywords.extend(BASE_KEYWORDS.iter().map(|k| k.to_string()));
    keywords.extend(category_keywords(category).iter().map(|k| k.to_string()));
    keywords
}
