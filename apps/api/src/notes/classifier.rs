//! Subject classification — maps a free-text subject onto a content category.

use crate::notes::models::ContentCategory;

/// Keyword table in priority order. The first category with a matching keyword wins,
/// so "Political Science" is classified as Science.
const CATEGORY_KEYWORDS: &[(ContentCategory, &[&str])] = &[
    (
        ContentCategory::Mathematics,
        &["mathematics", "maths", "math", "गणित"],
    ),
    (
        ContentCategory::Science,
        &[
            "science",
            "physics",
            "chemistry",
            "biology",
            "विज्ञान",
            "भौतिक",
            "रसायन",
            "जीव",
        ],
    ),
    (
        ContentCategory::SocialStudies,
        &[
            "history",
            "geography",
            "political",
            "economics",
            "civics",
            "social",
            "इतिहास",
            "भूगोल",
            "राजनीति",
            "अर्थशास्त्र",
            "नागरिक",
            "सामाजिक",
        ],
    ),
];

/// Classifies a subject by case-insensitive substring match. Total: anything that
/// matches no keyword, including the empty string, is `Other`.
pub fn classify(subject: &str) -> ContentCategory {
    let subject = subject.to_lowercase();
    CATEGORY_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| subject.contains(k)))
        .map(|(category, _)| *category)
        .unwrap_or(ContentCategory::Other)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chemistry_in_any_case_is_science() {
        for subject in ["chemistry", "Chemistry", "CHEMISTRY", "Organic cHeMiStRy II"] {
            assert_eq!(classify(subject), ContentCategory::Science, "{subject}");
        }
    }

    #[test]
    fn test_math_variants() {
        assert_eq!(classify("Mathematics"), ContentCategory::Mathematics);
        assert_eq!(classify("maths"), ContentCategory::Mathematics);
        assert_eq!(classify("Applied Math"), ContentCategory::Mathematics);
        assert_eq!(classify("गणित"), ContentCategory::Mathematics);
    }

    #[test]
    fn test_social_studies_subjects() {
        assert_eq!(classify("History"), ContentCategory::SocialStudies);
        assert_eq!(classify("Geography"), ContentCategory::SocialStudies);
        assert_eq!(classify("Economics"), ContentCategory::SocialStudies);
        assert_eq!(classify("Social Studies"), ContentCategory::SocialStudies);
        assert_eq!(classify("इतिहास"), ContentCategory::SocialStudies);
    }

    #[test]
    fn test_hindi_science_subjects() {
        assert_eq!(classify("विज्ञान"), ContentCategory::Science);
        assert_eq!(classify("रसायन विज्ञान"), ContentCategory::Science);
    }

    #[test]
    fn test_priority_order_mathematics_before_science() {
        // Matches both tables; Mathematics is checked first.
        assert_eq!(classify("Mathematics and Science"), ContentCategory::Mathematics);
        assert_eq!(classify("Political Science"), ContentCategory::Science);
    }

    #[test]
    fn test_unknown_subjects_are_other() {
        assert_eq!(classify("English Literature"), ContentCategory::Other);
        assert_eq!(classify("Sanskrit"), ContentCategory::Other);
        assert_eq!(classify("Art"), ContentCategory::Other);
        assert_eq!(classify(""), ContentCategory::Other);
    }
}
