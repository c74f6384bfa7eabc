//! Bilingual content table for template-generated notes.
//!
//! All literal text lives here, keyed by language, category and section role.
//! Placeholders `{chapter}`, `{class}` and `{subject}` are filled by [`fill`].
//! The Hindi table is hand-authored, not translated at runtime.

use crate::notes::models::{ContentCategory, Language};

/// A section heading with its bullet templates.
#[derive(Debug)]
pub struct SectionTemplate {
    pub title: &'static str,
    pub points: &'static [&'static str],
}

/// Position of a section within the notes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionRole {
    Introduction,
    /// First category-specific section (concepts).
    CategoryCore,
    /// Second category-specific section (application).
    CategoryApplication,
    ImportantPoints,
}

/// The fixed order sections are emitted in.
pub const SECTION_ORDER: [SectionRole; 4] = [
    SectionRole::Introduction,
    SectionRole::CategoryCore,
    SectionRole::CategoryApplication,
    SectionRole::ImportantPoints,
];

struct LanguageTable {
    title: &'static str,
    chapter_placeholder: &'static str,
    conclusion: &'static str,
    introduction: SectionTemplate,
    important_points: SectionTemplate,
    mathematics: [SectionTemplate; 2],
    science: [SectionTemplate; 2],
    social_studies: [SectionTemplate; 2],
    other: [SectionTemplate; 2],
}

fn table(language: Language) -> &'static LanguageTable {
    match language {
        Language::English => &ENGLISH,
        Language::Hindi => &HINDI,
    }
}

pub fn section_template(
    category: ContentCategory,
    role: SectionRole,
    language: Language,
) -> &'static SectionTemplate {
    let table = table(language);
    let category_sections = match category {
        ContentCategory::Mathematics => &table.mathematics,
        ContentCategory::Science => &table.science,
        ContentCategory::SocialStudies => &table.social_studies,
        ContentCategory::Other => &table.other,
    };
    match role {
        SectionRole::Introduction => &table.introduction,
        SectionRole::CategoryCore => &category_sections[0],
        SectionRole::CategoryApplication => &category_sections[1],
        SectionRole::ImportantPoints => &table.important_points,
    }
}

/// Document title template; wraps `{chapter}`.
pub fn title_template(language: Language) -> &'static str {
    table(language).title
}

/// Stand-in chapter title used when only a document was uploaded.
pub fn chapter_placeholder(language: Language) -> &'static str {
    table(language).chapter_placeholder
}

pub fn conclusion_template(language: Language) -> &'static str {
    table(language).conclusion
}

/// Substitutes placeholders in a single left-to-right pass, so user text that itself
/// contains `{class}` or similar is inserted verbatim and never re-expanded.
pub fn fill(template: &str, chapter: &str, class_level: u8, subject: &str) -> String {
    let class = class_level.to_string();
    let placeholders: [(&str, &str); 3] = [
        ("{chapter}", chapter),
        ("{class}", class.as_str()),
        ("{subject}", subject),
    ];

    let mut out = String::with_capacity(template.len() + chapter.len() + subject.len());
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        match placeholders.iter().find(|(key, _)| tail.starts_with(key)) {
            Some((key, value)) => {
                out.push_str(value);
                rest = &tail[key.len()..];
            }
            None => {
                out.push('{');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

// ────────────────────────────────────────────────────────────────────────────
// English
// ────────────────────────────────────────────────────────────────────────────

static ENGLISH: LanguageTable = LanguageTable {
    title: "{chapter}",
    chapter_placeholder: "Chapter from PDF",
    conclusion: "In conclusion, {chapter} is an important chapter of Class {class} {subject}. \
        Students should understand its key concepts thoroughly, practise the related questions \
        and connect what they learn with examples from daily life. Regular revision of these \
        Diamond Notes will help in scoring well in examinations and in building a strong \
        foundation for higher classes.",
    introduction: SectionTemplate {
        title: "Introduction to {chapter}",
        points: &[
            "{chapter} is an important chapter of Class {class} {subject}.",
            "This chapter introduces the basic ideas and terms used throughout {subject}.",
            "Understanding {chapter} helps in connecting classroom learning with real-life situations.",
            "These notes follow the NCERT syllabus for Class {class}.",
        ],
    },
    important_points: SectionTemplate {
        title: "Important Points to Remember",
        points: &[
            "Revise the key terms and definitions of {chapter} regularly.",
            "Focus on the topics that are frequently asked in Class {class} examinations.",
            "Practise the NCERT textbook questions and exemplar problems.",
            "Make short notes and mind maps for quick revision.",
            "Clear doubts about {chapter} with your teacher before the examination.",
        ],
    },
    mathematics: [
        SectionTemplate {
            title: "Key Concepts and Formulas",
            points: &[
                "Learn the definitions and basic terms introduced in {chapter}.",
                "Write down every formula of {chapter} along with the meaning of each symbol.",
                "Understand how each formula is derived instead of memorising it.",
                "Note the conditions under which each formula or rule applies.",
                "Make a formula sheet for quick revision of Class {class} {subject}.",
            ],
        },
        SectionTemplate {
            title: "Solved Examples and Problem-Solving Steps",
            points: &[
                "Read the question carefully and identify what is given and what is to be found.",
                "Choose the correct formula or method from {chapter}.",
                "Solve step by step and write the units wherever required.",
                "Verify the answer by substituting it back or by estimation.",
                "Practise all NCERT exercise questions and examples of {chapter}.",
            ],
        },
    ],
    science: [
        SectionTemplate {
            title: "Scientific Principles",
            points: &[
                "Understand the main laws and principles explained in {chapter}.",
                "Learn the scientific terms and their definitions used in this chapter.",
                "Draw and label the important diagrams of {chapter}.",
                "Relate each principle to everyday phenomena around you.",
                "Remember the important equations, formulas and units where applicable.",
            ],
        },
        SectionTemplate {
            title: "Experiments and Observations",
            points: &[
                "Study the activities and experiments given in the NCERT textbook for {chapter}.",
                "Record the aim, materials, procedure and observation of each experiment.",
                "Learn how the conclusion of each experiment is drawn from its observations.",
                "Follow safety precautions while performing experiments in the laboratory.",
                "Link the experimental results to the principles of Class {class} {subject}.",
            ],
        },
    ],
    social_studies: [
        SectionTemplate {
            title: "Key Events and Facts",
            points: &[
                "Note the important events, dates and places mentioned in {chapter}.",
                "Learn about the key personalities and their contributions.",
                "Understand the important terms and concepts of {chapter}.",
                "Use maps and timelines to remember facts in order.",
                "Connect the facts of this chapter with other chapters of Class {class} {subject}.",
            ],
        },
        SectionTemplate {
            title: "Causes, Effects and Significance",
            points: &[
                "Understand the causes behind the major developments in {chapter}.",
                "Analyse the effects these developments had on society and people.",
                "Learn the significance of {chapter} in the present-day context.",
                "Compare the different viewpoints discussed in the chapter.",
                "Prepare short and long answers on causes and effects for examinations.",
            ],
        },
    ],
    other: [
        SectionTemplate {
            title: "Main Concepts",
            points: &[
                "Identify the main theme and central idea of {chapter}.",
                "Learn the important terms and definitions introduced in the chapter.",
                "Summarise each part of the chapter in your own words.",
                "Note the examples used to explain each concept.",
                "Relate the concepts to what you have already studied in {subject}.",
            ],
        },
        SectionTemplate {
            title: "Detailed Explanation",
            points: &[
                "Read {chapter} carefully and mark the important lines.",
                "Break down difficult ideas into smaller, simpler points.",
                "Write answers to the questions given at the end of the chapter.",
                "Discuss the chapter with classmates or teachers to clear doubts.",
                "Revise the chapter regularly to keep the concepts fresh.",
            ],
        },
    ],
};

// ────────────────────────────────────────────────────────────────────────────
// Hindi
// ────────────────────────────────────────────────────────────────────────────

static HINDI: LanguageTable = LanguageTable {
    title: "अध्याय: {chapter}",
    chapter_placeholder: "PDF से अध्याय",
    conclusion: "निष्कर्ष के रूप में, {chapter} कक्षा {class} {subject} का एक महत्वपूर्ण अध्याय है। \
        विद्यार्थियों को इसकी मुख्य अवधारणाओं को अच्छी तरह समझना चाहिए, संबंधित प्रश्नों का \
        अभ्यास करना चाहिए और सीखी गई बातों को दैनिक जीवन के उदाहरणों से जोड़ना चाहिए। \
        इन डायमंड नोट्स का नियमित दोहराव परीक्षा में अच्छे अंक लाने और आगे की कक्षाओं के लिए \
        मजबूत आधार बनाने में सहायक होगा।",
    introduction: SectionTemplate {
        title: "{chapter} का परिचय",
        points: &[
            "{chapter} कक्षा {class} {subject} का एक महत्वपूर्ण अध्याय है।",
            "यह अध्याय {subject} में उपयोग होने वाले मूल विचारों और शब्दों से परिचित कराता है।",
            "{chapter} को समझने से कक्षा की पढ़ाई को वास्तविक जीवन से जोड़ने में मदद मिलती है।",
            "ये नोट्स कक्षा {class} के NCERT पाठ्यक्रम पर आधारित हैं।",
        ],
    },
    important_points: SectionTemplate {
        title: "याद रखने योग्य महत्वपूर्ण बिंदु",
        points: &[
            "{chapter} के मुख्य शब्दों और परिभाषाओं का नियमित दोहराव करें।",
            "कक्षा {class} की परीक्षाओं में अक्सर पूछे जाने वाले विषयों पर ध्यान दें।",
            "NCERT पाठ्यपुस्तक के प्रश्नों और उदाहरण प्रश्नों का अभ्यास करें।",
            "त्वरित दोहराव के लिए संक्षिप्त नोट्स और माइंड मैप बनाएँ।",
            "परीक्षा से पहले {chapter} से जुड़ी शंकाएँ अपने शिक्षक से दूर करें।",
        ],
    },
    mathematics: [
        SectionTemplate {
            title: "मुख्य अवधारणाएँ और सूत्र",
            points: &[
                "{chapter} में दी गई परिभाषाओं और मूल शब्दों को सीखें।",
                "{chapter} के सभी सूत्र प्रत्येक चिह्न के अर्थ के साथ लिखें।",
                "सूत्रों को रटने के बजाय उनकी व्युत्पत्ति को समझें।",
                "ध्यान दें कि कोई सूत्र या नियम किन परिस्थितियों में लागू होता है।",
                "कक्षा {class} {subject} के त्वरित दोहराव के लिए सूत्र-सूची बनाएँ।",
            ],
        },
        SectionTemplate {
            title: "हल किए गए उदाहरण और प्रश्न हल करने के चरण",
            points: &[
                "प्रश्न को ध्यान से पढ़ें और पहचानें कि क्या दिया गया है और क्या ज्ञात करना है।",
                "{chapter} से सही सूत्र या विधि चुनें।",
                "चरणबद्ध तरीके से हल करें और जहाँ आवश्यक हो इकाइयाँ लिखें।",
                "उत्तर को वापस रखकर या अनुमान द्वारा उसकी जाँच करें।",
                "{chapter} के सभी NCERT अभ्यास प्रश्नों और उदाहरणों का अभ्यास करें।",
            ],
        },
    ],
    science: [
        SectionTemplate {
            title: "वैज्ञानिक सिद्धांत",
            points: &[
                "{chapter} में समझाए गए मुख्य नियमों और सिद्धांतों को समझें।",
                "इस अध्याय में प्रयुक्त वैज्ञानिक शब्दों और उनकी परिभाषाओं को सीखें।",
                "{chapter} के महत्वपूर्ण चित्र बनाएँ और उन्हें नामांकित करें।",
                "प्रत्येक सिद्धांत को अपने आस-पास की दैनिक घटनाओं से जोड़ें।",
                "जहाँ लागू हो, महत्वपूर्ण समीकरण, सूत्र और इकाइयाँ याद रखें।",
            ],
        },
        SectionTemplate {
            title: "प्रयोग और प्रेक्षण",
            points: &[
                "{chapter} के लिए NCERT पाठ्यपुस्तक में दी गई गतिविधियों और प्रयोगों का अध्ययन करें।",
                "प्रत्येक प्रयोग का उद्देश्य, सामग्री, विधि और प्रेक्षण लिखें।",
                "सीखें कि प्रेक्षणों से प्रत्येक प्रयोग का निष्कर्ष कैसे निकाला जाता है।",
                "प्रयोगशाला में प्रयोग करते समय सुरक्षा सावधानियों का पालन करें।",
                "प्रयोगों के परिणामों को कक्षा {class} {subject} के सिद्धांतों से जोड़ें।",
            ],
        },
    ],
    social_studies: [
        SectionTemplate {
            title: "मुख्य घटनाएँ और तथ्य",
            points: &[
                "{chapter} में वर्णित महत्वपूर्ण घटनाओं, तिथियों और स्थानों को नोट करें।",
                "प्रमुख व्यक्तियों और उनके योगदान के बारे में जानें।",
                "{chapter} के महत्वपूर्ण शब्दों और अवधारणाओं को समझें।",
                "तथ्यों को क्रम से याद रखने के लिए मानचित्र और समय-रेखा का उपयोग करें।",
                "इस अध्याय के तथ्यों को कक्षा {class} {subject} के अन्य अध्यायों से जोड़ें।",
            ],
        },
        SectionTemplate {
            title: "कारण, प्रभाव और महत्व",
            points: &[
                "{chapter} में हुए प्रमुख परिवर्तनों के कारणों को समझें।",
                "इन परिवर्तनों के समाज और लोगों पर पड़े प्रभावों का विश्लेषण करें।",
                "वर्तमान संदर्भ में {chapter} के महत्व को जानें।",
                "अध्याय में चर्चा किए गए विभिन्न दृष्टिकोणों की तुलना करें।",
                "परीक्षा के लिए कारण और प्रभाव पर लघु और दीर्घ उत्तर तैयार करें।",
            ],
        },
    ],
    other: [
        SectionTemplate {
            title: "मुख्य अवधारणाएँ",
            points: &[
                "{chapter} के मुख्य विषय और केंद्रीय विचार को पहचानें।",
                "अध्याय में दिए गए महत्वपूर्ण शब्दों और परिभाषाओं को सीखें।",
                "अध्याय के प्रत्येक भाग का सारांश अपने शब्दों में लिखें।",
                "प्रत्येक अवधारणा को समझाने के लिए दिए गए उदाहरणों को नोट करें।",
                "इन अवधारणाओं को {subject} में पहले पढ़ी गई बातों से जोड़ें।",
            ],
        },
        SectionTemplate {
            title: "विस्तृत व्याख्या",
            points: &[
                "{chapter} को ध्यान से पढ़ें और महत्वपूर्ण पंक्तियों को रेखांकित करें।",
                "कठिन विचारों को छोटे और सरल बिंदुओं में बाँटें।",
                "अध्याय के अंत में दिए गए प्रश्नों के उत्तर लिखें।",
                "शंकाओं को दूर करने के लिए सहपाठियों या शिक्षकों से चर्चा करें।",
                "अवधारणाओं को याद रखने के लिए अध्याय का नियमित दोहराव करें।",
            ],
        },
    ],
};
