//! Static descriptive records for each language.

use crate::knowledge::{builtin_tier, tier_reasoning};
use crate::types::{DifficultyTier, Industry, Language};
use serde::Serialize;

/// Descriptive information about a language, optionally focused on an
/// industry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LanguageInfo {
    pub language: Language,
    pub description: &'static str,
    /// Typical use case per industry. Industries without an entry are absent.
    pub use_cases: Vec<(Industry, &'static str)>,
    pub pros: &'static [&'static str],
    pub cons: &'static [&'static str],
    /// Entry-level salary band.
    pub avg_salary: &'static str,
    pub learning_time: &'static str,
    pub resources: &'static [&'static str],
    pub difficulty: DifficultyTier,
    /// Why the language sits in its difficulty tier.
    pub difficulty_reason: &'static str,
    /// Use case for the requested industry, when the language has one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry_specific: Option<&'static str>,
}

impl LanguageInfo {
    /// Use case for an industry, if the language has one.
    pub fn use_case(&self, industry: Industry) -> Option<&'static str> {
        self.use_cases
            .iter()
            .find(|(i, _)| *i == industry)
            .map(|(_, text)| *text)
    }
}

/// Look up the record for a language.
pub fn language_info(language: Language, industry: Option<Industry>) -> LanguageInfo {
    let mut info = catalog(language);
    info.industry_specific = industry.and_then(|i| info.use_case(i));
    info
}

fn catalog(language: Language) -> LanguageInfo {
    use Industry::*;
    let difficulty = builtin_tier(language);
    let difficulty_reason = tier_reasoning(difficulty);
    match language {
        Language::Python => LanguageInfo {
            language,
            description: "Bahasa pemrograman serbaguna dengan syntax yang mudah dipahami",
            use_cases: vec![
                (WebDevelopment, "Django, Flask untuk backend web application"),
                (DataScience, "NumPy, Pandas, Scikit-learn, TensorFlow"),
                (BackendDevelopment, "FastAPI, Django REST Framework"),
                (GameDevelopment, "Pygame untuk game 2D sederhana"),
            ],
            pros: &["Syntax sederhana", "Banyak library", "Komunitas besar", "Cocok pemula"],
            cons: &["Lebih lambat dari compiled language", "Mobile development terbatas"],
            avg_salary: "Rp 6-12 juta/bulan (entry-level)",
            learning_time: "3-6 bulan untuk dasar",
            resources: &[
                "Codecademy Python Course",
                "Python.org Documentation",
                "Real Python Tutorials",
            ],
            difficulty,
            difficulty_reason,
            industry_specific: None,
        },
        Language::JavaScript => LanguageInfo {
            language,
            description: "Bahasa untuk web development, frontend dan backend",
            use_cases: vec![
                (
                    WebDevelopment,
                    "React, Vue, Angular untuk frontend; Node.js untuk backend",
                ),
                (MobileDevelopment, "React Native untuk cross-platform mobile"),
                (BackendDevelopment, "Express.js, Nest.js"),
                (GameDevelopment, "Phaser, Three.js untuk HTML5 games"),
            ],
            pros: &["Essential untuk web", "Full-stack capability", "Ekosistem npm besar"],
            cons: &["Banyak framework berubah cepat", "Async programming butuh pemahaman"],
            avg_salary: "Rp 7-13 juta/bulan (entry-level)",
            learning_time: "4-7 bulan untuk dasar + framework",
            resources: &["MDN Web Docs", "JavaScript.info", "FreeCodeCamp"],
            difficulty,
            difficulty_reason,
            industry_specific: None,
        },
        Language::Php => LanguageInfo {
            language,
            description: "Bahasa server-side untuk web development",
            use_cases: vec![
                (WebDevelopment, "Laravel, CodeIgniter untuk web backend"),
                (BackendDevelopment, "WordPress, API development"),
            ],
            pros: &["Mudah deploy", "Banyak hosting support", "WordPress ecosystem"],
            cons: &["Reputasi legacy code", "Kurang populer di startup baru"],
            avg_salary: "Rp 5-10 juta/bulan (entry-level)",
            learning_time: "3-5 bulan untuk dasar",
            resources: &["PHP.net Documentation", "Laravel Documentation", "Laracasts"],
            difficulty,
            difficulty_reason,
            industry_specific: None,
        },
        Language::Java => LanguageInfo {
            language,
            description: "Bahasa OOP yang mature untuk enterprise dan Android",
            use_cases: vec![
                (MobileDevelopment, "Android native development"),
                (BackendDevelopment, "Spring Boot untuk enterprise backend"),
            ],
            pros: &["Mature ecosystem", "Banyak lowongan enterprise", "Strong typing"],
            cons: &["Verbose syntax", "Curve belajar lebih curam untuk pemula"],
            avg_salary: "Rp 7-14 juta/bulan (entry-level)",
            learning_time: "5-8 bulan untuk dasar + framework",
            resources: &["Oracle Java Tutorials", "Head First Java", "Udemy Java Courses"],
            difficulty,
            difficulty_reason,
            industry_specific: None,
        },
        Language::Kotlin => LanguageInfo {
            language,
            description: "Modern language untuk Android development",
            use_cases: vec![
                (MobileDevelopment, "Android native (officially supported)"),
                (BackendDevelopment, "Ktor framework"),
            ],
            pros: &["Modern syntax", "Interop dengan Java", "Official Android language"],
            cons: &["Lebih niche", "Komunitas lebih kecil dari Java"],
            avg_salary: "Rp 7-13 juta/bulan (entry-level)",
            learning_time: "4-6 bulan (jika sudah tahu Java)",
            resources: &[
                "Kotlin Official Docs",
                "Android Kotlin Fundamentals",
                "Kotlin Koans",
            ],
            difficulty,
            difficulty_reason,
            industry_specific: None,
        },
        Language::CSharp => LanguageInfo {
            language,
            description: "Bahasa Microsoft untuk game dan enterprise",
            use_cases: vec![
                (GameDevelopment, "Unity game engine"),
                (BackendDevelopment, ".NET Core untuk web services"),
            ],
            pros: &["Unity ecosystem", "Strong typing", "Good tooling (Visual Studio)"],
            cons: &["Lebih terbatas di luar Windows ecosystem", "Unity butuh dedikasi"],
            avg_salary: "Rp 7-13 juta/bulan (entry-level)",
            learning_time: "5-7 bulan untuk dasar + Unity",
            resources: &[
                "Microsoft C# Documentation",
                "Unity Learn Platform",
                "C# Programming Yellow Book",
            ],
            difficulty,
            difficulty_reason,
            industry_specific: None,
        },
        Language::Golang => LanguageInfo {
            language,
            description: "Modern language untuk backend performa tinggi",
            use_cases: vec![(BackendDevelopment, "Microservices, API, cloud services")],
            pros: &["Performa tinggi", "Concurrency built-in", "Compile cepat"],
            cons: &["Lebih kompleks untuk pemula", "Lowongan entry-level lebih sedikit"],
            avg_salary: "Rp 8-15 juta/bulan (entry-level, tapi sedikit posisi)",
            learning_time: "6-9 bulan untuk mahir",
            resources: &["Go by Example", "Tour of Go", "Go Official Documentation"],
            difficulty,
            difficulty_reason,
            industry_specific: None,
        },
    }
}
