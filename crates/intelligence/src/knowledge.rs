//! Hand-authored knowledge base for the rule engine.
//!
//! Four rule sets:
//! - industry: the only filter; admits candidate languages with a base score
//! - career goal: boosts languages that are already candidates
//! - priority: boosts languages that are already candidates
//! - difficulty tier: beginner-friendliness bonus, one tier per language

use crate::types::{CareerGoal, DifficultyTier, Industry, Language, Priority};
use serde::Serialize;
use std::collections::BTreeMap;

/// Base score seeded for every language admitted by the industry rule.
pub const INDUSTRY_BASE_SCORE: f64 = 10.0;
/// Boost added by a matching career goal rule.
pub const CAREER_GOAL_BOOST: f64 = 15.0;
/// Boost added by a matching priority rule.
pub const PRIORITY_BOOST: f64 = 20.0;

/// Knowledge base validation failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum KnowledgeError {
    /// A language is listed under more than one difficulty tier.
    #[error("{language} appears in difficulty tiers {first} and {second}")]
    LanguageInMultipleTiers {
        language: Language,
        first: DifficultyTier,
        second: DifficultyTier,
    },
    /// A language has no difficulty tier.
    #[error("{language} has no difficulty tier")]
    LanguageWithoutTier { language: Language },
}

/// Industry rule: admits candidates.
#[derive(Debug, Clone, Serialize)]
pub struct IndustryRule {
    pub languages: Vec<Language>,
    pub reasoning: &'static str,
}

/// Career goal or priority rule: boosts existing candidates.
#[derive(Debug, Clone, Serialize)]
pub struct BoostRule {
    pub boost: Vec<Language>,
    pub score: f64,
    /// Languages a beginner with this preference should steer away from.
    /// Informational only.
    pub avoid: Vec<Language>,
    pub reasoning: &'static str,
}

/// Difficulty tier rule.
#[derive(Debug, Clone, Serialize)]
pub struct TierRule {
    pub languages: Vec<Language>,
    pub score: f64,
    pub reasoning: &'static str,
}

/// All four rule sets, keyed by their enumerations.
///
/// Lookups that miss are skipped by the engine, so a partial base is usable
/// but never faults.
#[derive(Debug, Clone, Default, Serialize)]
pub struct KnowledgeBase {
    pub industries: BTreeMap<Industry, IndustryRule>,
    pub career_goals: BTreeMap<CareerGoal, BoostRule>,
    pub priorities: BTreeMap<Priority, BoostRule>,
    pub tiers: BTreeMap<DifficultyTier, TierRule>,
}

impl KnowledgeBase {
    /// The reference knowledge base.
    pub fn builtin() -> Self {
        Self {
            industries: Industry::ALL
                .iter()
                .map(|i| (*i, industry_rule(*i)))
                .collect(),
            career_goals: CareerGoal::ALL
                .iter()
                .map(|g| (*g, career_goal_rule(*g)))
                .collect(),
            priorities: Priority::ALL
                .iter()
                .map(|p| (*p, priority_rule(*p)))
                .collect(),
            tiers: DifficultyTier::ALL
                .iter()
                .map(|t| (*t, tier_rule(*t)))
                .collect(),
        }
    }

    /// Check that every language belongs to exactly one difficulty tier.
    pub fn validate(&self) -> Result<(), KnowledgeError> {
        let mut seen: BTreeMap<Language, DifficultyTier> = BTreeMap::new();
        for (tier, rule) in &self.tiers {
            for lang in &rule.languages {
                if let Some(first) = seen.insert(*lang, *tier) {
                    return Err(KnowledgeError::LanguageInMultipleTiers {
                        language: *lang,
                        first,
                        second: *tier,
                    });
                }
            }
        }
        if let Some(missing) = Language::ALL.iter().find(|l| !seen.contains_key(*l)) {
            return Err(KnowledgeError::LanguageWithoutTier {
                language: *missing,
            });
        }
        Ok(())
    }

    /// Difficulty tier of a language, if the base assigns one.
    pub fn tier_of(&self, language: Language) -> Option<DifficultyTier> {
        self.tiers
            .iter()
            .find(|(_, rule)| rule.languages.contains(&language))
            .map(|(tier, _)| *tier)
    }
}

fn industry_rule(industry: Industry) -> IndustryRule {
    use Language::*;
    let (languages, reasoning) = match industry {
        Industry::WebDevelopment => (
            vec![JavaScript, Python, Php],
            "Bahasa dengan framework web populer dan banyak lowongan",
        ),
        Industry::DataScience => (
            vec![Python],
            "Standar industri untuk data analysis, ML, dan AI",
        ),
        Industry::MobileDevelopment => (
            vec![JavaScript, Kotlin, Java],
            "React Native (JS), Flutter (JS), dan Android native",
        ),
        Industry::BackendDevelopment => (
            vec![Python, JavaScript, Java, Golang, Php],
            "Bahasa server-side yang banyak digunakan di industri",
        ),
        Industry::GameDevelopment => (
            vec![CSharp, JavaScript],
            "Unity (C#) dan HTML5 games (JavaScript)",
        ),
    };
    IndustryRule {
        languages,
        reasoning,
    }
}

fn career_goal_rule(goal: CareerGoal) -> BoostRule {
    use Language::*;
    let (boost, reasoning) = match goal {
        CareerGoal::KerjaCepat => (
            vec![JavaScript, Python, Php, Java],
            "Banyak lowongan entry-level di job portal",
        ),
        CareerGoal::Magang => (
            vec![Python, JavaScript, Java, Kotlin],
            "Populer di program magang tech companies",
        ),
        CareerGoal::Freelance => (
            vec![JavaScript, Php, Python],
            "Banyak project web development dan automation",
        ),
        CareerGoal::Startup => (
            vec![JavaScript, Python, Golang],
            "Tech stack modern yang digunakan startup",
        ),
    };
    BoostRule {
        boost,
        score: CAREER_GOAL_BOOST,
        avoid: Vec::new(),
        reasoning,
    }
}

fn priority_rule(priority: Priority) -> BoostRule {
    use Language::*;
    let (boost, avoid, reasoning) = match priority {
        Priority::MudahDipelajari => (
            vec![Python, JavaScript],
            vec![Java, CSharp, Golang],
            "Syntax sederhana, banyak tutorial pemula",
        ),
        Priority::BanyakLowongan => (
            vec![JavaScript, Python, Java, Php],
            Vec::new(),
            "Permintaan industri tinggi di Indonesia",
        ),
        Priority::GajiTinggi => (
            vec![Python, JavaScript, Golang],
            Vec::new(),
            "Tren gaji entry-level 2024-2025",
        ),
    };
    BoostRule {
        boost,
        score: PRIORITY_BOOST,
        avoid,
        reasoning,
    }
}

/// Difficulty tier of a language in the builtin base.
pub fn builtin_tier(language: Language) -> DifficultyTier {
    match language {
        Language::Python | Language::JavaScript => DifficultyTier::SangatCocok,
        Language::Php | Language::Kotlin => DifficultyTier::Cocok,
        Language::Java | Language::CSharp => DifficultyTier::Menengah,
        Language::Golang => DifficultyTier::PerluDedikasi,
    }
}

/// Justification of a difficulty tier.
pub fn tier_reasoning(tier: DifficultyTier) -> &'static str {
    match tier {
        DifficultyTier::SangatCocok => "Syntax intuitif, curve belajar landai",
        DifficultyTier::Cocok => "Cukup mudah dengan dokumentasi baik",
        DifficultyTier::Menengah => "Butuh pemahaman OOP yang solid",
        DifficultyTier::PerluDedikasi => "Konsep concurrent programming perlu waktu",
    }
}

fn tier_rule(tier: DifficultyTier) -> TierRule {
    let score = match tier {
        DifficultyTier::SangatCocok => 25.0,
        DifficultyTier::Cocok => 15.0,
        DifficultyTier::Menengah => 10.0,
        DifficultyTier::PerluDedikasi => 5.0,
    };
    let reasoning = tier_reasoning(tier);
    TierRule {
        languages: Language::ALL
            .iter()
            .copied()
            .filter(|l| builtin_tier(*l) == tier)
            .collect(),
        score,
        reasoning,
    }
}
