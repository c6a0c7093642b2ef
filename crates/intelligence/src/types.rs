//! Closed vocabularies shared across the engine.
//!
//! Every user-facing dimension and every recommendable language is a tagged
//! enumeration keyed by its display name. Display names are the exact strings
//! used by the dataset and by callers (including the Indonesian labels for
//! career goals and priorities).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Error returned when a display name is not part of a vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind}: '{value}'")]
pub struct ParseValueError {
    /// Vocabulary that rejected the value (e.g. "industry").
    pub kind: &'static str,
    /// The rejected input.
    pub value: String,
}

macro_rules! vocabulary {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal {
            $( $(#[$vmeta:meta])* $variant:ident => $label:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl $name {
            /// Every member, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Display name used by the dataset and by callers.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ParseValueError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let trimmed = s.trim();
                $name::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str() == trimmed)
                    .ok_or_else(|| ParseValueError {
                        kind: $kind,
                        value: s.to_string(),
                    })
            }
        }
    };
}

vocabulary! {
    /// A recommendable programming language.
    ///
    /// Variants are declared in ascending display-name order, so the derived
    /// `Ord` doubles as the alphabetical tie-break used when ranking.
    Language, "language" {
        CSharp => "C#",
        Golang => "Golang",
        Java => "Java",
        JavaScript => "JavaScript",
        Kotlin => "Kotlin",
        Php => "PHP",
        Python => "Python",
    }
}

vocabulary! {
    /// Industry the learner wants to work in.
    Industry, "industry" {
        WebDevelopment => "Web Development",
        DataScience => "Data Science",
        MobileDevelopment => "Mobile Development",
        BackendDevelopment => "Backend Development",
        GameDevelopment => "Game Development",
    }
}

vocabulary! {
    /// Career goal of the learner.
    CareerGoal, "career goal" {
        /// Get hired quickly.
        KerjaCepat => "Kerja cepat",
        /// Internship.
        Magang => "Magang",
        Freelance => "Freelance",
        Startup => "Startup",
    }
}

vocabulary! {
    /// What the learner cares about most as a beginner.
    Priority, "priority" {
        /// Easy to learn.
        MudahDipelajari => "Mudah dipelajari",
        /// Many job openings.
        BanyakLowongan => "Banyak lowongan",
        /// High salary.
        GajiTinggi => "Gaji tinggi",
    }
}

vocabulary! {
    /// How approachable a language is for a beginner.
    DifficultyTier, "difficulty tier" {
        SangatCocok => "Sangat Cocok",
        Cocok => "Cocok",
        Menengah => "Menengah",
        PerluDedikasi => "Perlu Dedikasi",
    }
}

vocabulary! {
    /// Rule sets that record a justification when they fire.
    RuleKind, "rule" {
        Industry => "industry",
        CareerGoal => "career_goal",
        Priority => "priority",
    }
}

vocabulary! {
    /// Feature columns of the labeled dataset, in model order.
    Feature, "feature" {
        Industry => "industry",
        CareerGoal => "career_goal",
        Priority => "priority",
        JobDemand => "job_demand",
        LearningCurve => "learning_curve",
        SalaryLevel => "salary_level",
        CommunitySupport => "community_support",
    }
}

impl Feature {
    /// Auxiliary features are never asked from the user.
    pub fn is_auxiliary(&self) -> bool {
        matches!(
            self,
            Feature::JobDemand
                | Feature::LearningCurve
                | Feature::SalaryLevel
                | Feature::CommunitySupport
        )
    }
}

/// Name of the target column in the labeled dataset.
pub const TARGET_COLUMN: &str = "language";

/// The three user-supplied dimensions, each `None` when the raw input was not
/// recognized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearnerProfile {
    pub industry: Option<Industry>,
    pub career_goal: Option<CareerGoal>,
    pub priority: Option<Priority>,
}

impl LearnerProfile {
    /// Fully specified profile.
    pub fn new(industry: Industry, career_goal: CareerGoal, priority: Priority) -> Self {
        Self {
            industry: Some(industry),
            career_goal: Some(career_goal),
            priority: Some(priority),
        }
    }

    /// Parse raw inputs, leaving unrecognized dimensions empty.
    pub fn parse(industry: &str, career_goal: &str, priority: &str) -> Self {
        Self {
            industry: industry.parse().ok(),
            career_goal: career_goal.parse().ok(),
            priority: priority.parse().ok(),
        }
    }

    /// True when every dimension was recognized.
    pub fn is_complete(&self) -> bool {
        self.industry.is_some() && self.career_goal.is_some() && self.priority.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_order_matches_display_names() {
        let mut by_name: Vec<Language> = Language::ALL.to_vec();
        by_name.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        assert_eq!(by_name, Language::ALL.to_vec());
    }

    #[test]
    fn test_parse_round_trips_display_name() {
        for lang in Language::ALL {
            assert_eq!(lang.as_str().parse::<Language>().unwrap(), *lang);
        }
        for industry in Industry::ALL {
            assert_eq!(industry.to_string().parse::<Industry>().unwrap(), *industry);
        }
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        let err = "python".parse::<Language>().unwrap_err();
        assert_eq!(err.kind, "language");
        assert_eq!(err.value, "python");
        assert!("kerja cepat".parse::<CareerGoal>().is_err());
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(
            "  Gaji tinggi ".parse::<Priority>().unwrap(),
            Priority::GajiTinggi
        );
    }

    #[test]
    fn test_serde_uses_display_names() {
        let json = serde_json::to_string(&Language::CSharp).unwrap();
        assert_eq!(json, "\"C#\"");
        let parsed: CareerGoal = serde_json::from_str("\"Kerja cepat\"").unwrap();
        assert_eq!(parsed, CareerGoal::KerjaCepat);
    }

    #[test]
    fn test_feature_order_and_auxiliary_split() {
        let names: Vec<&str> = Feature::ALL.iter().map(|f| f.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "industry",
                "career_goal",
                "priority",
                "job_demand",
                "learning_curve",
                "salary_level",
                "community_support"
            ]
        );
        assert_eq!(Feature::ALL.iter().filter(|f| f.is_auxiliary()).count(), 4);
    }

    #[test]
    fn test_profile_parse_skips_unknown_values() {
        let profile = LearnerProfile::parse("Web Development", "Pensiun", "Gaji tinggi");
        assert_eq!(profile.industry, Some(Industry::WebDevelopment));
        assert_eq!(profile.career_goal, None);
        assert_eq!(profile.priority, Some(Priority::GajiTinggi));
        assert!(!profile.is_complete());
    }
}
