//! Hybrid recommendations of a first programming language.
//!
//! This crate provides:
//! - Typed vocabularies for languages and the three learner dimensions
//! - A static knowledge base and a forward-chaining rule engine over it
//! - A multinomial naive Bayes probability scorer trained on labeled data
//! - A weighted blender that ranks candidates, plus explanations and
//!   descriptive language records

pub mod classifier;
pub mod info;
pub mod knowledge;
pub mod recommend;
pub mod rules;
pub mod types;

pub use classifier::{
    Dataset, ModelSummary, ProbabilityScorer, ScorerError, TrainReport, FALLBACK_SCORE,
    UNKNOWN_CLASS_SCORE,
};
pub use info::{language_info, LanguageInfo};
pub use knowledge::{KnowledgeBase, KnowledgeError};
pub use recommend::{
    blend, explain_decision, explain_formula, explain_probability, summarize_recommendations,
    RankedLanguage, Recommendation, Recommender, ScoreBreakdown, PROBABILITY_WEIGHT, RULE_WEIGHT,
};
pub use rules::{Inference, RuleEngine};
pub use types::{
    CareerGoal, DifficultyTier, Feature, Industry, Language, LearnerProfile, ParseValueError,
    Priority, RuleKind,
};
