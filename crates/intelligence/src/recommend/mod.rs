//! Hybrid recommendations combining rule inference and probability scoring.

mod blend;
mod explainer;

pub use blend::{blend, PROBABILITY_WEIGHT, RULE_WEIGHT};
pub use explainer::{
    confidence_label, explain_decision, explain_formula, explain_probability,
    summarize_recommendations,
};

use crate::classifier::{ProbabilityScorer, ScorerError};
use crate::rules::RuleEngine;
use crate::types::RuleKind;
use crate::Language;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// One ranked candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedLanguage {
    pub language: Language,
    /// Blended score (0.0 - 100.0).
    pub score: f64,
    /// Breakdown of score components.
    pub breakdown: ScoreBreakdown,
}

/// Breakdown of a blended score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// Normalized rule score (0.0 - 100.0).
    pub rule_score: f64,
    /// Classifier probability as a percentage (0.0 - 100.0).
    pub probability_score: f64,
}

impl ScoreBreakdown {
    /// Weighted total.
    pub fn total(&self) -> f64 {
        self.rule_score * RULE_WEIGHT + self.probability_score * PROBABILITY_WEIGHT
    }
}

/// Full outcome of one recommendation request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub candidates: BTreeSet<Language>,
    /// Candidates, best first.
    pub ranked: Vec<RankedLanguage>,
    pub rule_scores: BTreeMap<Language, f64>,
    pub probability_scores: BTreeMap<Language, f64>,
    pub explanations: BTreeMap<RuleKind, String>,
    /// True when probability scores are the uniform fallback.
    #[serde(default)]
    pub fallback_used: bool,
}

impl Recommendation {
    /// Best candidate, if any.
    pub fn top(&self) -> Option<&RankedLanguage> {
        self.ranked.first()
    }

    pub fn is_empty(&self) -> bool {
        self.ranked.is_empty()
    }
}

/// Runs the full pipeline against a borrowed scorer.
///
/// The scorer is built once by the host (see the state crate's model store)
/// and shared by reference with every request.
#[derive(Debug, Clone)]
pub struct Recommender<'a> {
    engine: RuleEngine,
    scorer: &'a ProbabilityScorer,
}

impl<'a> Recommender<'a> {
    /// Create a recommender over the builtin knowledge base.
    pub fn new(scorer: &'a ProbabilityScorer) -> Self {
        Self {
            engine: RuleEngine::default(),
            scorer,
        }
    }

    /// Use a custom rule engine.
    pub fn with_engine(mut self, engine: RuleEngine) -> Self {
        self.engine = engine;
        self
    }

    pub fn engine(&self) -> &RuleEngine {
        &self.engine
    }

    pub fn scorer(&self) -> &ProbabilityScorer {
        self.scorer
    }

    /// Infer candidates, score them, and rank them.
    ///
    /// Fails only when the scorer has not been trained or loaded. An
    /// unrecognized industry yields an empty recommendation.
    pub fn recommend(
        &self,
        industry: &str,
        career_goal: &str,
        priority: &str,
    ) -> Result<Recommendation, ScorerError> {
        let inference = self.engine.infer(industry, career_goal, priority);
        let (probability_scores, fallback) = self.scorer.predict_proba_reporting_fallback(
            industry,
            career_goal,
            priority,
            &inference.candidates,
        )?;
        let fallback_used = fallback && !inference.candidates.is_empty();
        let ranked = blend(&inference.candidates, &inference.scores, &probability_scores);

        tracing::debug!(
            industry,
            career_goal,
            priority,
            candidates = ranked.len(),
            fallback_used,
            top = ranked.first().map(|r| r.language.as_str()),
            "Recommendation computed"
        );

        Ok(Recommendation {
            candidates: inference.candidates,
            ranked,
            rule_scores: inference.scores,
            probability_scores,
            explanations: inference.explanations,
            fallback_used,
        })
    }
}
