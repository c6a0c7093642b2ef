//! Forward-chaining rule inference over the knowledge base.
//!
//! Four ordered passes, no backtracking:
//! 1. industry admits candidates and seeds the base score
//! 2. career goal boosts candidates
//! 3. priority boosts candidates
//! 4. difficulty tier bonus for every candidate
//!
//! Raw totals are then rescaled so the best candidate scores 100.
//! Unrecognized inputs skip their rule silently; an unrecognized industry
//! therefore yields an empty result rather than an error.

use crate::knowledge::{BoostRule, KnowledgeBase, KnowledgeError, INDUSTRY_BASE_SCORE};
use crate::types::{LearnerProfile, RuleKind};
use crate::Language;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Result of running the rule passes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Inference {
    /// Languages admitted by the industry rule.
    pub candidates: BTreeSet<Language>,
    /// Normalized rule score per candidate (0 - 100).
    pub scores: BTreeMap<Language, f64>,
    /// Additive totals before normalization.
    pub raw_scores: BTreeMap<Language, f64>,
    /// Justification of every rule that fired (tier bonuses record none).
    pub explanations: BTreeMap<RuleKind, String>,
}

impl Inference {
    /// True when the industry rule admitted nothing.
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

/// Rule inference engine backed by a validated knowledge base.
#[derive(Debug, Clone)]
pub struct RuleEngine {
    kb: KnowledgeBase,
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self {
            kb: KnowledgeBase::builtin(),
        }
    }
}

impl RuleEngine {
    /// Create an engine over a custom knowledge base.
    pub fn new(kb: KnowledgeBase) -> Result<Self, KnowledgeError> {
        kb.validate()?;
        Ok(Self { kb })
    }

    /// The knowledge base backing this engine.
    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.kb
    }

    /// Run inference on raw dimension values.
    pub fn infer(&self, industry: &str, career_goal: &str, priority: &str) -> Inference {
        let profile = LearnerProfile::parse(industry, career_goal, priority);
        if profile.industry.is_none() {
            tracing::debug!(industry, "Unrecognized industry, no candidates");
        }
        if profile.career_goal.is_none() {
            tracing::debug!(career_goal, "Unrecognized career goal, rule skipped");
        }
        if profile.priority.is_none() {
            tracing::debug!(priority, "Unrecognized priority, rule skipped");
        }
        self.infer_profile(&profile)
    }

    /// Run inference on a typed profile.
    pub fn infer_profile(&self, profile: &LearnerProfile) -> Inference {
        let mut out = Inference::default();

        if let Some(rule) = profile.industry.and_then(|i| self.kb.industries.get(&i)) {
            out.candidates.extend(rule.languages.iter().copied());
            for lang in &rule.languages {
                out.raw_scores.insert(*lang, INDUSTRY_BASE_SCORE);
            }
            out.explanations
                .insert(RuleKind::Industry, rule.reasoning.to_string());
        }

        if let Some(rule) = profile.career_goal.and_then(|g| self.kb.career_goals.get(&g)) {
            apply_boost(&mut out, rule);
            out.explanations
                .insert(RuleKind::CareerGoal, rule.reasoning.to_string());
        }

        if let Some(rule) = profile.priority.and_then(|p| self.kb.priorities.get(&p)) {
            apply_boost(&mut out, rule);
            out.explanations
                .insert(RuleKind::Priority, rule.reasoning.to_string());
        }

        for rule in self.kb.tiers.values() {
            for lang in &rule.languages {
                if out.candidates.contains(lang) {
                    *out.raw_scores.entry(*lang).or_insert(0.0) += rule.score;
                }
            }
        }

        out.scores = normalize(&out.raw_scores);
        out
    }
}

fn apply_boost(out: &mut Inference, rule: &BoostRule) {
    for lang in &rule.boost {
        if out.candidates.contains(lang) {
            *out.raw_scores.entry(*lang).or_insert(0.0) += rule.score;
        }
    }
}

/// Rescale so the maximum becomes 100. Left unchanged when empty or when no
/// score is positive.
fn normalize(raw: &BTreeMap<Language, f64>) -> BTreeMap<Language, f64> {
    let max = raw.values().copied().fold(f64::NEG_INFINITY, f64::max);
    if raw.is_empty() || max <= 0.0 {
        return raw.clone();
    }
    raw.iter()
        .map(|(lang, score)| (*lang, score / max * 100.0))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledge::TierRule;
    use crate::types::{CareerGoal, DifficultyTier, Industry, Priority};

    fn engine() -> RuleEngine {
        RuleEngine::default()
    }

    #[test]
    fn test_web_development_raw_scores() {
        let inf = engine().infer("Web Development", "Kerja cepat", "Banyak lowongan");

        let expected: BTreeSet<Language> =
            [Language::JavaScript, Language::Python, Language::Php].into();
        assert_eq!(inf.candidates, expected);
        assert_eq!(inf.raw_scores[&Language::Python], 70.0);
        assert_eq!(inf.raw_scores[&Language::JavaScript], 70.0);
        assert_eq!(inf.raw_scores[&Language::Php], 60.0);
    }

    #[test]
    fn test_web_development_normalized_scores() {
        let inf = engine().infer("Web Development", "Kerja cepat", "Banyak lowongan");

        assert_eq!(inf.scores[&Language::Python], 100.0);
        assert_eq!(inf.scores[&Language::JavaScript], 100.0);
        assert!((inf.scores[&Language::Php] - 60.0 / 70.0 * 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_data_science_single_candidate() {
        let inf = engine().infer("Data Science", "Magang", "Mudah dipelajari");
        assert_eq!(inf.candidates.len(), 1);
        assert!(inf.candidates.contains(&Language::Python));
        assert_eq!(inf.scores[&Language::Python], 100.0);
    }

    #[test]
    fn test_boosts_never_add_candidates() {
        // Startup boosts Golang, which is not a Game Development candidate.
        let inf = engine().infer("Game Development", "Startup", "Gaji tinggi");
        assert!(!inf.candidates.contains(&Language::Golang));
        assert!(!inf.scores.contains_key(&Language::Golang));
        assert_eq!(inf.scores.len(), inf.candidates.len());
    }

    #[test]
    fn test_unknown_industry_yields_empty_result() {
        let inf = engine().infer("Embedded Systems", "Magang", "Gaji tinggi");
        assert!(inf.is_empty());
        assert!(inf.scores.is_empty());
        assert!(!inf.explanations.contains_key(&RuleKind::Industry));
        // The other rules still fire and record their justification.
        assert!(inf.explanations.contains_key(&RuleKind::CareerGoal));
        assert!(inf.explanations.contains_key(&RuleKind::Priority));
    }

    #[test]
    fn test_unknown_career_goal_is_skipped() {
        let inf = engine().infer("Web Development", "Pensiun", "Banyak lowongan");
        assert_eq!(inf.explanations.len(), 2);
        assert!(!inf.explanations.contains_key(&RuleKind::CareerGoal));
        // Python: 10 + 20 + 25, PHP: 10 + 20 + 15
        assert_eq!(inf.raw_scores[&Language::Python], 55.0);
        assert_eq!(inf.raw_scores[&Language::Php], 45.0);
    }

    #[test]
    fn test_tier_pass_records_no_explanation() {
        let inf = engine().infer("Backend Development", "Startup", "Gaji tinggi");
        let keys: Vec<RuleKind> = inf.explanations.keys().copied().collect();
        assert_eq!(
            keys,
            vec![RuleKind::Industry, RuleKind::CareerGoal, RuleKind::Priority]
        );
    }

    #[test]
    fn test_typed_and_raw_entry_points_agree() {
        let profile = LearnerProfile::new(
            Industry::MobileDevelopment,
            CareerGoal::Magang,
            Priority::MudahDipelajari,
        );
        assert_eq!(
            engine().infer_profile(&profile),
            engine().infer("Mobile Development", "Magang", "Mudah dipelajari")
        );
    }

    #[test]
    fn test_normalize_skips_non_positive_maximum() {
        let mut raw = BTreeMap::new();
        raw.insert(Language::Java, 0.0);
        raw.insert(Language::Kotlin, 0.0);
        assert_eq!(normalize(&raw), raw);
        assert!(normalize(&BTreeMap::new()).is_empty());
    }

    #[test]
    fn test_new_rejects_double_tier() {
        let mut kb = KnowledgeBase::builtin();
        kb.tiers.insert(
            DifficultyTier::PerluDedikasi,
            TierRule {
                languages: vec![Language::Golang, Language::Java],
                score: 5.0,
                reasoning: "",
            },
        );
        assert!(RuleEngine::new(kb).is_err());
    }

    #[test]
    fn test_custom_knowledge_base_without_entry_skips_rule() {
        let mut kb = KnowledgeBase::builtin();
        kb.industries.remove(&Industry::DataScience);
        let engine = RuleEngine::new(kb).unwrap();
        assert!(engine
            .infer("Data Science", "Magang", "Mudah dipelajari")
            .is_empty());
    }
}
