//! Weighted combination of rule and probability scores.

use super::{RankedLanguage, ScoreBreakdown};
use crate::Language;
use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

/// Weight of the normalized rule score.
pub const RULE_WEIGHT: f64 = 0.6;
/// Weight of the probability percentage.
pub const PROBABILITY_WEIGHT: f64 = 0.4;

/// Rank candidates by `rule * 0.6 + probability * 0.4`.
///
/// Missing entries count as zero. Ties are broken by language name.
pub fn blend(
    candidates: &BTreeSet<Language>,
    rule_scores: &BTreeMap<Language, f64>,
    probability_scores: &BTreeMap<Language, f64>,
) -> Vec<RankedLanguage> {
    let mut ranked: Vec<RankedLanguage> = candidates
        .iter()
        .map(|lang| {
            let breakdown = ScoreBreakdown {
                rule_score: rule_scores.get(lang).copied().unwrap_or(0.0),
                probability_score: probability_scores.get(lang).copied().unwrap_or(0.0),
            };
            RankedLanguage {
                language: *lang,
                score: breakdown.total(),
                breakdown,
            }
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.language.cmp(&b.language))
    });
    ranked
}
