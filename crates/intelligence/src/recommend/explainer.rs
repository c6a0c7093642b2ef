//! Generate human-readable explanations for recommendations.
//!
//! Output is Markdown-flavored Indonesian text, matching the labels used by
//! the knowledge base.

use super::{ScoreBreakdown, PROBABILITY_WEIGHT, RULE_WEIGHT};
use crate::types::RuleKind;
use crate::Language;
use std::collections::BTreeMap;

/// Explain why the rule engine favored a language.
///
/// Lists the justification of every rule that fired, in rule order.
pub fn explain_decision(
    language: Language,
    rule_scores: &BTreeMap<Language, f64>,
    explanations: &BTreeMap<RuleKind, String>,
) -> String {
    let score = rule_scores.get(&language).copied().unwrap_or(0.0);

    let mut out = format!("**Mengapa {}?**\n\n", language);
    out.push_str(&format!("Skor Sistem Pakar: {:.1}/100\n\n", score));
    out.push_str("**Alasan Rekomendasi:**\n");
    for reason in explanations.values() {
        out.push_str(&format!("- {}\n", reason));
    }
    out
}

/// Confidence label for a probability percentage.
pub fn confidence_label(probability: f64) -> &'static str {
    if probability > 70.0 {
        "Tinggi"
    } else if probability > 40.0 {
        "Sedang"
    } else {
        "Rendah"
    }
}

/// Explain a classifier probability for a language.
pub fn explain_probability(probability: f64) -> String {
    let verdict = if probability > 70.0 {
        "Model sangat yakin bahwa bahasa ini cocok berdasarkan data industri historis."
    } else if probability > 40.0 {
        "Model menunjukkan bahasa ini cukup relevan dengan kebutuhan Anda."
    } else {
        "Model menunjukkan relevansi moderat. Pertimbangkan opsi lain juga."
    };

    format!(
        "**Analisis Machine Learning:**\n\n\
         Probabilitas: {:.1}%\n\
         Confidence Level: {}\n\n\
         {}",
        probability,
        confidence_label(probability),
        verdict
    )
}

/// Render the blending formula with concrete values.
pub fn explain_formula(breakdown: &ScoreBreakdown, total: f64) -> String {
    format!(
        "Skor Total = (Skor Rule-Based × {rw}) + (Skor ML × {pw})\n\
         \x20          = ({:.1} × {rw}) + ({:.1} × {pw})\n\
         \x20          = {:.1}",
        breakdown.rule_score,
        breakdown.probability_score,
        total,
        rw = RULE_WEIGHT,
        pw = PROBABILITY_WEIGHT,
    )
}

/// Generate a summary of a recommendation run.
pub fn summarize_recommendations(count: usize, fallback_used: bool) -> String {
    if count == 0 {
        return "Tidak ada kandidat untuk bidang industri ini".to_string();
    }

    let mut parts = vec![format!("Ditemukan {} kandidat bahasa pemrograman", count)];
    if fallback_used {
        parts.push("skor probabilitas memakai nilai cadangan".to_string());
    }
    parts.join(", ")
}
