//! CLI handler for the `recommend` command.

use super::{open_model, resolve_settings};
use crate::cli::{OutputFormat, PathArgs};
use anyhow::{Context, Result};
use langpick_intelligence::{
    explain_decision, explain_formula, explain_probability, language_info,
    summarize_recommendations, Industry, RankedLanguage, Recommendation, Recommender,
};
use serde::Serialize;

/// Learner input echoed back with the result.
#[derive(Debug, Serialize)]
struct Input<'a> {
    industry: &'a str,
    career_goal: &'a str,
    priority: &'a str,
}

#[derive(Debug, Serialize)]
struct Report<'a> {
    input: Input<'a>,
    summary: String,
    fallback_used: bool,
    top: &'a [RankedLanguage],
    recommendation: &'a Recommendation,
}

/// Handle the `recommend` command.
pub(crate) fn handle_recommend_command(
    industry: String,
    career_goal: String,
    priority: String,
    top: usize,
    format: OutputFormat,
    paths: PathArgs,
) -> Result<()> {
    let settings = resolve_settings(paths)?;
    let loaded = open_model(&settings)?;
    let recommendation = Recommender::new(&loaded.scorer)
        .recommend(&industry, &career_goal, &priority)
        .context("recommendation failed")?;
    let fallback_used = recommendation.fallback_used;
    let summary = summarize_recommendations(recommendation.ranked.len(), fallback_used);
    let shown = &recommendation.ranked[..top.min(recommendation.ranked.len())];

    if format.is_json() {
        let report = Report {
            input: Input {
                industry: &industry,
                career_goal: &career_goal,
                priority: &priority,
            },
            summary,
            fallback_used,
            top: shown,
            recommendation: &recommendation,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Bidang Industri: {}", industry);
    println!("Tujuan Karier:   {}", career_goal);
    println!("Prioritas:       {}", priority);
    println!();
    println!("{}", summary);

    let Some(best) = recommendation.top() else {
        let known: Vec<&str> = Industry::ALL.iter().map(|i| i.as_str()).collect();
        println!("Bidang industri yang dikenal: {}", known.join(", "));
        return Ok(());
    };

    let industry_value = industry.parse::<Industry>().ok();
    println!();
    for (rank, item) in shown.iter().enumerate() {
        let info = language_info(item.language, industry_value);
        println!(
            "{}. {:<11} {:>5.1}/100  (rule {:.1}, ML {:.1})",
            rank + 1,
            item.language.as_str(),
            item.score,
            item.breakdown.rule_score,
            item.breakdown.probability_score
        );
        println!("   {}", info.description);
        if let Some(use_case) = info.industry_specific {
            println!("   Untuk {}: {}", industry, use_case);
        }
    }

    println!();
    println!("{}", explain_formula(&best.breakdown, best.score));
    println!();
    print!(
        "{}",
        explain_decision(
            best.language,
            &recommendation.rule_scores,
            &recommendation.explanations
        )
    );
    println!();
    println!("{}", explain_probability(best.breakdown.probability_score));
    Ok(())
}
