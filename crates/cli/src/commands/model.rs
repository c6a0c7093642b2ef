//! CLI handler for the `model` command.

use super::{open_model, resolve_settings};
use crate::cli::{OutputFormat, PathArgs};
use anyhow::Result;
use langpick_state::ModelOrigin;

/// Handle the `model` command.
pub(crate) fn handle_model_command(paths: PathArgs, format: OutputFormat) -> Result<()> {
    let settings = resolve_settings(paths)?;
    let loaded = open_model(&settings)?;
    let Some(summary) = loaded.scorer.model_summary() else {
        anyhow::bail!("model is not trained");
    };

    if format.is_json() {
        #[derive(serde::Serialize)]
        struct Status<'a> {
            model_path: &'a std::path::Path,
            freshly_trained: bool,
            #[serde(flatten)]
            summary: langpick_intelligence::ModelSummary,
        }
        let status = Status {
            model_path: &settings.model_path,
            freshly_trained: matches!(loaded.origin, ModelOrigin::Trained(_)),
            summary,
        };
        println!("{}", serde_json::to_string_pretty(&status)?);
        return Ok(());
    }

    println!("Model: {}", summary.model_type);
    println!("  Path:     {}", settings.model_path.display());
    match &loaded.origin {
        ModelOrigin::Loaded => println!("  Origin:   loaded from bundle"),
        ModelOrigin::Trained(report) => println!(
            "  Origin:   trained now ({} samples, {:.1}% accuracy)",
            report.n_samples,
            report.accuracy * 100.0
        ),
    }
    let features: Vec<&str> = summary.features.iter().map(|f| f.as_str()).collect();
    let classes: Vec<&str> = summary.classes.iter().map(|l| l.as_str()).collect();
    println!("  Features: {} ({})", summary.n_features, features.join(", "));
    println!("  Classes:  {} ({})", summary.n_classes, classes.join(", "));
    Ok(())
}
