//! CLI handler for the `train` command.

use super::resolve_settings;
use crate::cli::PathArgs;
use anyhow::{Context, Result};
use langpick_state::ModelStore;

/// Handle the `train` command.
pub(crate) fn handle_train_command(paths: PathArgs) -> Result<()> {
    let settings = resolve_settings(paths)?;
    let report = ModelStore::retrain(&settings).context("training failed")?;

    let classes: Vec<&str> = report.classes.iter().map(|l| l.as_str()).collect();
    println!("Model trained");
    println!("  Dataset:  {}", settings.dataset_path.display());
    println!("  Samples:  {}", report.n_samples);
    println!("  Classes:  {} ({})", report.n_classes, classes.join(", "));
    println!("  Accuracy: {:.1}%", report.accuracy * 100.0);
    println!("  Saved to: {}", settings.model_path.display());
    Ok(())
}
