//! CLI command handlers for the langpick application.

mod info;
mod model;
mod recommend;
mod train;

pub(crate) use info::handle_info_command;
pub(crate) use model::handle_model_command;
pub(crate) use recommend::handle_recommend_command;
pub(crate) use train::handle_train_command;

use crate::cli::PathArgs;
use anyhow::{Context, Result};
use langpick_state::{LoadedModel, ModelOrigin, ModelStore, Settings};

fn resolve_settings(paths: PathArgs) -> Result<Settings> {
    Settings::resolve(paths.dataset, paths.model).context("failed to resolve settings")
}

/// Load the model, training it on first use.
fn open_model(settings: &Settings) -> Result<LoadedModel> {
    let loaded = ModelStore::open(settings).context("no usable model")?;
    if let ModelOrigin::Trained(report) = &loaded.origin {
        tracing::info!(
            samples = report.n_samples,
            accuracy = report.accuracy,
            "Model trained on first use"
        );
    }
    Ok(loaded)
}
