//! Resolved file locations.

use crate::env::{env_dataset_path, env_model_path, load_file_settings};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Dataset location used when nothing else is configured.
pub const DEFAULT_DATASET_PATH: &str = "data/industry_data.csv";
/// Model bundle location used when nothing else is configured.
pub const DEFAULT_MODEL_PATH: &str = "models/trained_model.json";

/// Where the dataset and model bundle live.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub dataset_path: PathBuf,
    pub model_path: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            dataset_path: PathBuf::from(DEFAULT_DATASET_PATH),
            model_path: PathBuf::from(DEFAULT_MODEL_PATH),
        }
    }
}

impl Settings {
    pub fn new(dataset_path: impl Into<PathBuf>, model_path: impl Into<PathBuf>) -> Self {
        Self {
            dataset_path: dataset_path.into(),
            model_path: model_path.into(),
        }
    }

    /// Resolve each path: explicit flag, then env var, then settings file,
    /// then the built-in default.
    pub fn resolve(dataset_flag: Option<PathBuf>, model_flag: Option<PathBuf>) -> Result<Self> {
        let file = load_file_settings()?;
        let defaults = Self::default();

        let settings = Self {
            dataset_path: dataset_flag
                .or_else(env_dataset_path)
                .or(file.dataset_path)
                .unwrap_or(defaults.dataset_path),
            model_path: model_flag
                .or_else(env_model_path)
                .or(file.model_path)
                .unwrap_or(defaults.model_path),
        };
        tracing::debug!(
            dataset = %settings.dataset_path.display(),
            model = %settings.model_path.display(),
            "Settings resolved"
        );
        Ok(settings)
    }
}
