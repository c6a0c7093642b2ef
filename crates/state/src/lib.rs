//! Manages configuration and the persisted model.
//!
//! This crate provides utilities for:
//! - Resolving dataset and model locations from flags, env vars, and an
//!   optional JSON settings file.
//! - Loading the trained scorer, training it on first use.

pub mod env;
pub mod settings;
pub mod store;

pub use env::{
    env_dataset_path, env_model_path, home_dir, load_file_settings, settings_file, FileSettings,
    DATASET_ENV, MODEL_ENV, SETTINGS_ENV,
};
pub use settings::{Settings, DEFAULT_DATASET_PATH, DEFAULT_MODEL_PATH};
pub use store::{LoadedModel, ModelOrigin, ModelStore, StoreError};
