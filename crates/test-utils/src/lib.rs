//! Shared test utilities for langpick crates.
//!
//! This crate provides the reference dataset, temp-dir fixtures, and env var
//! guards used across multiple crates in the workspace.

use std::path::{Path, PathBuf};
use std::sync::{LazyLock, Mutex, MutexGuard};

/// The reference labeled dataset shipped with the workspace.
pub const SAMPLE_DATASET: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/../../data/industry_data.csv"));

/// Header row of a dataset file.
pub const DATASET_HEADER: &str =
    "industry,career_goal,priority,job_demand,learning_curve,salary_level,community_support,language";

/// Serialize tests that mutate process-global state (env vars, cwd, etc).
///
/// Acquire this guard at the start of any test that modifies environment
/// variables to prevent race conditions between parallel tests.
pub fn env_guard() -> MutexGuard<'static, ()> {
    static TEST_SERIAL: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));
    TEST_SERIAL.lock().unwrap_or_else(|e| e.into_inner())
}

/// RAII guard for environment variables - restores original value on drop.
pub struct EnvVarGuard {
    key: &'static str,
    previous: Option<String>,
}

impl Drop for EnvVarGuard {
    fn drop(&mut self) {
        if let Some(v) = &self.previous {
            std::env::set_var(self.key, v);
        } else {
            std::env::remove_var(self.key);
        }
    }
}

/// Set an environment variable and return a guard that restores the original on drop.
///
/// # Example
/// ```
/// let _guard = langpick_test_utils::set_env_var("MY_VAR", Some("value"));
/// // MY_VAR is set to "value"
/// // When _guard drops, MY_VAR is restored to its original value
/// ```
pub fn set_env_var(key: &'static str, value: Option<&str>) -> EnvVarGuard {
    let previous = std::env::var(key).ok();
    if let Some(val) = value {
        std::env::set_var(key, val);
    } else {
        std::env::remove_var(key);
    }
    EnvVarGuard { key, previous }
}

/// Sample dataset rows whose target column is not `language`.
pub fn dataset_without(language: &str) -> String {
    filter_rows(|row| row.rsplit(',').next().map(str::trim) != Some(language))
}

/// Sample dataset rows whose first column is not `industry`.
pub fn dataset_without_industry(industry: &str) -> String {
    filter_rows(|row| row.split(',').next().map(str::trim) != Some(industry))
}

fn filter_rows(keep: impl Fn(&str) -> bool) -> String {
    let mut lines = SAMPLE_DATASET.lines();
    let mut out = String::new();
    if let Some(header) = lines.next() {
        out.push_str(header);
        out.push('\n');
    }
    for row in lines.filter(|l| !l.trim().is_empty()).filter(|l| keep(l)) {
        out.push_str(row);
        out.push('\n');
    }
    out
}

/// Temp directory holding a dataset file and a model location.
///
/// The tempdir is automatically cleaned up when this struct is dropped.
pub struct DatasetFixture {
    pub tempdir: tempfile::TempDir,
    /// Path of the written dataset file.
    pub dataset_path: PathBuf,
    /// Where a model bundle should go (not created).
    pub model_path: PathBuf,
}

impl DatasetFixture {
    /// Fixture holding the reference dataset.
    pub fn new() -> std::io::Result<Self> {
        Self::with_dataset(SAMPLE_DATASET)
    }

    /// Fixture holding custom dataset text.
    pub fn with_dataset(text: &str) -> std::io::Result<Self> {
        let tempdir = tempfile::tempdir()?;
        let dataset_path = tempdir.path().join("data/industry_data.csv");
        let model_path = tempdir.path().join("models/trained_model.json");

        if let Some(parent) = dataset_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&dataset_path, text)?;

        Ok(Self {
            tempdir,
            dataset_path,
            model_path,
        })
    }

    /// Root of the temp environment, usable as HOME.
    pub fn root(&self) -> &Path {
        self.tempdir.path()
    }

    /// Create an RAII guard that sets HOME to this fixture's temp directory.
    pub fn home_guard(&self) -> EnvVarGuard {
        set_env_var("HOME", Some(&self.root().to_string_lossy()))
    }

    /// Write a file relative to the fixture root, creating parents.
    pub fn write(&self, relative: &str, content: &str) -> std::io::Result<PathBuf> {
        let path = self.root().join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, content)?;
        Ok(path)
    }
}
