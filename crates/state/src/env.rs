use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Env var overriding the dataset location.
pub const DATASET_ENV: &str = "LANGPICK_DATASET";
/// Env var overriding the model bundle location.
pub const MODEL_ENV: &str = "LANGPICK_MODEL";
/// Env var overriding the settings file location.
pub const SETTINGS_ENV: &str = "LANGPICK_SETTINGS";

/// Returns the user's home directory.
pub fn home_dir() -> Result<PathBuf> {
    #[cfg(unix)]
    if let Ok(home) = std::env::var("HOME") {
        return Ok(PathBuf::from(home));
    }
    dirs::home_dir().ok_or_else(|| anyhow::anyhow!("home directory not found"))
}

fn env_path(key: &str) -> Option<PathBuf> {
    std::env::var(key)
        .ok()
        .filter(|s| !s.trim().is_empty())
        .map(PathBuf::from)
}

/// Dataset path from `LANGPICK_DATASET`.
pub fn env_dataset_path() -> Option<PathBuf> {
    env_path(DATASET_ENV)
}

/// Model bundle path from `LANGPICK_MODEL`.
pub fn env_model_path() -> Option<PathBuf> {
    env_path(MODEL_ENV)
}

/// Returns the path to the settings file.
pub fn settings_file() -> Option<PathBuf> {
    if let Some(custom) = env_path(SETTINGS_ENV) {
        return Some(custom);
    }
    home_dir().ok().map(|h| h.join(".langpick/settings.json"))
}

/// Settings parsed from `settings.json`.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileSettings {
    #[serde(default)]
    pub dataset_path: Option<PathBuf>,
    #[serde(default)]
    pub model_path: Option<PathBuf>,
}

/// Loads the settings file from disk if available.
///
/// A missing file yields defaults; an unreadable or malformed one is an error.
pub fn load_file_settings() -> Result<FileSettings> {
    let Some(path) = settings_file() else {
        return Ok(FileSettings::default());
    };
    if !path.exists() {
        return Ok(FileSettings::default());
    }
    let text = fs::read_to_string(&path)
        .with_context(|| format!("failed to read settings file {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("invalid settings file {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use langpick_test_utils::{env_guard, set_env_var};

    #[test]
    fn test_env_paths_ignore_blank_values() {
        let _g = env_guard();
        let _a = set_env_var(DATASET_ENV, Some("  "));
        let _b = set_env_var(MODEL_ENV, Some("/tmp/model.json"));
        assert_eq!(env_dataset_path(), None);
        assert_eq!(env_model_path(), Some(PathBuf::from("/tmp/model.json")));
    }

    #[test]
    fn test_settings_file_defaults_under_home() {
        let _g = env_guard();
        let tmp = tempfile::tempdir().unwrap();
        let _home = set_env_var("HOME", Some(tmp.path().to_str().unwrap()));
        let _s = set_env_var(SETTINGS_ENV, None);
        assert_eq!(
            settings_file(),
            Some(tmp.path().join(".langpick/settings.json"))
        );
    }

    #[test]
    fn test_missing_settings_file_is_default() {
        let _g = env_guard();
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("absent.json");
        let _s = set_env_var(SETTINGS_ENV, Some(path.to_str().unwrap()));
        assert_eq!(load_file_settings().unwrap(), FileSettings::default());
    }

    #[test]
    fn test_partial_settings_file() {
        let _g = env_guard();
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("settings.json");
        fs::write(&path, r#"{"model_path": "/srv/model.json"}"#).unwrap();
        let _s = set_env_var(SETTINGS_ENV, Some(path.to_str().unwrap()));

        let settings = load_file_settings().unwrap();
        assert_eq!(settings.dataset_path, None);
        assert_eq!(settings.model_path, Some(PathBuf::from("/srv/model.json")));
    }

    #[test]
    fn test_malformed_settings_file_is_error() {
        let _g = env_guard();
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("settings.json");
        fs::write(&path, "dataset_path = 3").unwrap();
        let _s = set_env_var(SETTINGS_ENV, Some(path.to_str().unwrap()));

        let err = load_file_settings().unwrap_err();
        assert!(err.to_string().contains("invalid settings file"));
    }
}
