//! Load-or-train access to the probability scorer.
//!
//! The host calls [`ModelStore::open`] once at startup and then lends the
//! returned scorer to every recommendation.

use crate::settings::Settings;
use langpick_intelligence::{ProbabilityScorer, ScorerError, TrainReport};
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while obtaining a usable scorer.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StoreError {
    /// Training from the dataset failed.
    #[error("failed to train from {}: {source}", .path.display())]
    Train {
        path: PathBuf,
        #[source]
        source: ScorerError,
    },

    /// The trained model could not be written.
    #[error("failed to save model to {}: {source}", .path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: ScorerError,
    },
}

/// How the scorer was obtained.
#[derive(Debug, Clone, PartialEq)]
pub enum ModelOrigin {
    /// Read from an existing bundle.
    Loaded,
    /// Freshly trained from the dataset.
    Trained(TrainReport),
}

/// A ready scorer plus where it came from.
#[derive(Debug, Clone)]
pub struct LoadedModel {
    pub scorer: ProbabilityScorer,
    pub origin: ModelOrigin,
}

/// Access to the persisted model bundle.
#[derive(Debug, Clone, Copy, Default)]
pub struct ModelStore;

impl ModelStore {
    /// Load the bundle, or train from the dataset and save when the bundle
    /// is absent or unreadable.
    ///
    /// A failed save after a successful train is logged and the trained
    /// scorer is still returned.
    pub fn open(settings: &Settings) -> Result<LoadedModel, StoreError> {
        let model_path = &settings.model_path;
        if model_path.exists() {
            match ProbabilityScorer::from_path(model_path) {
                Ok(scorer) => {
                    return Ok(LoadedModel {
                        scorer,
                        origin: ModelOrigin::Loaded,
                    })
                }
                Err(e) => tracing::warn!(
                    path = %model_path.display(),
                    error = %e,
                    "Model bundle unusable, retraining"
                ),
            }
        } else {
            tracing::info!(path = %model_path.display(), "No model bundle, training");
        }

        let (scorer, report) = train(settings)?;
        if let Err(e) = scorer.save(model_path) {
            tracing::warn!(path = %model_path.display(), error = %e, "Failed to save model");
        }
        Ok(LoadedModel {
            scorer,
            origin: ModelOrigin::Trained(report),
        })
    }

    /// Train from the dataset and overwrite the bundle.
    pub fn retrain(settings: &Settings) -> Result<TrainReport, StoreError> {
        let (scorer, report) = train(settings)?;
        scorer
            .save(&settings.model_path)
            .map_err(|source| StoreError::Save {
                path: settings.model_path.clone(),
                source,
            })?;
        Ok(report)
    }
}

fn train(settings: &Settings) -> Result<(ProbabilityScorer, TrainReport), StoreError> {
    let mut scorer = ProbabilityScorer::new();
    let report = scorer
        .train_from_path(&settings.dataset_path)
        .map_err(|source| StoreError::Train {
            path: settings.dataset_path.clone(),
            source,
        })?;
    Ok((scorer, report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use langpick_test_utils::DatasetFixture;

    fn settings(fixture: &DatasetFixture) -> Settings {
        Settings::new(&fixture.dataset_path, &fixture.model_path)
    }

    #[test]
    fn test_open_trains_and_saves_when_bundle_absent() {
        let fixture = DatasetFixture::new().unwrap();
        let loaded = ModelStore::open(&settings(&fixture)).unwrap();

        match loaded.origin {
            ModelOrigin::Trained(report) => assert_eq!(report.n_samples, 46),
            other => panic!("expected Trained, got {other:?}"),
        }
        assert!(loaded.scorer.is_trained());
        assert!(fixture.model_path.exists());
    }

    #[test]
    fn test_open_loads_existing_bundle() {
        let fixture = DatasetFixture::new().unwrap();
        ModelStore::open(&settings(&fixture)).unwrap();

        let again = ModelStore::open(&settings(&fixture)).unwrap();
        assert_eq!(again.origin, ModelOrigin::Loaded);
        assert!(again.scorer.is_trained());
    }

    #[test]
    fn test_open_retrains_over_corrupt_bundle() {
        let fixture = DatasetFixture::new().unwrap();
        fixture
            .write("models/trained_model.json", "{ definitely not a model")
            .unwrap();

        let loaded = ModelStore::open(&settings(&fixture)).unwrap();
        assert!(matches!(loaded.origin, ModelOrigin::Trained(_)));

        let reloaded = ModelStore::open(&settings(&fixture)).unwrap();
        assert_eq!(reloaded.origin, ModelOrigin::Loaded);
    }

    #[test]
    fn test_missing_dataset_is_train_error() {
        let fixture = DatasetFixture::new().unwrap();
        let settings = Settings::new(fixture.root().join("absent.csv"), &fixture.model_path);

        let err = ModelStore::open(&settings).unwrap_err();
        assert!(matches!(
            err,
            StoreError::Train {
                source: ScorerError::Io(_),
                ..
            }
        ));
        assert!(err.to_string().contains("absent.csv"));
    }

    #[test]
    fn test_retrain_overwrites_bundle() {
        let fixture = DatasetFixture::new().unwrap();
        ModelStore::open(&settings(&fixture)).unwrap();

        let report = ModelStore::retrain(&settings(&fixture)).unwrap();
        assert_eq!(report.n_classes, 7);
        assert!(ProbabilityScorer::from_path(&fixture.model_path).is_ok());
    }
}
