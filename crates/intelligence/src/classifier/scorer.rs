//! Probability scorer: a trained classifier queried for rule candidates.

use super::dataset::Dataset;
use super::encoder::LabelEncoder;
use super::error::{Result, ScorerError};
use super::naive_bayes::{MultinomialNb, DEFAULT_ALPHA};
use crate::types::Feature;
use crate::Language;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

/// Version of the persisted model bundle layout.
pub const MODEL_FORMAT_VERSION: u32 = 1;

/// Score given to a candidate the classifier has never seen as a label.
pub const UNKNOWN_CLASS_SCORE: f64 = 10.0;
/// Score given to every candidate when inference fails after training.
pub const FALLBACK_SCORE: f64 = 50.0;
/// Code used for an auxiliary default that was never observed in training.
pub const NEUTRAL_CODE: usize = 1;

/// Auxiliary feature values assumed for every query, since the user never
/// supplies them.
pub const AUXILIARY_DEFAULTS: [(Feature, &str); 4] = [
    (Feature::JobDemand, "High"),
    (Feature::LearningCurve, "Easy"),
    (Feature::SalaryLevel, "Medium"),
    (Feature::CommunitySupport, "High"),
];

/// Diagnostics from a successful training run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainReport {
    /// In-sample accuracy (0.0 - 1.0).
    pub accuracy: f64,
    pub n_samples: usize,
    pub n_classes: usize,
    pub classes: Vec<Language>,
}

/// Static description of a trained model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelSummary {
    pub model_type: String,
    pub n_features: usize,
    pub features: Vec<Feature>,
    pub n_classes: usize,
    pub classes: Vec<Language>,
}

/// Everything needed to score queries; persisted as one bundle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct TrainedModel {
    format_version: u32,
    features: Vec<Feature>,
    encoders: BTreeMap<Feature, LabelEncoder>,
    classifier: MultinomialNb,
}

impl TrainedModel {
    fn check(&self) -> Result<()> {
        if self.format_version != MODEL_FORMAT_VERSION {
            return Err(ScorerError::IncompatibleModel {
                found: self.format_version,
                expected: MODEL_FORMAT_VERSION,
            });
        }
        if self.features != Feature::ALL {
            return Err(ScorerError::InvalidModel(
                "feature list does not match dataset columns".to_string(),
            ));
        }
        for feature in &self.features {
            match self.encoders.get(feature) {
                Some(enc) if enc.is_sorted() => {}
                _ => {
                    return Err(ScorerError::InvalidModel(format!(
                        "encoder for '{}' missing or corrupt",
                        feature
                    )))
                }
            }
        }
        self.classifier.check_shape(self.features.len())
    }

    fn encode_row(&self, values: &[&str]) -> Result<Vec<f64>> {
        encode_row(&self.features, &self.encoders, values)
    }

    /// Encode a user query, substituting auxiliary defaults.
    ///
    /// Values are trimmed, matching `FromStr` on the vocabulary enums.
    fn encode_query(&self, industry: &str, career_goal: &str, priority: &str) -> Result<Vec<f64>> {
        let mut row = self.encode_row(&[industry.trim(), career_goal.trim(), priority.trim()])?;
        for (feature, value) in AUXILIARY_DEFAULTS {
            let code = self
                .encoders
                .get(&feature)
                .and_then(|enc| enc.encode(value))
                .unwrap_or(NEUTRAL_CODE);
            row.push(code as f64);
        }
        Ok(row)
    }
}

fn encode_row(
    features: &[Feature],
    encoders: &BTreeMap<Feature, LabelEncoder>,
    values: &[&str],
) -> Result<Vec<f64>> {
    features
        .iter()
        .zip(values)
        .map(|(feature, value)| {
            encoders
                .get(feature)
                .and_then(|enc| enc.encode(value))
                .map(|code| code as f64)
                .ok_or_else(|| ScorerError::UnknownCategory {
                    feature: *feature,
                    value: (*value).to_string(),
                })
        })
        .collect()
}

/// Supervised scorer over the labeled dataset.
///
/// Built once (train or load), then shared immutably by reference.
#[derive(Debug, Clone, Default)]
pub struct ProbabilityScorer {
    model: Option<TrainedModel>,
}

impl ProbabilityScorer {
    /// Create an untrained scorer.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_trained(&self) -> bool {
        self.model.is_some()
    }

    /// Languages the classifier can assign probability to.
    pub fn known_classes(&self) -> &[Language] {
        self.model
            .as_ref()
            .map(|m| m.classifier.classes())
            .unwrap_or(&[])
    }

    /// Fit on a parsed dataset. On failure the previous state is kept.
    pub fn train(&mut self, dataset: &Dataset) -> Result<TrainReport> {
        if dataset.is_empty() {
            return Err(ScorerError::EmptyDataset);
        }

        let encoders: BTreeMap<Feature, LabelEncoder> = Feature::ALL
            .iter()
            .map(|f| (*f, LabelEncoder::fit(dataset.distinct(*f))))
            .collect();

        let features = Feature::ALL.to_vec();

        let x = dataset
            .samples()
            .iter()
            .map(|s| {
                let values: Vec<&str> = s.features().iter().map(String::as_str).collect();
                encode_row(&features, &encoders, &values)
            })
            .collect::<Result<Vec<Vec<f64>>>>()?;
        let y: Vec<Language> = dataset.samples().iter().map(|s| s.language()).collect();

        let classifier = MultinomialNb::fit(&x, &y, DEFAULT_ALPHA)?;
        let accuracy = classifier.score(&x, &y);
        let classes = classifier.classes().to_vec();

        tracing::info!(
            samples = dataset.len(),
            classes = classes.len(),
            accuracy,
            "Probability scorer trained"
        );

        self.model = Some(TrainedModel {
            format_version: MODEL_FORMAT_VERSION,
            features,
            encoders,
            classifier,
        });
        Ok(TrainReport {
            accuracy,
            n_samples: dataset.len(),
            n_classes: classes.len(),
            classes,
        })
    }

    /// Parse a dataset file and train on it.
    pub fn train_from_path(&mut self, path: &Path) -> Result<TrainReport> {
        let dataset = Dataset::from_path(path)?;
        self.train(&dataset)
    }

    /// Candidate probabilities as percentages, surfacing every failure.
    ///
    /// Candidates unknown to the classifier receive [`UNKNOWN_CLASS_SCORE`].
    pub fn try_predict_proba(
        &self,
        industry: &str,
        career_goal: &str,
        priority: &str,
        candidates: &BTreeSet<Language>,
    ) -> Result<BTreeMap<Language, f64>> {
        let model = self.model.as_ref().ok_or(ScorerError::NotTrained)?;
        let row = model.encode_query(industry, career_goal, priority)?;
        let proba = model.classifier.predict_proba(&row);
        let classes = model.classifier.classes();

        Ok(candidates
            .iter()
            .map(|lang| {
                let score = classes
                    .binary_search(lang)
                    .map(|idx| proba[idx] * 100.0)
                    .unwrap_or(UNKNOWN_CLASS_SCORE);
                (*lang, score)
            })
            .collect())
    }

    /// Candidate probabilities as percentages.
    ///
    /// Only [`ScorerError::NotTrained`] is returned. Any other failure, such
    /// as a category never seen in training, yields [`FALLBACK_SCORE`] for
    /// every candidate.
    pub fn predict_proba(
        &self,
        industry: &str,
        career_goal: &str,
        priority: &str,
        candidates: &BTreeSet<Language>,
    ) -> Result<BTreeMap<Language, f64>> {
        self.predict_proba_reporting_fallback(industry, career_goal, priority, candidates)
            .map(|(scores, _)| scores)
    }

    /// Like [`predict_proba`](Self::predict_proba), also reporting whether
    /// the [`FALLBACK_SCORE`] substitution happened.
    pub fn predict_proba_reporting_fallback(
        &self,
        industry: &str,
        career_goal: &str,
        priority: &str,
        candidates: &BTreeSet<Language>,
    ) -> Result<(BTreeMap<Language, f64>, bool)> {
        match self.try_predict_proba(industry, career_goal, priority, candidates) {
            Ok(scores) => Ok((scores, false)),
            Err(ScorerError::NotTrained) => Err(ScorerError::NotTrained),
            Err(e) => {
                tracing::warn!(error = %e, "Prediction failed, using fallback scores");
                Ok((
                    candidates.iter().map(|l| (*l, FALLBACK_SCORE)).collect(),
                    true,
                ))
            }
        }
    }

    /// Description of the trained model, or `None` when untrained.
    pub fn model_summary(&self) -> Option<ModelSummary> {
        self.model.as_ref().map(|m| ModelSummary {
            model_type: "Multinomial Naive Bayes".to_string(),
            n_features: m.features.len(),
            features: m.features.clone(),
            n_classes: m.classifier.classes().len(),
            classes: m.classifier.classes().to_vec(),
        })
    }

    /// Write the model bundle as JSON, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<()> {
        let model = self.model.as_ref().ok_or(ScorerError::NotTrained)?;
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, serde_json::to_string_pretty(model)?)?;
        tracing::info!(path = %path.display(), "Model saved");
        Ok(())
    }

    /// Replace state with a bundle read from disk.
    ///
    /// All or nothing: on any failure the scorer is left untrained.
    pub fn load(&mut self, path: &Path) -> Result<()> {
        self.model = None;
        let data = std::fs::read_to_string(path)?;
        let model: TrainedModel = serde_json::from_str(&data)?;
        model.check()?;
        self.model = Some(model);
        tracing::info!(path = %path.display(), "Model loaded");
        Ok(())
    }

    /// Construct a scorer from a bundle on disk.
    pub fn from_path(path: &Path) -> Result<Self> {
        let mut scorer = Self::new();
        scorer.load(path)?;
        Ok(scorer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DATA: &str = "industry,career_goal,priority,job_demand,learning_curve,salary_level,community_support,language
Web Development,Kerja cepat,Banyak lowongan,High,Easy,Medium,High,JavaScript
Web Development,Freelance,Mudah dipelajari,Medium,Easy,Low,High,PHP
Data Science,Magang,Mudah dipelajari,High,Easy,Medium,High,Python
Data Science,Startup,Gaji tinggi,High,Easy,High,High,Python
Backend Development,Startup,Gaji tinggi,Medium,Hard,High,Medium,Golang
";

    fn trained() -> ProbabilityScorer {
        let mut scorer = ProbabilityScorer::new();
        scorer.train(&Dataset::parse(DATA).unwrap()).unwrap();
        scorer
    }

    fn set(langs: &[Language]) -> BTreeSet<Language> {
        langs.iter().copied().collect()
    }

    #[test]
    fn test_train_report() {
        let mut scorer = ProbabilityScorer::new();
        let report = scorer.train(&Dataset::parse(DATA).unwrap()).unwrap();
        assert_eq!(report.n_samples, 5);
        assert_eq!(report.n_classes, 4);
        assert_eq!(
            report.classes,
            vec![
                Language::Golang,
                Language::JavaScript,
                Language::Php,
                Language::Python
            ]
        );
        assert!((0.0..=1.0).contains(&report.accuracy));
        assert!(scorer.is_trained());
    }

    #[test]
    fn test_predict_before_training_is_not_trained() {
        let scorer = ProbabilityScorer::new();
        let result = scorer.predict_proba(
            "Web Development",
            "Kerja cepat",
            "Banyak lowongan",
            &set(&[Language::Python]),
        );
        assert!(matches!(result, Err(ScorerError::NotTrained)));
    }

    #[test]
    fn test_candidate_outside_known_classes_gets_default() {
        let scores = trained()
            .predict_proba(
                "Backend Development",
                "Startup",
                "Gaji tinggi",
                &set(&[Language::Java, Language::Golang]),
            )
            .unwrap();
        assert_eq!(scores[&Language::Java], UNKNOWN_CLASS_SCORE);
        assert!(scores[&Language::Golang] > 0.0);
    }

    #[test]
    fn test_unknown_category_is_hard_fault_in_strict_mode() {
        let err = trained()
            .try_predict_proba(
                "Game Development",
                "Startup",
                "Gaji tinggi",
                &set(&[Language::JavaScript]),
            )
            .unwrap_err();
        match err {
            ScorerError::UnknownCategory { feature, value } => {
                assert_eq!(feature, Feature::Industry);
                assert_eq!(value, "Game Development");
            }
            other => panic!("expected UnknownCategory, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_category_falls_back_uniformly() {
        let candidates = set(&[Language::JavaScript, Language::CSharp]);
        let scores = trained()
            .predict_proba("Game Development", "Startup", "Gaji tinggi", &candidates)
            .unwrap();
        assert_eq!(scores.len(), 2);
        assert!(scores.values().all(|v| *v == FALLBACK_SCORE));
    }

    #[test]
    fn test_fallback_is_reported() {
        let scorer = trained();
        let candidates = set(&[Language::Python]);
        let (_, fallback) = scorer
            .predict_proba_reporting_fallback("Data Science", "Magang", "Mudah dipelajari", &candidates)
            .unwrap();
        assert!(!fallback);
        let (scores, fallback) = scorer
            .predict_proba_reporting_fallback("Data Science", "Pensiun", "Mudah dipelajari", &candidates)
            .unwrap();
        assert!(fallback);
        assert_eq!(scores[&Language::Python], FALLBACK_SCORE);
    }

    #[test]
    fn test_known_class_probabilities_are_percentages() {
        let scorer = trained();
        let all: BTreeSet<Language> = scorer.known_classes().iter().copied().collect();
        let scores = scorer
            .predict_proba("Data Science", "Magang", "Mudah dipelajari", &all)
            .unwrap();
        let total: f64 = scores.values().sum();
        assert!((total - 100.0).abs() < 1e-9);
        assert!(scores.values().all(|v| (0.0..=100.0).contains(v)));
    }

    #[test]
    fn test_padded_query_scores_like_exact_query() {
        let scorer = trained();
        let candidates = set(&[Language::JavaScript, Language::Php, Language::Python]);
        let exact = scorer
            .try_predict_proba("Web Development", "Kerja cepat", "Banyak lowongan", &candidates)
            .unwrap();
        let padded = scorer
            .try_predict_proba(" Web Development ", "Kerja cepat ", "\tBanyak lowongan", &candidates)
            .unwrap();
        assert_eq!(exact, padded);
    }

    #[test]
    fn test_unseen_auxiliary_default_uses_neutral_code() {
        // No "Easy" learning curve anywhere.
        let data = "industry,career_goal,priority,job_demand,learning_curve,salary_level,community_support,language
Backend Development,Startup,Gaji tinggi,Medium,Hard,High,Medium,Golang
Backend Development,Kerja cepat,Banyak lowongan,High,Medium,High,High,Java
";
        let mut scorer = ProbabilityScorer::new();
        scorer.train(&Dataset::parse(data).unwrap()).unwrap();
        let model = scorer.model.as_ref().unwrap();
        let row = model
            .encode_query("Backend Development", "Startup", "Gaji tinggi")
            .unwrap();
        assert_eq!(row.len(), 7);
        assert_eq!(row[Feature::LearningCurve as usize], NEUTRAL_CODE as f64);
    }

    #[test]
    fn test_failed_train_keeps_previous_model() {
        let mut scorer = trained();
        let before = scorer.model_summary();
        let err = scorer.train(&Dataset::default());
        assert!(matches!(err, Err(ScorerError::EmptyDataset)));
        assert_eq!(scorer.model_summary(), before);
    }

    #[test]
    fn test_model_summary() {
        assert!(ProbabilityScorer::new().model_summary().is_none());
        let summary = trained().model_summary().unwrap();
        assert_eq!(summary.model_type, "Multinomial Naive Bayes");
        assert_eq!(summary.n_features, 7);
        assert_eq!(summary.features, Feature::ALL.to_vec());
        assert_eq!(summary.n_classes, 4);
    }

    #[test]
    fn test_save_requires_training() {
        let dir = tempfile::tempdir().unwrap();
        let err = ProbabilityScorer::new().save(&dir.path().join("m.json"));
        assert!(matches!(err, Err(ScorerError::NotTrained)));
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/model.json");
        let scorer = trained();
        scorer.save(&path).unwrap();

        let loaded = ProbabilityScorer::from_path(&path).unwrap();
        let candidates = set(&[Language::Python, Language::Php, Language::Kotlin]);
        assert_eq!(
            scorer
                .predict_proba("Web Development", "Freelance", "Mudah dipelajari", &candidates)
                .unwrap(),
            loaded
                .predict_proba("Web Development", "Freelance", "Mudah dipelajari", &candidates)
                .unwrap()
        );
    }

    #[test]
    fn test_load_failure_leaves_scorer_untrained() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.json");
        std::fs::write(&path, "{ not json").unwrap();

        let mut scorer = trained();
        assert!(scorer.load(&path).is_err());
        assert!(!scorer.is_trained());
        assert!(scorer.known_classes().is_empty());
    }

    #[test]
    fn test_load_rejects_other_format_version() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.json");
        trained().save(&path).unwrap();

        let mut value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        value["format_version"] = serde_json::json!(99);
        std::fs::write(&path, value.to_string()).unwrap();

        match ProbabilityScorer::from_path(&path) {
            Err(ScorerError::IncompatibleModel { found, expected }) => {
                assert_eq!(found, 99);
                assert_eq!(expected, MODEL_FORMAT_VERSION);
            }
            other => panic!("expected IncompatibleModel, got {other:?}"),
        }
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            ProbabilityScorer::from_path(&dir.path().join("absent.json")),
            Err(ScorerError::Io(_))
        ));
    }
}
