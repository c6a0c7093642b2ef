//! Supervised probability scoring.
//!
//! A labeled dataset is label-encoded per feature and fit with multinomial
//! naive Bayes. At query time only the three user dimensions are known; the
//! auxiliary tiers are filled with fixed defaults.

mod dataset;
mod encoder;
mod error;
mod naive_bayes;
mod scorer;

pub use dataset::{Dataset, Sample};
pub use encoder::LabelEncoder;
pub use error::{Result, ScorerError};
pub use naive_bayes::{MultinomialNb, DEFAULT_ALPHA};
pub use scorer::{
    ModelSummary, ProbabilityScorer, TrainReport, AUXILIARY_DEFAULTS, FALLBACK_SCORE,
    MODEL_FORMAT_VERSION, NEUTRAL_CODE, UNKNOWN_CLASS_SCORE,
};
