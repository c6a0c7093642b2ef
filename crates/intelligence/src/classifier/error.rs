use crate::types::Feature;
use thiserror::Error;

/// Errors raised while training, persisting, or querying the probability scorer.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ScorerError {
    /// Inference or persistence attempted before a successful train/load.
    #[error("model is not trained; train or load a model first")]
    NotTrained,

    /// A required dataset column is absent from the header.
    #[error("column '{column}' not found in dataset")]
    MissingColumn {
        /// Name of the missing column.
        column: String,
    },

    /// A data row could not be interpreted.
    #[error("malformed row at line {line}: {reason}")]
    MalformedRow {
        /// 1-based line number in the source file.
        line: usize,
        /// What was wrong with the row.
        reason: String,
    },

    /// The dataset has a header but no rows.
    #[error("dataset contains no labeled rows")]
    EmptyDataset,

    /// A category value was never observed for this feature during training.
    #[error("unknown {feature} category: '{value}'")]
    UnknownCategory {
        /// Feature whose encoder rejected the value.
        feature: Feature,
        /// The rejected value.
        value: String,
    },

    /// Model bundle was written by an incompatible version.
    #[error("incompatible model format version {found} (expected {expected})")]
    IncompatibleModel {
        /// Version recorded in the bundle.
        found: u32,
        /// Version this build understands.
        expected: u32,
    },

    /// Model bundle is internally inconsistent.
    #[error("invalid model bundle: {0}")]
    InvalidModel(String),

    /// Failed to read or write a file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to (de)serialize the model bundle.
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Result type for scorer operations.
pub type Result<T> = std::result::Result<T, ScorerError>;
