//! Labeled training table.
//!
//! A comma-separated file with a header row naming the seven feature columns
//! and the `language` target column. Columns are located by name, so their
//! order is free and extra columns are ignored. Fields are trimmed and may be
//! wrapped in double quotes; embedded commas are not supported.

use super::error::{Result, ScorerError};
use crate::types::{Feature, Language, TARGET_COLUMN};
use std::path::Path;

/// One labeled example.
///
/// Only built by [`Dataset::parse`], which guarantees one value per feature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sample {
    /// Category values in `Feature::ALL` order.
    features: Vec<String>,
    language: Language,
}

impl Sample {
    /// Category value of a feature.
    pub fn value(&self, feature: Feature) -> &str {
        self.features
            .get(feature as usize)
            .map(String::as_str)
            .unwrap_or_default()
    }

    /// Category values in `Feature::ALL` order.
    pub fn features(&self) -> &[String] {
        &self.features
    }

    pub fn language(&self) -> Language {
        self.language
    }
}

/// Parsed training table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    samples: Vec<Sample>,
}

impl Dataset {
    /// Read and parse a dataset file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let dataset = Self::parse(&text)?;
        tracing::debug!(path = %path.display(), rows = dataset.len(), "Dataset loaded");
        Ok(dataset)
    }

    /// Parse dataset text.
    pub fn parse(text: &str) -> Result<Self> {
        let mut lines = text
            .lines()
            .enumerate()
            .map(|(i, l)| (i + 1, l))
            .filter(|(_, l)| !l.trim().is_empty());

        let Some((_, header)) = lines.next() else {
            return Err(ScorerError::MissingColumn {
                column: Feature::Industry.as_str().to_string(),
            });
        };
        let header: Vec<String> = split_fields(header);

        let column = |name: &str| -> Result<usize> {
            header
                .iter()
                .position(|h| h == name)
                .ok_or_else(|| ScorerError::MissingColumn {
                    column: name.to_string(),
                })
        };
        let feature_idx = Feature::ALL
            .iter()
            .map(|f| column(f.as_str()))
            .collect::<Result<Vec<usize>>>()?;
        let target_idx = column(TARGET_COLUMN)?;

        let mut samples = Vec::new();
        for (line, raw) in lines {
            let fields = split_fields(raw);
            if fields.len() != header.len() {
                return Err(ScorerError::MalformedRow {
                    line,
                    reason: format!("expected {} fields, found {}", header.len(), fields.len()),
                });
            }

            let mut features = Vec::with_capacity(feature_idx.len());
            for (feature, idx) in Feature::ALL.iter().zip(&feature_idx) {
                let value = &fields[*idx];
                if value.is_empty() {
                    return Err(ScorerError::MalformedRow {
                        line,
                        reason: format!("empty value for '{}'", feature),
                    });
                }
                features.push(value.clone());
            }

            let language =
                fields[target_idx]
                    .parse::<Language>()
                    .map_err(|e| ScorerError::MalformedRow {
                        line,
                        reason: e.to_string(),
                    })?;

            samples.push(Sample { features, language });
        }

        if samples.is_empty() {
            return Err(ScorerError::EmptyDataset);
        }
        Ok(Self { samples })
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Distinct values observed for a feature, sorted.
    pub fn distinct(&self, feature: Feature) -> Vec<&str> {
        let mut values: Vec<&str> = self.samples.iter().map(|s| s.value(feature)).collect();
        values.sort_unstable();
        values.dedup();
        values
    }
}

fn split_fields(line: &str) -> Vec<String> {
    line.split(',')
        .map(|f| {
            let f = f.trim();
            f.strip_prefix('"')
                .and_then(|s| s.strip_suffix('"'))
                .unwrap_or(f)
                .trim()
                .to_string()
        })
        .collect()
}
