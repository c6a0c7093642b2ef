//! Multinomial naive Bayes over integer-coded categorical features.
//!
//! Encoded category codes are treated as feature counts. With additive
//! smoothing `alpha`:
//!
//! ```text
//! log P(c)      = ln(n_c / n)
//! log P(j | c)  = ln((N_cj + alpha) / sum_k (N_ck + alpha))
//! jll(x, c)     = log P(c) + sum_j x_j * log P(j | c)
//! ```
//!
//! where `N_cj` is the sum of feature `j` over the samples of class `c`.

use super::error::{Result, ScorerError};
use crate::Language;
use serde::{Deserialize, Serialize};

/// Default additive smoothing.
pub const DEFAULT_ALPHA: f64 = 1.0;

/// Fitted multinomial naive Bayes parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultinomialNb {
    alpha: f64,
    /// Known classes in ascending name order.
    classes: Vec<Language>,
    class_log_prior: Vec<f64>,
    /// `[class][feature]`
    feature_log_prob: Vec<Vec<f64>>,
}

impl MultinomialNb {
    /// Fit on encoded rows `x` with labels `y`.
    pub fn fit(x: &[Vec<f64>], y: &[Language], alpha: f64) -> Result<Self> {
        if x.is_empty() || x.len() != y.len() {
            return Err(ScorerError::EmptyDataset);
        }
        let n_features = x[0].len();

        let mut classes: Vec<Language> = y.to_vec();
        classes.sort_unstable();
        classes.dedup();

        let mut class_count = vec![0.0_f64; classes.len()];
        let mut feature_count = vec![vec![0.0_f64; n_features]; classes.len()];
        for (row, label) in x.iter().zip(y) {
            let c = classes.binary_search(label).unwrap_or_default();
            class_count[c] += 1.0;
            for (acc, v) in feature_count[c].iter_mut().zip(row) {
                *acc += v;
            }
        }

        let total: f64 = class_count.iter().sum();
        let class_log_prior = class_count.iter().map(|n| (n / total).ln()).collect();

        let feature_log_prob = feature_count
            .iter()
            .map(|counts| {
                let denom: f64 = counts.iter().map(|c| c + alpha).sum::<f64>().ln();
                counts.iter().map(|c| (c + alpha).ln() - denom).collect()
            })
            .collect();

        Ok(Self {
            alpha,
            classes,
            class_log_prior,
            feature_log_prob,
        })
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Known classes in probability order.
    pub fn classes(&self) -> &[Language] {
        &self.classes
    }

    pub fn n_features(&self) -> usize {
        self.feature_log_prob.first().map_or(0, Vec::len)
    }

    /// Joint log likelihood per class.
    fn joint_log_likelihood(&self, x: &[f64]) -> Vec<f64> {
        self.class_log_prior
            .iter()
            .zip(&self.feature_log_prob)
            .map(|(prior, flp)| prior + flp.iter().zip(x).map(|(p, v)| p * v).sum::<f64>())
            .collect()
    }

    /// Posterior probability per class, in `classes()` order.
    pub fn predict_proba(&self, x: &[f64]) -> Vec<f64> {
        let jll = self.joint_log_likelihood(x);
        let max = jll.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let log_norm = max + jll.iter().map(|v| (v - max).exp()).sum::<f64>().ln();
        jll.iter().map(|v| (v - log_norm).exp()).collect()
    }

    /// Most likely class; the first one wins on ties.
    pub fn predict(&self, x: &[f64]) -> Option<Language> {
        let jll = self.joint_log_likelihood(x);
        let mut best: Option<(usize, f64)> = None;
        for (i, v) in jll.into_iter().enumerate() {
            match best {
                Some((_, b)) if v <= b => {}
                _ => best = Some((i, v)),
            }
        }
        best.map(|(i, _)| self.classes[i])
    }

    /// Fraction of rows whose prediction matches the label.
    pub fn score(&self, x: &[Vec<f64>], y: &[Language]) -> f64 {
        if x.is_empty() {
            return 0.0;
        }
        let hits = x
            .iter()
            .zip(y)
            .filter(|(row, label)| self.predict(row) == Some(**label))
            .count();
        hits as f64 / x.len() as f64
    }

    /// Shape check used after deserialization.
    pub(crate) fn check_shape(&self, n_features: usize) -> Result<()> {
        let consistent = !self.classes.is_empty()
            && self.class_log_prior.len() == self.classes.len()
            && self.feature_log_prob.len() == self.classes.len()
            && self.feature_log_prob.iter().all(|r| r.len() == n_features)
            && self.classes.windows(2).all(|w| w[0] < w[1]);
        if consistent {
            Ok(())
        } else {
            Err(ScorerError::InvalidModel(
                "classifier parameters do not match feature list".to_string(),
            ))
        }
    }
}
