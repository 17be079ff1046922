// ============================================================
// Layer 5 - Multinomial Naive Bayes
// ============================================================
// The base learner of the bagging ensemble.
//
// Fit with per-sample weights w_i (bootstrap counts):
//   class_count[c]      = Σ w_i              over samples of class c
//   feature_count[c][j] = Σ w_i * x_ij       over samples of class c
//   log P(c)            = ln(class_count[c] / Σ class_count)
//   log P(j | c)        = ln((feature_count[c][j] + α)
//                            / (Σ_j feature_count[c][j] + α * n_features))
//
// Predict:
//   jll[c] = log P(c) + Σ_j x_j * log P(j | c)
//   proba  = softmax(jll)
//
// A class absent from a bootstrap sample gets log P(c) = -∞
// and is therefore never predicted by that learner.
//
// Reference: Manning, Raghavan & Schütze (2008) §13.2
//            McCallum & Nigam (1998) A Comparison of Event Models
//            for Naive Bayes Text Classification

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

use crate::domain::label::Label;
use crate::ml::vectorizer::SparseVector;

/// Additive (Laplace) smoothing used when none is configured
pub const DEFAULT_ALPHA: f64 = 1.0;

const N_CLASSES: usize = 2;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultinomialNb {
    class_log_prior:  [f64; N_CLASSES],
    /// [class][feature]
    feature_log_prob: [Vec<f64>; N_CLASSES],
}

impl MultinomialNb {
    /// Fit with an explicit weight per sample
    pub fn fit_weighted(
        xs:         &[SparseVector],
        labels:     &[Label],
        weights:    &[f64],
        n_features: usize,
        alpha:      f64,
    ) -> Result<Self> {
        if xs.len() != labels.len() || xs.len() != weights.len() {
            bail!(
                "Mismatched training data: {} vectors, {} labels, {} weights",
                xs.len(), labels.len(), weights.len()
            );
        }
        if n_features == 0 {
            bail!("Cannot fit naive Bayes on zero features");
        }
        if alpha <= 0.0 {
            bail!("Smoothing alpha must be positive, got {alpha}");
        }

        let mut class_count   = [0.0f64; N_CLASSES];
        let mut feature_count: [Vec<f64>; N_CLASSES] =
            std::array::from_fn(|_| vec![0.0; n_features]);

        for ((x, label), &w) in xs.iter().zip(labels).zip(weights) {
            if w == 0.0 {
                continue;
            }
            let c = label.index();
            class_count[c] += w;
            for (j, value) in x.iter() {
                feature_count[c][j] += w * value;
            }
        }

        let total: f64 = class_count.iter().sum();
        if total <= 0.0 {
            bail!("Cannot fit naive Bayes without any weighted samples");
        }

        let class_log_prior = class_count.map(|n| (n / total).ln());

        let feature_log_prob = feature_count.map(|counts| {
            let denom = counts.iter().sum::<f64>() + alpha * n_features as f64;
            counts.iter().map(|&n| ((n + alpha) / denom).ln()).collect::<Vec<f64>>()
        });

        Ok(Self { class_log_prior, feature_log_prob })
    }

    /// Joint log-likelihood per class
    pub fn joint_log_likelihood(&self, x: &SparseVector) -> [f64; N_CLASSES] {
        let mut jll = self.class_log_prior;
        for (c, score) in jll.iter_mut().enumerate() {
            let log_prob = &self.feature_log_prob[c];
            for (j, value) in x.iter() {
                // Indices past the fitted width carry no signal
                if let Some(lp) = log_prob.get(j) {
                    *score += value * lp;
                }
            }
        }
        jll
    }

    /// Class probabilities, indexed by `Label::index`
    pub fn predict_proba(&self, x: &SparseVector) -> [f64; N_CLASSES] {
        softmax(self.joint_log_likelihood(x))
    }

    pub fn predict(&self, x: &SparseVector) -> Label {
        let jll = self.joint_log_likelihood(x);
        // Ties go to the lower class index
        if jll[Label::Spam.index()] > jll[Label::Ham.index()] {
            Label::Spam
        } else {
            Label::Ham
        }
    }

    pub fn n_features(&self) -> usize {
        self.feature_log_prob[0].len()
    }
}

/// Numerically stable softmax; -∞ entries map to probability 0
fn softmax<const N: usize>(logits: [f64; N]) -> [f64; N] {
    let max = logits.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let exps = logits.map(|l| (l - max).exp());
    let sum: f64 = exps.iter().sum();
    exps.map(|e| e / sum)
}
