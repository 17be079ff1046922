// ============================================================
// Layer 5 - Bagging Ensemble
// ============================================================
// Bootstrap aggregation over multinomial naive-Bayes learners.
//
// Fit:
//   for each of n_estimators learners:
//     draw n indices uniformly WITH replacement (bootstrap)
//     weight[i] = how many times sample i was drawn
//     fit a MultinomialNb with those weights
//
// Drawing into weights instead of copying rows gives the same
// model as fitting on the duplicated rows, without the copies.
// One seeded RNG is shared by all draws, so an ensemble is
// fully determined by (data, seed).
//
// Predict: every learner votes; the majority label wins.
// A tied vote is broken by the mean class probability.
//
// Reference: Breiman (1996) Bagging Predictors

use anyhow::{bail, Result};
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::domain::label::Label;
use crate::ml::naive_bayes::MultinomialNb;
use crate::ml::vectorizer::SparseVector;

pub const DEFAULT_N_ESTIMATORS: usize = 10;

/// Hyperparameters of one ensemble fit
#[derive(Debug, Clone, Copy)]
pub struct BaggingConfig {
    pub n_estimators: usize,
    pub alpha:        f64,
    pub seed:         u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaggingClassifier {
    estimators: Vec<MultinomialNb>,
}

impl BaggingClassifier {
    pub fn fit(
        xs:         &[SparseVector],
        labels:     &[Label],
        n_features: usize,
        cfg:        BaggingConfig,
    ) -> Result<Self> {
        if xs.is_empty() {
            bail!("Cannot fit ensemble on an empty training set");
        }
        if xs.len() != labels.len() {
            bail!("Mismatched training data: {} vectors, {} labels", xs.len(), labels.len());
        }
        if cfg.n_estimators == 0 {
            bail!("Ensemble needs at least one estimator");
        }

        let n       = xs.len();
        let mut rng = StdRng::seed_from_u64(cfg.seed);

        let estimators = (0..cfg.n_estimators)
            .map(|k| {
                let weights = bootstrap_weights(n, &mut rng);
                let drawn   = weights.iter().filter(|&&w| w > 0.0).count();
                tracing::debug!("Estimator {}: {} distinct samples of {}", k + 1, drawn, n);
                MultinomialNb::fit_weighted(xs, labels, &weights, n_features, cfg.alpha)
            })
            .collect::<Result<Vec<_>>>()?;

        tracing::info!("Fitted bagging ensemble of {} naive-Bayes learners", estimators.len());
        Ok(Self { estimators })
    }

    /// Number of votes per class, indexed by `Label::index`
    pub fn votes(&self, x: &SparseVector) -> [usize; 2] {
        let mut votes = [0usize; 2];
        for est in &self.estimators {
            votes[est.predict(x).index()] += 1;
        }
        votes
    }

    /// Mean class probability across learners
    pub fn predict_proba(&self, x: &SparseVector) -> [f64; 2] {
        let mut sum = [0.0f64; 2];
        for est in &self.estimators {
            let p = est.predict_proba(x);
            sum[0] += p[0];
            sum[1] += p[1];
        }
        let k = self.estimators.len() as f64;
        sum.map(|s| s / k)
    }

    /// Majority vote, tie broken by mean probability
    pub fn predict(&self, x: &SparseVector) -> Label {
        let [ham, spam] = self.votes(x);
        match spam.cmp(&ham) {
            std::cmp::Ordering::Greater => Label::Spam,
            std::cmp::Ordering::Less    => Label::Ham,
            std::cmp::Ordering::Equal   => {
                let p = self.predict_proba(x);
                if p[Label::Spam.index()] > p[Label::Ham.index()] { Label::Spam } else { Label::Ham }
            }
        }
    }

    pub fn predict_all(&self, xs: &[SparseVector]) -> Vec<Label> {
        xs.iter().map(|x| self.predict(x)).collect()
    }

    pub fn n_estimators(&self) -> usize {
        self.estimators.len()
    }

    /// Input width every learner was fitted on
    pub fn n_features(&self) -> usize {
        self.estimators.first().map_or(0, MultinomialNb::n_features)
    }
}

/// Bootstrap resample of size n expressed as per-sample counts
fn bootstrap_weights(n: usize, rng: &mut StdRng) -> Vec<f64> {
    let mut weights = vec![0.0; n];
    for _ in 0..n {
        weights[rng.gen_range(0..n)] += 1.0;
    }
    weights
}
