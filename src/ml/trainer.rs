// ============================================================
// Layer 5 - Training Loop
// ============================================================
// Fits the vectorizer and the ensemble, then evaluates the
// fitted pipeline on the held-out test set.
//
//   train texts ──fit──▶ TfidfVectorizer ──transform──▶ train vectors
//                                      │                      │
//                                      │                      ▼
//                                      │            BaggingClassifier::fit
//                                      ▼                      │
//   test texts ─────────────────transform──▶ test vectors ──predict──▶ report
//
// The test set is only ever TRANSFORMED with the vocabulary
// learned from the training set; it never influences the fit.
//
// Reference: Breiman (1996) Bagging Predictors

use anyhow::Result;

use crate::application::train_use_case::TrainConfig;
use crate::data::dataset::SmsDataset;
use crate::domain::label::Label;
use crate::infra::artifact::ModelArtifact;
use crate::infra::metrics::ClassificationReport;
use crate::ml::bagging::{BaggingClassifier, BaggingConfig};
use crate::ml::vectorizer::TfidfVectorizer;

/// Everything a training run produces
pub struct TrainingOutcome {
    pub artifact: ModelArtifact,
    pub report:   ClassificationReport,
}

pub fn run_training(
    cfg:   &TrainConfig,
    train: &SmsDataset,
    test:  &SmsDataset,
) -> Result<TrainingOutcome> {
    // ── Vectorize ─────────────────────────────────────────────────────────────
    let (vectorizer, train_x) = TfidfVectorizer::fit_transform(train.texts(), cfg.max_features)?;
    let test_x = vectorizer.transform_all(test.texts());

    // ── Fit ensemble ──────────────────────────────────────────────────────────
    let bagging_cfg = BaggingConfig {
        n_estimators: cfg.n_estimators,
        alpha:        cfg.alpha,
        seed:         cfg.seed,
    };
    let classifier = BaggingClassifier::fit(
        &train_x,
        train.labels(),
        vectorizer.vocabulary_size(),
        bagging_cfg,
    )?;

    // ── Evaluate on held-out data ─────────────────────────────────────────────
    let y_pred = classifier.predict_all(&test_x);
    let report = ClassificationReport::from_predictions(test.labels(), &y_pred);
    tracing::info!("Held-out accuracy: {:.4} on {} messages", report.accuracy, test.len());
    if let Some(spam) = report.metrics_for(Label::Spam) {
        tracing::info!("Spam precision {:.4}, recall {:.4}", spam.precision, spam.recall);
    }

    Ok(TrainingOutcome {
        artifact: ModelArtifact::new(classifier, vectorizer),
        report,
    })
}
