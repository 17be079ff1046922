// ============================================================
// Layer 2 - TrainUseCase
// ============================================================
// Orchestrates the full training pipeline in order:
//
//   Step 1: Load the labelled CSV       (Layer 4 - data)
//   Step 2: Seeded train/test split     (Layer 4 - data)
//   Step 3: Normalize both sets         (Layer 4 - data)
//   Step 4: Fit + evaluate              (Layer 5 - ml)
//   Step 5: Save the model artifact     (Layer 6 - infra)
//
// The split happens on raw examples so the test set is set
// aside before anything is learned from the text.
//
// Reference: Rust Book §13 (Iterators and Closures)

use std::path::PathBuf;

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

use crate::data::{
    dataset::SmsDataset,
    loader::CsvLoader,
    preprocessor::Normalizer,
    splitter::split_train_test,
};
use crate::domain::label::Label;
use crate::domain::traits::{ExampleSource, Persistable};
use crate::infra::metrics::ClassificationReport;
use crate::ml::{
    bagging::DEFAULT_N_ESTIMATORS,
    naive_bayes::DEFAULT_ALPHA,
    trainer::run_training,
    vectorizer::DEFAULT_MAX_FEATURES,
};

// ─── Training Configuration ──────────────────────────────────────────────────
// All settings for a training run. The defaults reproduce the
// reference run: spam.csv in, sms_spam_model.bin out, 20% held
// out, seed 42, 3000 terms, 10 learners, alpha 1.0.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainConfig {
    pub data_path:     PathBuf,
    pub model_path:    PathBuf,
    pub test_fraction: f64,
    pub seed:          u64,
    pub max_features:  usize,
    pub n_estimators:  usize,
    pub alpha:         f64,
}

impl Default for TrainConfig {
    fn default() -> Self {
        Self {
            data_path:     PathBuf::from("spam.csv"),
            model_path:    PathBuf::from("sms_spam_model.bin"),
            test_fraction: 0.2,
            seed:          42,
            max_features:  DEFAULT_MAX_FEATURES,
            n_estimators:  DEFAULT_N_ESTIMATORS,
            alpha:         DEFAULT_ALPHA,
        }
    }
}

/// What the caller gets back for printing
#[derive(Debug, Clone)]
pub struct TrainSummary {
    pub train_size: usize,
    pub test_size:  usize,
    pub report:     ClassificationReport,
    pub model_path: PathBuf,
}

// ─── TrainUseCase ─────────────────────────────────────────────────────────────
pub struct TrainUseCase {
    config: TrainConfig,
}

impl TrainUseCase {
    pub fn new(config: TrainConfig) -> Self {
        Self { config }
    }

    /// Execute the full training pipeline end to end
    pub fn execute(&self) -> Result<TrainSummary> {
        let source = CsvLoader::new(&self.config.data_path);
        self.execute_with(&source)
    }

    /// Run the pipeline against any example source
    pub fn execute_with(&self, source: &dyn ExampleSource) -> Result<TrainSummary> {
        let cfg = &self.config;

        // ── Step 1: Load labelled examples ────────────────────────────────────
        let examples = source.load_all()?;
        if examples.is_empty() {
            bail!("The dataset contains no examples");
        }

        // ── Step 2: Train / test split ────────────────────────────────────────
        let (train_examples, test_examples) =
            split_train_test(examples, cfg.test_fraction, cfg.seed);

        // ── Step 3: Normalize ─────────────────────────────────────────────────
        let normalizer = Normalizer::new();
        let train = SmsDataset::from_examples(&train_examples, &normalizer);
        let test  = SmsDataset::from_examples(&test_examples, &normalizer);
        if train.is_empty() {
            bail!("test_fraction {} leaves no training examples", cfg.test_fraction);
        }
        tracing::info!(
            "Split: {} train ({} spam), {} test ({} spam)",
            train.len(), train.count(Label::Spam),
            test.len(),  test.count(Label::Spam),
        );

        // ── Step 4: Fit and evaluate ──────────────────────────────────────────
        let outcome = run_training(cfg, &train, &test)?;

        // ── Step 5: Persist ───────────────────────────────────────────────────
        outcome.artifact.save(&cfg.model_path)?;
        tracing::info!("Model artifact written to '{}'", cfg.model_path.display());

        Ok(TrainSummary {
            train_size: train.len(),
            test_size:  test.len(),
            report:     outcome.report,
            model_path: cfg.model_path.clone(),
        })
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::domain::label::LabeledExample;

    /// In-memory corpus with clearly separated vocabularies
    pub(crate) struct FixedSource(pub Vec<LabeledExample>);

    impl ExampleSource for FixedSource {
        fn load_all(&self) -> Result<Vec<LabeledExample>> {
            Ok(self.0.clone())
        }
    }

    pub(crate) fn toy_corpus() -> Vec<LabeledExample> {
        let spam = [
            "URGENT! Claim your cash reward now",
            "Claim cash reward, reply URGENT",
            "Your account has a cash reward waiting, claim it",
            "Urgent cash bonus, reply YES to claim",
            "Exclusive cash reward for you, claim today",
            "Reply CLAIM to receive your urgent cash bonus",
            "Guaranteed cash reward, text CLAIM",
            "URGENT reward unclaimed, call to claim cash",
        ];
        let ham = [
            "Hey, are we still meeting for lunch at noon?",
            "See you at lunch tomorrow",
            "Can you pick up milk on the way home",
            "Running late, see you at home",
            "Lunch was great, thanks mum",
            "Call me when you get home tonight",
            "Are we meeting at the cafe or at home",
            "Dinner tonight at home with mum",
        ];
        spam.iter()
            .map(|t| LabeledExample::new(*t, Label::Spam))
            .chain(ham.iter().map(|t| LabeledExample::new(*t, Label::Ham)))
            .collect()
    }

    #[test]
    fn test_default_config_matches_reference_run() {
        let cfg = TrainConfig::default();
        assert_eq!(cfg.data_path,    PathBuf::from("spam.csv"));
        assert_eq!(cfg.model_path,   PathBuf::from("sms_spam_model.bin"));
        assert_eq!(cfg.max_features, 3000);
        assert_eq!(cfg.n_estimators, 10);
        assert_eq!(cfg.seed,         42);
    }

    #[test]
    fn test_execute_writes_artifact_and_reports() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = TrainConfig {
            model_path: dir.path().join("model.bin"),
            ..TrainConfig::default()
        };

        let summary = TrainUseCase::new(cfg)
            .execute_with(&FixedSource(toy_corpus()))
            .unwrap();

        assert!(summary.model_path.exists());
        assert_eq!(summary.train_size + summary.test_size, 16);
        assert_eq!(summary.test_size, 4);
        assert_eq!(summary.report.macro_avg.support, 4);
    }

    #[test]
    fn test_empty_dataset_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = TrainConfig {
            model_path: dir.path().join("model.bin"),
            ..TrainConfig::default()
        };
        assert!(TrainUseCase::new(cfg).execute_with(&FixedSource(Vec::new())).is_err());
    }

    #[test]
    fn test_missing_dataset_file_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = TrainConfig {
            data_path:  dir.path().join("absent.csv"),
            model_path: dir.path().join("model.bin"),
            ..TrainConfig::default()
        };
        assert!(TrainUseCase::new(cfg).execute().is_err());
    }
}
