// ============================================================
// Layer 1 - CLI Commands and Arguments
// ============================================================
// Defines the two subcommands, `train` and `check`, and their
// flags. Every flag has a default, so `train` with no flags
// reproduces the reference run exactly.
//
// Reference: Rust Book §12 (Building a CLI Program)

use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::application::train_use_case::TrainConfig;

/// The two top-level subcommands available to the user
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fit the spam model on a labelled CSV and save it
    Train(TrainArgs),

    /// Classify one message with a trained model
    Check(CheckArgs),
}

/// All arguments for the `train` command.
#[derive(Args, Debug)]
pub struct TrainArgs {
    /// Labelled dataset: label column v1, message column v2
    #[arg(long, default_value = "spam.csv")]
    pub data: PathBuf,

    /// Where to write the model artifact
    #[arg(long, default_value = "sms_spam_model.bin")]
    pub model: PathBuf,

    /// Fraction of messages held out for evaluation
    #[arg(long, default_value_t = 0.2)]
    pub test_size: f64,

    /// Seed for the train/test shuffle and the bootstrap draws
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Vocabulary bound of the TF-IDF vectorizer
    #[arg(long, default_value_t = 3000)]
    pub max_features: usize,

    /// Number of naive-Bayes learners in the ensemble
    #[arg(long, default_value_t = 10)]
    pub estimators: usize,

    /// Additive smoothing of each naive-Bayes learner
    #[arg(long, default_value_t = 1.0)]
    pub alpha: f64,
}

/// Convert CLI TrainArgs into the application-layer TrainConfig.
/// The application layer never sees clap types.
impl From<TrainArgs> for TrainConfig {
    fn from(a: TrainArgs) -> Self {
        TrainConfig {
            data_path:     a.data,
            model_path:    a.model,
            test_fraction: a.test_size,
            seed:          a.seed,
            max_features:  a.max_features,
            n_estimators:  a.estimators,
            alpha:         a.alpha,
        }
    }
}

/// All arguments for the `check` command
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// The message to classify. Read from stdin when omitted.
    #[arg(long, short)]
    pub message: Option<String>,

    /// Model artifact written by `train`
    #[arg(long, default_value = "sms_spam_model.bin")]
    pub model: PathBuf,

    /// Print the decision as JSON instead of the rendered verdict
    #[arg(long)]
    pub json: bool,
}
