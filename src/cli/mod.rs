// ============================================================
// Layer 1 - CLI / Presentation Layer
// ============================================================
// Entry point for all user interaction. Parses arguments with
// clap and delegates the work to Layer 2 (application).
//
// Two commands are supported:
//   1. `train` - fits the model and prints the evaluation report
//   2. `check` - loads the model and renders a verdict for one
//                message (SPAM DETECTED / SAFE MESSAGE)
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

pub mod commands;

use std::io::Read;

use anyhow::{Context, Result};
use clap::Parser;
use commands::{CheckArgs, Commands, TrainArgs};

use crate::domain::decision::Decision;
use crate::domain::traits::MessageClassifier;

/// The main CLI struct
#[derive(Parser, Debug)]
#[command(
    name = "sms-spam-detector",
    version,
    about = "Train a bagged naive-Bayes SMS spam model, then check messages against it."
)]
pub struct Cli {
    /// The subcommand to run (train or check)
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Match on the subcommand and dispatch to the correct use case.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Train(args) => run_train(args),
            Commands::Check(args) => run_check(args),
        }
    }
}

/// Handles the `train` subcommand.
fn run_train(args: TrainArgs) -> Result<()> {
    use crate::application::train_use_case::TrainUseCase;

    tracing::info!("Starting training on dataset: {}", args.data.display());

    let summary = TrainUseCase::new(args.into()).execute()?;

    println!("\nAccuracy: {:.4}", summary.report.accuracy);
    println!("\nDetailed Report:\n{}", summary.report);
    println!(
        "Model saved successfully as {} ({} train / {} test messages)",
        summary.model_path.display(),
        summary.train_size,
        summary.test_size
    );
    Ok(())
}

/// Handles the `check` subcommand.
/// The detector is built once here and only borrowed afterwards.
fn run_check(args: CheckArgs) -> Result<()> {
    use crate::application::check_use_case::SpamDetector;

    let detector = SpamDetector::from_path(&args.model)?;

    let message = match args.message {
        Some(m) => m,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Cannot read message from stdin")?;
            buf
        }
    };

    let decision = detector.classify(&message);
    if let Some(d) = &decision {
        tracing::info!("Verdict: {} (keyword override: {})", d.label(), d.is_override());
    }

    match decision {
        None => eprintln!("⚠️  Please enter a message first!"),
        Some(decision) if args.json => println!("{}", serde_json::to_string(&decision)?),
        Some(decision) => println!("{}", render(&decision)),
    }
    Ok(())
}

/// One of the two mutually exclusive result states
fn render(decision: &Decision) -> String {
    if decision.is_spam() {
        "🚨 SPAM DETECTED\nThis message appears to be spam. Be cautious!".to_string()
    } else {
        "✅ SAFE MESSAGE\nThis message appears to be legitimate.".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::label::Label;

    #[test]
    fn test_render_states_are_exclusive() {
        let spam = render(&Decision::OverriddenSpam { keyword: "win".into() });
        let ham  = render(&Decision::Classified { label: Label::Ham });
        assert!(spam.contains("SPAM DETECTED") && !spam.contains("SAFE"));
        assert!(ham.contains("SAFE MESSAGE") && !ham.contains("SPAM"));
    }
}
