// ============================================================
// Layer 3 - Core Traits (Abstractions)
// ============================================================
// The application layer programs against these traits rather
// than concrete loaders, detectors, or file formats:
//   - CsvLoader implements ExampleSource
//   - SpamDetector implements MessageClassifier
//   - ModelArtifact implements Persistable
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use std::path::Path;

use anyhow::Result;

use crate::domain::{decision::Decision, label::LabeledExample};

// ─── ExampleSource ────────────────────────────────────────────────────────────
/// Any component that can produce labelled training examples.
pub trait ExampleSource {
    /// Load every example. A malformed source is an error;
    /// there is no partial recovery.
    fn load_all(&self) -> Result<Vec<LabeledExample>>;
}

// ─── MessageClassifier ────────────────────────────────────────────────────────
/// Any component that can judge a single message.
pub trait MessageClassifier {
    /// Returns `None` when the message is blank and no
    /// prediction was attempted.
    fn classify(&self, message: &str) -> Option<Decision>;
}

// ─── Persistable ──────────────────────────────────────────────────────────────
/// Any component whose state can be saved to and restored from disk.
pub trait Persistable: Sized {
    /// Save this component's state to the given path
    fn save(&self, path: &Path) -> Result<()>;

    /// Load a component's state from the given path
    fn load(path: &Path) -> Result<Self>;
}
