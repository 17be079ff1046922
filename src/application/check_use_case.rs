// ============================================================
// Layer 2 - Check Use Case (presentation boundary)
// ============================================================
// Judges one message at a time:
//
//   raw message
//       │  blank? ──▶ warn, no verdict
//       ▼
//   Normalizer
//       │
//       ▼
//   KeywordOverride ──match──▶ Decision::OverriddenSpam
//       │ no match
//       ▼
//   Inferencer (vectorizer + ensemble) ──▶ Decision::Classified
//
// SpamDetector is built once at process start from a loaded
// artifact and never mutated afterwards, so it can be shared
// by reference for the lifetime of the process.

use std::path::Path;

use anyhow::Result;

use crate::data::{keywords::KeywordOverride, preprocessor::Normalizer};
use crate::domain::decision::Decision;
use crate::domain::traits::{MessageClassifier, Persistable};
use crate::infra::artifact::ModelArtifact;
use crate::ml::inferencer::Inferencer;

pub struct SpamDetector {
    normalizer: Normalizer,
    keywords:   KeywordOverride,
    inferencer: Inferencer,
}

impl SpamDetector {
    /// Wrap an already-loaded artifact
    pub fn new(artifact: ModelArtifact) -> Self {
        let normalizer = Normalizer::new();
        let keywords   = KeywordOverride::new(&normalizer);
        Self { normalizer, keywords, inferencer: Inferencer::new(artifact) }
    }

    /// Load the artifact at `path`. Failure is fatal for the caller.
    pub fn from_path(path: &Path) -> Result<Self> {
        Ok(Self::new(ModelArtifact::load(path)?))
    }

    /// The two-stage decision over already-normalized text.
    /// The classifier only runs when no keyword matched.
    pub fn decide(&self, normalized: &str) -> Decision {
        match self.keywords.matched(normalized) {
            Some(keyword) => {
                tracing::debug!("Keyword override matched '{}'", keyword);
                Decision::OverriddenSpam { keyword: keyword.to_string() }
            }
            None => Decision::Classified { label: self.inferencer.predict(normalized) },
        }
    }
}

impl MessageClassifier for SpamDetector {
    fn classify(&self, message: &str) -> Option<Decision> {
        if message.trim().is_empty() {
            tracing::warn!("Empty message: nothing to classify");
            return None;
        }

        let normalized = self.normalizer.normalize(message);
        tracing::debug!("Normalized message: '{}'", normalized);
        Some(self.decide(&normalized))
    }
}
