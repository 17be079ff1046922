// ============================================================
// Layer 6 - Model Artifact
// ============================================================
// Saves and restores the fitted (classifier, vectorizer) pair
// as ONE binary file.
//
// Invariant:
//   The vectorizer's vocabulary and idf table define the input
//   space the classifier was fitted in, so the two are always
//   written and read together, and their widths must agree.
//
// Format:
//   bincode encoding of ModelArtifact. Not a public format;
//   only this crate reads it back.
//
// File naming convention:
//   sms_spam_model.bin   ← written by `train`, read by `check`
//
// Reference: bincode crate documentation
//            Rust Book §9 (Error Handling)

use std::{
    fs::{self, File},
    io::{BufReader, BufWriter, Write},
    path::Path,
};

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::domain::traits::Persistable;
use crate::ml::bagging::BaggingClassifier;
use crate::ml::vectorizer::TfidfVectorizer;

/// The fitted pipeline state shared by training and inference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub classifier: BaggingClassifier,
    pub vectorizer: TfidfVectorizer,
}

impl ModelArtifact {
    pub fn new(classifier: BaggingClassifier, vectorizer: TfidfVectorizer) -> Self {
        Self { classifier, vectorizer }
    }

    /// The classifier must accept exactly the vectors this
    /// vectorizer produces.
    fn validate(&self) -> Result<()> {
        let (fitted, produced) = (self.classifier.n_features(), self.vectorizer.vocabulary_size());
        if fitted != produced {
            bail!(
                "Model artifact is inconsistent: classifier expects {fitted} features, \
                 vectorizer produces {produced}"
            );
        }
        Ok(())
    }
}

impl Persistable for ModelArtifact {
    /// Serialise to `path`, creating parent directories as needed
    fn save(&self, path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Cannot create directory '{}'", parent.display()))?;
        }

        let file = File::create(path)
            .with_context(|| format!("Cannot create model artifact '{}'", path.display()))?;
        let mut writer = BufWriter::new(file);

        bincode::serialize_into(&mut writer, self)
            .with_context(|| format!("Failed to write model artifact to '{}'", path.display()))?;
        writer.flush()?;

        tracing::debug!("Saved model artifact to '{}'", path.display());
        Ok(())
    }

    /// Deserialise from `path`. A missing or unreadable artifact
    /// is fatal for the caller; there is no fallback model.
    fn load(path: &Path) -> Result<Self> {
        let file = File::open(path).with_context(|| {
            format!(
                "Cannot open model artifact '{}'. Have you run 'train' first?",
                path.display()
            )
        })?;

        let artifact: ModelArtifact = bincode::deserialize_from(BufReader::new(file))
            .with_context(|| format!("'{}' is not a valid model artifact", path.display()))?;
        artifact.validate()?;

        tracing::info!(
            "Model loaded from '{}' ({} learners, {} terms)",
            path.display(),
            artifact.classifier.n_estimators(),
            artifact.vectorizer.vocabulary_size()
        );
        Ok(artifact)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::label::Label;
    use crate::ml::bagging::BaggingConfig;

    fn tiny_artifact() -> ModelArtifact {
        let docs = vec![
            "claim cash reward".to_string(),
            "urgent cash prize claim".to_string(),
            "see lunch tomorrow".to_string(),
            "call home tonight".to_string(),
        ];
        let labels = vec![Label::Spam, Label::Spam, Label::Ham, Label::Ham];
        let (vectorizer, xs) = TfidfVectorizer::fit_transform(&docs, 3000).unwrap();
        let cfg = BaggingConfig { n_estimators: 3, alpha: 1.0, seed: 42 };
        let classifier = BaggingClassifier::fit(&xs, &labels, vectorizer.vocabulary_size(), cfg).unwrap();
        ModelArtifact::new(classifier, vectorizer)
    }

    #[test]
    fn test_save_then_load_is_identical() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("model.bin");

        let artifact = tiny_artifact();
        artifact.save(&path).unwrap();
        let loaded = ModelArtifact::load(&path).unwrap();

        assert_eq!(loaded, artifact);
    }

    #[test]
    fn test_missing_artifact_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ModelArtifact::load(&dir.path().join("absent.bin")).unwrap_err();
        assert!(format!("{err:#}").contains("train"));
    }

    #[test]
    fn test_garbage_file_is_an_error() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.bin");
        fs::write(&path, b"not a model").unwrap();
        assert!(ModelArtifact::load(&path).is_err());
    }
}
