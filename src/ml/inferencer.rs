// ============================================================
// Layer 5 - Inferencer
// ============================================================
use crate::domain::label::Label;
use crate::infra::artifact::ModelArtifact;

/// Read-only view over a loaded artifact.
/// Vectorizes normalized text with the FROZEN vocabulary and
/// asks the ensemble for a label.
pub struct Inferencer {
    artifact: ModelArtifact,
}

impl Inferencer {
    pub fn new(artifact: ModelArtifact) -> Self {
        Self { artifact }
    }

    /// Label already-normalized text
    pub fn predict(&self, normalized: &str) -> Label {
        let x     = self.artifact.vectorizer.transform(normalized);
        if x.is_zero() {
            tracing::debug!("No known terms; the vote rests on class priors alone");
        }
        let votes = self.artifact.classifier.votes(&x);
        let label = self.artifact.classifier.predict(&x);

        tracing::debug!(
            "Classified with {}/{} known terms, votes ham={} spam={} → {}",
            x.nnz(), x.dim(), votes[0], votes[1], label
        );
        label
    }
}
