use crate::data::preprocessor::Normalizer;
use crate::domain::label::{Label, LabeledExample};

/// Normalized texts and their labels, stored column-wise so the
/// vectorizer can borrow the texts and the classifier the labels.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SmsDataset {
    texts:  Vec<String>,
    labels: Vec<Label>,
}

impl SmsDataset {
    /// Normalize every example's text
    pub fn from_examples(examples: &[LabeledExample], normalizer: &Normalizer) -> Self {
        let (texts, labels) = examples
            .iter()
            .map(|ex| (normalizer.normalize(&ex.text), ex.label))
            .unzip();
        Self { texts, labels }
    }

    pub fn texts(&self) -> &[String] { &self.texts }

    pub fn labels(&self) -> &[Label] { &self.labels }

    pub fn len(&self) -> usize { self.labels.len() }

    pub fn is_empty(&self) -> bool { self.labels.is_empty() }

    /// Number of examples carrying `label`
    pub fn count(&self, label: Label) -> usize {
        self.labels.iter().filter(|&&l| l == label).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_examples_normalizes() {
        let n  = Normalizer::new();
        let ds = SmsDataset::from_examples(
            &[
                LabeledExample::new("See you at LUNCH!", Label::Ham),
                LabeledExample::new("Claim your reward", Label::Spam),
            ],
            &n,
        );
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.texts()[0], "see lunch");
        assert_eq!(ds.count(Label::Spam), 1);
    }
}
