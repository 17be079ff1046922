// ============================================================
// Layer 3 - Label and LabeledExample
// ============================================================
// A message is either spam or ham (legitimate). The dataset
// spells these "spam" and "ham"; callers may also say
// "not-spam". Parsing is case-insensitive.
//
// Reference: Rust Book §6 (Enums and Pattern Matching)

use std::{fmt, str::FromStr};

use anyhow::bail;
use serde::{Deserialize, Serialize};

/// The binary verdict of the detector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    Ham,
    Spam,
}

impl Label {
    /// Every label, in class-index order.
    /// Index 0 is ham and index 1 is spam throughout the ml layer.
    pub const ALL: [Label; 2] = [Label::Ham, Label::Spam];

    /// Position of this label in per-class arrays
    pub fn index(self) -> usize {
        match self {
            Label::Ham  => 0,
            Label::Spam => 1,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Label::Ham  => "ham",
            Label::Spam => "spam",
        }
    }

    pub fn is_spam(self) -> bool {
        self == Label::Spam
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Label {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "spam"                              => Ok(Label::Spam),
            "ham" | "not-spam" | "not_spam"     => Ok(Label::Ham),
            other => bail!("Unknown label '{other}' (expected 'spam' or 'ham')"),
        }
    }
}

/// One row of the training dataset: the raw message and its label.
/// Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledExample {
    /// The message exactly as it appears in the dataset
    pub text: String,

    /// Ground truth class
    pub label: Label,
}

impl LabeledExample {
    pub fn new(text: impl Into<String>, label: Label) -> Self {
        Self { text: text.into(), label }
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("SPAM".parse::<Label>().unwrap(), Label::Spam);
        assert_eq!(" Ham ".parse::<Label>().unwrap(), Label::Ham);
        assert_eq!("not-spam".parse::<Label>().unwrap(), Label::Ham);
    }

    #[test]
    fn test_unknown_label_is_rejected() {
        assert!("maybe".parse::<Label>().is_err());
    }

    #[test]
    fn test_index_matches_all_order() {
        for (i, label) in Label::ALL.iter().enumerate() {
            assert_eq!(label.index(), i);
        }
    }
}
