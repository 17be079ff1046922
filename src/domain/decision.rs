// ============================================================
// Layer 3 - Decision
// ============================================================
// The detector decides in two stages:
//
//   1. Keyword override: a denylisted keyword in the normalized
//      text declares spam immediately.
//   2. Otherwise the statistical classifier labels the text.
//
// Decision records WHICH stage produced the verdict so the
// short-circuit is visible to callers and tests.

use serde::Serialize;

use crate::domain::label::Label;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum Decision {
    /// A denylisted keyword matched; the classifier was never consulted.
    OverriddenSpam { keyword: String },

    /// No keyword matched; the ensemble produced this label.
    Classified { label: Label },
}

impl Decision {
    /// The verdict carried by this decision
    pub fn label(&self) -> Label {
        match self {
            Decision::OverriddenSpam { .. } => Label::Spam,
            Decision::Classified { label }  => *label,
        }
    }

    pub fn is_spam(&self) -> bool {
        self.label().is_spam()
    }

    pub fn is_override(&self) -> bool {
        matches!(self, Decision::OverriddenSpam { .. })
    }
}
