// ============================================================
// Layer 4 - Keyword Override
// ============================================================
// A short denylist of obvious spam markers. If any of them
// appears as a token of the normalized text, the message is
// spam and the classifier is never consulted.
//
// Normalized text is stemmed, so the keywords are stemmed with
// the same Normalizer when the override is built:
//   "lottery"         → "lotteri"
//   "congratulations" → "congratul"
// Without this, those two keywords could never match.
//
// Known trade-off: a legitimate "free offer" notice is flagged.
// The override always takes precedence over the classifier.

use crate::data::preprocessor::Normalizer;

/// The literal denylist, in surface form
pub const SPAM_KEYWORDS: &[&str] = &[
    "lottery",
    "congratulations",
    "offer",
    "free",
    "win",
    "prize",
    "click",
    "money",
];

pub struct KeywordOverride {
    /// (surface keyword, stem) pairs, in denylist order
    entries: Vec<(&'static str, String)>,
}

impl KeywordOverride {
    /// Build the override for the default denylist
    pub fn new(normalizer: &Normalizer) -> Self {
        Self::with_keywords(normalizer, SPAM_KEYWORDS)
    }

    pub fn with_keywords(normalizer: &Normalizer, keywords: &[&'static str]) -> Self {
        let entries = keywords
            .iter()
            .map(|&kw| (kw, normalizer.stem(&kw.to_lowercase())))
            .collect();
        Self { entries }
    }

    /// Return the first denylisted keyword present as a token
    /// of `normalized`, or `None` when the text is clean.
    pub fn matched(&self, normalized: &str) -> Option<&'static str> {
        normalized.split_whitespace().find_map(|token| {
            self.entries
                .iter()
                .find(|(_, stem)| stem == token)
                .map(|(kw, _)| *kw)
        })
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_obvious_spam() {
        let n  = Normalizer::new();
        let ko = KeywordOverride::new(&n);
        let normalized = n.normalize("Congratulations! You WIN a FREE prize, click now");
        assert!(ko.matched(&normalized).is_some());
        // first token of the message is the first match
        assert_eq!(ko.matched(&normalized), Some("congratulations"));
    }

    #[test]
    fn test_every_keyword_matches_its_own_normalized_form() {
        let n  = Normalizer::new();
        let ko = KeywordOverride::new(&n);
        for kw in SPAM_KEYWORDS {
            let normalized = n.normalize(kw);
            assert_eq!(ko.matched(&normalized), Some(*kw), "keyword {kw}");
        }
    }

    #[test]
    fn test_inflected_forms_match() {
        let n  = Normalizer::new();
        let ko = KeywordOverride::new(&n);
        assert!(ko.matched(&n.normalize("You are WINNING!")).is_some());
        assert!(ko.matched(&n.normalize("Claim your lottery now")).is_some());
    }

    #[test]
    fn test_clean_message_does_not_match() {
        let n  = Normalizer::new();
        let ko = KeywordOverride::new(&n);
        let normalized = n.normalize("Hey, are we still meeting for lunch at noon?");
        assert_eq!(ko.matched(&normalized), None);
    }

    #[test]
    fn test_matches_whole_tokens_only() {
        let n  = Normalizer::new();
        let ko = KeywordOverride::new(&n);
        // "window" contains "win" but is a different token
        assert!(ko.matched("window").is_none());
        assert!(ko.matched("").is_none());
    }
}
