// ============================================================
// Layer 4 - Text Normalizer
// ============================================================
// Turns a raw SMS into the canonical token string that both
// the keyword override and the vectorizer consume.
//
// Steps (applied in order):
//   1. Case-fold to lowercase
//   2. Remove ASCII punctuation  !"#$%&'()*+,-./:;<=>?@[\]^_`{|}~
//   3. Split on whitespace
//   4. Drop English stop words
//   5. Stem each surviving token with the Snowball English
//      stemmer, repeating until the stem stops changing
//   6. Drop the stem if it is itself a stop word
//   7. Join the stems with single spaces
//
// Every emitted token is a stop-word-free fixed point of the
// stemmer, so normalizing normalized text changes nothing:
//   "agreed" → "agre" → "agr"   (emitted as "agr")
//   "youre"  → "your"           (dropped)
//
// Removing punctuation before splitting means "don't" becomes
// the single token "dont", and "lunch?" becomes "lunch".
//
// Reference: Porter (1980) An algorithm for suffix stripping
//            snowballstem.org English (Porter2) stemmer
//            Rust Book §8 (Strings in Rust)

use std::collections::HashSet;

use rust_stemmers::{Algorithm, Stemmer};

/// The NLTK English stop-word list.
/// Entries containing apostrophes can never match a normalized
/// token; they are kept so the list stays the canonical one.
const ENGLISH_STOP_WORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you",
    "you're", "you've", "you'll", "you'd", "your", "yours", "yourself",
    "yourselves", "he", "him", "his", "himself", "she", "she's", "her",
    "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this",
    "that", "that'll", "these", "those", "am", "is", "are", "was", "were",
    "be", "been", "being", "have", "has", "had", "having", "do", "does",
    "did", "doing", "a", "an", "the", "and", "but", "if", "or", "because",
    "as", "until", "while", "of", "at", "by", "for", "with", "about",
    "against", "between", "into", "through", "during", "before", "after",
    "above", "below", "to", "from", "up", "down", "in", "out", "on", "off",
    "over", "under", "again", "further", "then", "once", "here", "there",
    "when", "where", "why", "how", "all", "any", "both", "each", "few",
    "more", "most", "other", "some", "such", "no", "nor", "not", "only",
    "own", "same", "so", "than", "too", "very", "s", "t", "can", "will",
    "just", "don", "don't", "should", "should've", "now", "d", "ll", "m",
    "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't",
    "didn", "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn",
    "hasn't", "haven", "haven't", "isn", "isn't", "ma", "mightn",
    "mightn't", "mustn", "mustn't", "needn", "needn't", "shan", "shan't",
    "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won",
    "won't", "wouldn", "wouldn't",
];

/// Stateless text normalizer.
/// Holds only fixed tables (stop words, stemmer rules) so one
/// instance can be shared by training and inference.
pub struct Normalizer {
    stemmer:    Stemmer,
    stop_words: HashSet<&'static str>,
}

/// Upper bound on re-stemming a token
const MAX_STEM_PASSES: usize = 8;

impl Normalizer {
    pub fn new() -> Self {
        Self {
            stemmer:    Stemmer::create(Algorithm::English),
            stop_words: ENGLISH_STOP_WORDS.iter().copied().collect(),
        }
    }

    /// Normalize a raw message into whitespace-joined stems.
    /// Empty or punctuation-only input yields an empty string.
    pub fn normalize(&self, text: &str) -> String {
        // ── Steps 1-2: lowercase and strip punctuation ───────────────────────
        let cleaned: String = text
            .to_lowercase()
            .chars()
            .filter(|c| !c.is_ascii_punctuation())
            .collect();

        // ── Steps 3-7: tokenise, filter, stem, filter again, rejoin ──────────
        cleaned
            .split_whitespace()
            .filter(|token| !self.is_stop_word(token))
            .map(|token| self.stem(token))
            .filter(|stem| !self.is_stop_word(stem))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Stem a single lowercase token to a fixed point of the stemmer
    pub fn stem(&self, token: &str) -> String {
        let mut current = token.to_string();
        for _ in 0..MAX_STEM_PASSES {
            let next = self.stemmer.stem(&current).into_owned();
            if next == current {
                break;
            }
            current = next;
        }
        current
    }

    pub fn is_stop_word(&self, token: &str) -> bool {
        self.stop_words.contains(token)
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}
