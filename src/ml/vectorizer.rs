// ============================================================
// Layer 5 - TF-IDF Vectorizer
// ============================================================
// Maps normalized text into a fixed-size vector space.
//
// Fit (training only):
//   1. Tokenise each document with the word pattern \b\w\w+\b
//      (single-character tokens are ignored)
//   2. Count corpus term frequency and document frequency
//   3. Keep the `max_features` most frequent terms
//      (ties broken alphabetically so fits are deterministic)
//   4. Index the kept terms alphabetically
//   5. Smoothed inverse document frequency per kept term:
//        idf(t) = ln((1 + n) / (1 + df(t))) + 1
//
// Transform (training and inference):
//   weight(t) = count(t in doc) * idf(t), then L2-normalise.
//   Terms outside the vocabulary are skipped silently.
//
// The vocabulary and idf table are frozen after fit and are
// persisted with the classifier inside the model artifact.
//
// Reference: Manning, Raghavan & Schütze (2008)
//            Introduction to Information Retrieval §6.2

use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::OnceLock;

use anyhow::{bail, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Default vocabulary bound
pub const DEFAULT_MAX_FEATURES: usize = 3000;

fn token_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\b\w\w+\b").expect("static token pattern"))
}

/// Split a document into vocabulary candidate terms
fn tokenize(doc: &str) -> impl Iterator<Item = &str> {
    token_pattern().find_iter(doc).map(|m| m.as_str())
}

// ─── SparseVector ─────────────────────────────────────────────────────────────
/// A fixed-length vector storing only its non-zero entries.
/// `dim` is the full length; absent indices are zero.
#[derive(Debug, Clone, PartialEq)]
pub struct SparseVector {
    dim:     usize,
    /// (index, weight) pairs, sorted by index
    entries: Vec<(usize, f64)>,
}

impl SparseVector {
    pub fn new(dim: usize, mut entries: Vec<(usize, f64)>) -> Self {
        entries.sort_unstable_by_key(|&(i, _)| i);
        Self { dim, entries }
    }

    pub fn dim(&self) -> usize { self.dim }

    pub fn nnz(&self) -> usize { self.entries.len() }

    pub fn is_zero(&self) -> bool { self.entries.is_empty() }

    pub fn iter(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.entries.iter().copied()
    }

    pub fn norm(&self) -> f64 {
        self.entries.iter().map(|(_, w)| w * w).sum::<f64>().sqrt()
    }
}

// ─── TfidfVectorizer ──────────────────────────────────────────────────────────
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TfidfVectorizer {
    /// term → column index (alphabetical order)
    vocabulary: BTreeMap<String, usize>,
    /// idf weight per column
    idf:        Vec<f64>,
}

impl TfidfVectorizer {
    /// Learn the vocabulary and idf table from a corpus.
    /// Fails when the corpus yields no terms at all.
    pub fn fit(docs: &[String], max_features: usize) -> Result<Self> {
        let n_docs = docs.len();

        // ── Step 1-2: corpus term frequency and document frequency ───────────
        let mut term_freq: HashMap<&str, usize> = HashMap::new();
        let mut doc_freq:  HashMap<&str, usize> = HashMap::new();

        for doc in docs {
            let mut seen = HashSet::new();
            for term in tokenize(doc) {
                *term_freq.entry(term).or_insert(0) += 1;
                if seen.insert(term) {
                    *doc_freq.entry(term).or_insert(0) += 1;
                }
            }
        }

        if term_freq.is_empty() {
            bail!("Cannot fit vectorizer: the training corpus contains no terms");
        }

        // ── Step 3: keep the most frequent terms ──────────────────────────────
        let mut ranked: Vec<(&str, usize)> = term_freq.into_iter().collect();
        ranked.sort_unstable_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        ranked.truncate(max_features);

        // ── Step 4: alphabetical indices ─────────────────────────────────────
        let mut terms: Vec<&str> = ranked.into_iter().map(|(t, _)| t).collect();
        terms.sort_unstable();

        // ── Step 5: smoothed idf ─────────────────────────────────────────────
        let idf = terms
            .iter()
            .map(|t| {
                let df = doc_freq[t] as f64;
                ((1.0 + n_docs as f64) / (1.0 + df)).ln() + 1.0
            })
            .collect();

        let vocabulary = terms
            .into_iter()
            .enumerate()
            .map(|(i, t)| (t.to_string(), i))
            .collect();

        let fitted = Self { vocabulary, idf };
        tracing::info!(
            "Vectorizer fitted on {} documents: {} terms (max {})",
            n_docs,
            fitted.vocabulary_size(),
            max_features
        );
        Ok(fitted)
    }

    /// Fit on `docs` and return the vectorizer together with
    /// the transformed training matrix.
    pub fn fit_transform(docs: &[String], max_features: usize) -> Result<(Self, Vec<SparseVector>)> {
        let fitted  = Self::fit(docs, max_features)?;
        let vectors = fitted.transform_all(docs);
        Ok((fitted, vectors))
    }

    /// Vectorize one normalized document against the frozen vocabulary
    pub fn transform(&self, doc: &str) -> SparseVector {
        let mut counts: HashMap<usize, f64> = HashMap::new();
        for term in tokenize(doc) {
            if let Some(&idx) = self.vocabulary.get(term) {
                *counts.entry(idx).or_insert(0.0) += 1.0;
            }
        }

        let entries = counts
            .into_iter()
            .map(|(idx, tf)| (idx, tf * self.idf[idx]))
            .collect();

        let mut x = SparseVector::new(self.vocabulary_size(), entries);
        let norm  = x.norm();
        if norm > 0.0 {
            for (_, w) in &mut x.entries {
                *w /= norm;
            }
        }
        x
    }

    pub fn transform_all(&self, docs: &[String]) -> Vec<SparseVector> {
        docs.iter().map(|d| self.transform(d)).collect()
    }

    /// Length of every vector this vectorizer produces
    pub fn vocabulary_size(&self) -> usize {
        self.idf.len()
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    impl TfidfVectorizer {
        fn index_of(&self, term: &str) -> Option<usize> {
            self.vocabulary.get(term).copied()
        }

        fn idf_of(&self, term: &str) -> Option<f64> {
            self.index_of(term).map(|i| self.idf[i])
        }
    }

    impl SparseVector {
        fn get(&self, index: usize) -> f64 {
            self.iter().find(|&(i, _)| i == index).map_or(0.0, |(_, w)| w)
        }
    }

    fn corpus() -> Vec<String> {
        vec![
            "cash reward claim".to_string(),
            "lunch noon".to_string(),
            "cash lunch".to_string(),
        ]
    }

    #[test]
    fn test_vocabulary_is_alphabetical() {
        let v = TfidfVectorizer::fit(&corpus(), 100).unwrap();
        assert_eq!(v.vocabulary_size(), 5);
        assert_eq!(v.index_of("cash"),   Some(0));
        assert_eq!(v.index_of("claim"),  Some(1));
        assert_eq!(v.index_of("reward"), Some(4));
    }

    #[test]
    fn test_max_features_keeps_most_frequent() {
        let v = TfidfVectorizer::fit(&corpus(), 2).unwrap();
        // cash and lunch appear twice, everything else once
        assert_eq!(v.vocabulary_size(), 2);
        assert!(v.index_of("cash").is_some());
        assert!(v.index_of("lunch").is_some());
        assert!(v.index_of("noon").is_none());
    }

    #[test]
    fn test_smoothed_idf() {
        let v = TfidfVectorizer::fit(&corpus(), 100).unwrap();
        // cash: df = 2 of n = 3 → ln(4/3) + 1
        let expected = (4.0f64 / 3.0).ln() + 1.0;
        assert!((v.idf_of("cash").unwrap() - expected).abs() < 1e-12);
        // claim: df = 1 → ln(4/2) + 1
        let expected = 2.0f64.ln() + 1.0;
        assert!((v.idf_of("claim").unwrap() - expected).abs() < 1e-12);
    }

    #[test]
    fn test_transform_is_l2_normalised() {
        let v = TfidfVectorizer::fit(&corpus(), 100).unwrap();
        let x = v.transform("cash reward claim");
        assert_eq!(x.dim(), 5);
        assert_eq!(x.nnz(), 3);
        assert!((x.norm() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_unknown_terms_have_zero_weight() {
        let v = TfidfVectorizer::fit(&corpus(), 100).unwrap();
        let x = v.transform("zebra cash");
        assert_eq!(x.nnz(), 1);
        assert!((x.get(v.index_of("cash").unwrap()) - 1.0).abs() < 1e-12);

        let empty = v.transform("zebra giraffe");
        assert!(empty.is_zero());
        assert_eq!(empty.dim(), v.vocabulary_size());
    }

    #[test]
    fn test_single_character_tokens_are_ignored() {
        let v = TfidfVectorizer::fit(&["a b cash".to_string()], 100).unwrap();
        assert_eq!(v.vocabulary_size(), 1);
    }

    #[test]
    fn test_empty_corpus_is_an_error() {
        assert!(TfidfVectorizer::fit(&[String::new(), "x".to_string()], 100).is_err());
    }

    #[test]
    fn test_fit_transform_matches_transform() {
        let docs = corpus();
        let (v, xs) = TfidfVectorizer::fit_transform(&docs, 100).unwrap();
        for (doc, x) in docs.iter().zip(&xs) {
            assert_eq!(&v.transform(doc), x);
        }
    }
}
