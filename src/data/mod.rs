// ============================================================
// Layer 4 - Data Pipeline
// ============================================================
// Everything from the raw CSV file to normalized text:
//
//   spam.csv
//       │
//       ▼
//   CsvLoader         → reads rows, decodes Latin-1, parses labels
//       │
//       ▼
//   split_train_test  → seeded shuffle, 80/20 split
//       │
//       ▼
//   Normalizer        → lowercase, strip punctuation, stop words, stem
//       │
//       ▼
//   SmsDataset        → normalized texts + labels, column-wise
//
// KeywordOverride also lives here because it matches against
// the Normalizer's output and reuses its stemmer.

/// Loads the labelled CSV dataset
pub mod loader;

/// Cleans, filters and stems raw message text
pub mod preprocessor;

/// Denylist short-circuit evaluated before the classifier
pub mod keywords;

/// Normalized texts and labels ready for the ml layer
pub mod dataset;

/// Seeded shuffle and train/test split
pub mod splitter;
