// ============================================================
// Layer 6 - Infrastructure Layer
// ============================================================
// Cross-cutting concerns that don't belong to any one layer:
//
//   artifact.rs - Model persistence
//                 Saves the fitted classifier and vectorizer
//                 together as one bincode file, and loads
//                 them back for inference.
//
//   metrics.rs  - Evaluation report
//                 Precision / recall / F1 / support per class,
//                 accuracy, macro and weighted averages.
//
// Reference: Rust Book §7 (Modules)

/// Model artifact saving and loading
pub mod artifact;

/// Classification report for held-out evaluation
pub mod metrics;
