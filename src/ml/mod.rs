// ============================================================
// Layer 5 - ML / Model Layer
// ============================================================
// All of the learning maths lives here. Other layers hand in
// normalized text and get labels back.
//
//   vectorizer.rs  - TF-IDF vocabulary (top 3000 terms),
//                    sparse L2-normalised feature vectors
//
//   naive_bayes.rs - Multinomial naive Bayes with additive
//                    smoothing and per-sample weights
//
//   bagging.rs     - Bootstrap ensemble of 10 naive-Bayes
//                    learners, majority vote
//
//   trainer.rs     - Fit vectorizer + ensemble, evaluate on
//                    the held-out set
//
//   inferencer.rs  - Frozen-vocabulary prediction for a
//                    single normalized message
//
// Reference: Manning, Raghavan & Schütze (2008) Introduction
//            to Information Retrieval, ch. 6 and 13

/// TF-IDF feature extraction
pub mod vectorizer;

/// Multinomial naive-Bayes base learner
pub mod naive_bayes;

/// Bagging ensemble over naive-Bayes learners
pub mod bagging;

/// Fit and evaluate the full model
pub mod trainer;

/// Predict with a loaded artifact
pub mod inferencer;
