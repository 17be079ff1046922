// ============================================================
// Layer 2 - Application / Use Cases
// ============================================================
// This layer orchestrates the other layers to accomplish one
// goal each: training the model, or checking a message.
//
// Rules for this layer:
//   - No vectorizer or classifier maths here
//   - No printing here (that's Layer 1)
//   - Only workflow coordination
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// The offline training workflow
pub mod train_use_case;

// The single-message checking workflow
pub mod check_use_case;
