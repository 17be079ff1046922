// ============================================================
// Layer 3 - Domain Layer
// ============================================================
// Plain Rust types and traits that define the core concepts
// of the spam detector.
//
// Rules for this layer:
//   - NO file I/O
//   - NO vectorizer or classifier maths
//   - Only plain Rust structs, enums, and traits
//
// Think of this layer as the "dictionary" of the system:
// it defines what things ARE, not how they are computed.
//
// Reference: Rust Book §5 (Structs), §6 (Enums), §10 (Traits)

// Spam / ham labels and labelled training examples
pub mod label;

// The tagged result of the override-then-classify decision
pub mod decision;

// Core abstractions (traits) that other layers implement
pub mod traits;
