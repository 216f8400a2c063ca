// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Pure Rust types and traits defining the core concepts of
// extractive question answering.
//
// Rules for this layer:
//   - NO Burn framework types allowed here
//   - NO file I/O or network calls
//   - NO ML-specific code
//
// Why keep this layer pure?
//   - Easy to unit test (no GPU, no model weights)
//   - The application layer can be exercised with a stub
//     engine that implements the InferenceEngine trait
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

// Answer span types: raw engine output and the shaped result
pub mod answer;

// The two-kind failure taxonomy (initialization vs inference)
pub mod error;

// Core abstraction: the narrow engine capability
pub mod traits;
