// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The engine behind extractive Q&A is a heavyweight external
// capability: model weights, a tokenizer, possibly a GPU. The
// core never touches any of that directly — it only sees this
// one narrow trait.
//
// By programming against the trait instead of the concrete
// type, the application layer is testable with a deterministic
// stub engine. No model weights are ever loaded in unit tests.
//
// Implementations:
//   - SpanExtractor (engine layer) → the real transformer model
//   - test stubs in application-layer #[cfg(test)] modules
//
// This is the Dependency Inversion Principle from SOLID,
// applied using Rust's trait system.
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use anyhow::Result;

use crate::domain::answer::SpanPrediction;

/// The sole contract the core depends on: given a question and
/// a context passage, extract an answer span.
///
/// The engine is read-only after construction, so a shared
/// reference suffices for invocation. Any failure it returns is
/// treated as an inference failure by the caller — the engine
/// itself never distinguishes failure kinds.
pub trait InferenceEngine: Send + Sync {
    /// Run one extraction. Empty question or context is not
    /// rejected here; the engine's behaviour on degenerate
    /// input is the authoritative outcome.
    fn infer(&self, question: &str, context: &str) -> Result<SpanPrediction>;
}
