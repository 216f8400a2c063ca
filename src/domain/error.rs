// ============================================================
// Layer 3 — Failure Taxonomy
// ============================================================
// Exactly two kinds of failure cross the core's boundary:
//
//   Initialization — the engine could not be constructed
//                    (missing/corrupt model artifacts,
//                    incompatible runtime). The cache does not
//                    remember the failure: a later call is
//                    allowed to attempt construction again.
//
//   Inference      — the engine rejected or could not process
//                    one (question, context) pair. Scoped to
//                    that single call; the cached engine stays
//                    valid and the next call may succeed.
//
// The core does no logging, no retries, and no fallback answer
// substitution. It raises one of these two and the presentation
// shell decides what the user sees.
//
// Reference: Rust Book §9 (Error Handling)

use thiserror::Error;

/// A failure surfaced by the answer core.
#[derive(Debug, Error)]
pub enum QaError {
    /// The inference engine could not be constructed.
    #[error("engine initialization failed: {0}")]
    Initialization(anyhow::Error),

    /// The engine failed on a single (question, context) pair.
    #[error("inference failed: {0}")]
    Inference(anyhow::Error),
}

impl QaError {
    /// True for construction-time failures.
    pub fn is_initialization(&self) -> bool {
        matches!(self, QaError::Initialization(_))
    }

    /// True for per-call failures.
    pub fn is_inference(&self) -> bool {
        matches!(self, QaError::Inference(_))
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds_are_distinguishable() {
        let init = QaError::Initialization(anyhow::anyhow!("weights missing"));
        let infer = QaError::Inference(anyhow::anyhow!("bad input"));
        assert!(init.is_initialization());
        assert!(!init.is_inference());
        assert!(infer.is_inference());
        assert!(!infer.is_initialization());
    }

    #[test]
    fn test_display_carries_cause() {
        let e = QaError::Inference(anyhow::anyhow!("tokenizer rejected input"));
        let msg = e.to_string();
        assert!(msg.contains("inference failed"));
        assert!(msg.contains("tokenizer rejected input"));
    }
}
