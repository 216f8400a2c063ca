// ============================================================
// Layer 4 — Engine Layer (Burn)
// ============================================================
// This layer contains ALL Burn framework specific code.
// No other layer imports from burn directly — only this one.
//
// Why isolate Burn code here?
//   - If Burn's API changes, we only update this layer
//   - The application core is testable without a GPU via the
//     InferenceEngine trait and a stub
//
// What's in this layer:
//
//   encoder.rs   — The transformer encoder architecture with a
//                  span-prediction head (start/end logits per
//                  context token). Inference-only: no training
//                  loop lives in this crate.
//
//   extractor.rs — The inference engine implementation. Loads
//                  the deployed checkpoint once, tokenises
//                  (question, context), runs the encoder, and
//                  maps the best token span back to byte
//                  offsets in the original context.
//
// Reference: Burn Book §3 (Building Blocks)
//            Vaswani et al. (2017) Attention Is All You Need
//            Devlin et al. (2019) BERT

/// Transformer encoder with span-prediction head
pub mod encoder;

/// Checkpoint-backed InferenceEngine implementation
pub mod extractor;

/// Fixed model identity, resolved at build time. The directory
/// holds the deployed artifacts: encoder weights, architecture
/// config, and tokenizer vocabulary. Not user-configurable at
/// runtime.
pub const MODEL_DIR: &str = "model";
