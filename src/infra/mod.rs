// ============================================================
// Layer 5 — Infrastructure Layer
// ============================================================
// Disk access for the deployed model artifacts. This crate only
// ever READS them — producing the artifacts (training, vocab
// building) happens in a separate pipeline and the results are
// shipped alongside the binary.
//
// Expected layout of the model directory:
//   model/
//     encoder.mpk.gz   ← encoder weights (Burn CompactRecorder)
//     config.json      ← architecture hyperparameters
//     tokenizer.json   ← vocabulary (HuggingFace tokenizer format)
//
// Why save the config separately?
//   When loading for inference we need the exact architecture
//   (d_model, num_layers, ...) to rebuild the encoder before the
//   weights can be restored into it.
//
// Reference: Burn Book §5 (Records and Checkpointing)

/// Encoder weights + architecture config loading
pub mod checkpoint;

/// Tokenizer vocabulary loading
pub mod tokenizer_store;
