// ============================================================
// Layer 5 — Checkpoint Store
// ============================================================
// Restores the encoder from a deployed checkpoint directory.
//
// Burn's CompactRecorder:
//   - Deserialises model parameters from MessagePack (gzipped)
//   - Type-safe: loading fails if the architecture of the
//     receiving model doesn't match the saved record
//
// Every failure here surfaces as an initialization failure at
// the cache boundary — with enough context in the message to
// tell a missing deployment from a corrupt one.

use anyhow::{Context, Result};
use std::{fs, path::PathBuf};
use burn::{
    prelude::*,
    record::{CompactRecorder, Recorder},
};

use crate::engine::encoder::{QaEncoder, QaEncoderConfig};

const WEIGHTS_FILE: &str = "encoder";
const CONFIG_FILE:  &str = "config.json";

/// Read-only access to one checkpoint directory.
pub struct CheckpointStore {
    dir: PathBuf,
}

impl CheckpointStore {
    pub fn new(dir: impl Into<String>) -> Self {
        Self { dir: PathBuf::from(dir.into()) }
    }

    /// Load the architecture config the checkpoint was built
    /// with. Needed to rebuild the encoder before its weights
    /// can be restored.
    pub fn load_config(&self) -> Result<QaEncoderConfig> {
        let path = self.dir.join(CONFIG_FILE);

        let json = fs::read_to_string(&path)
            .with_context(|| {
                format!(
                    "Cannot read model config from '{}'. \
                     Are the model artifacts deployed?",
                    path.display()
                )
            })?;

        Ok(serde_json::from_str(&json)?)
    }

    /// Restore the saved weights into a freshly built encoder.
    /// The encoder must match the saved architecture exactly.
    pub fn load_weights<B: Backend>(
        &self,
        model:  QaEncoder<B>,
        device: &B::Device,
    ) -> Result<QaEncoder<B>> {
        // Recorder appends its own extension (.mpk.gz)
        let path = self.dir.join(WEIGHTS_FILE);

        let record = CompactRecorder::new()
            .load(path.clone(), device)
            .with_context(|| {
                format!("Cannot load encoder weights from '{}'", path.display())
            })?;

        Ok(model.load_record(record))
    }
}
