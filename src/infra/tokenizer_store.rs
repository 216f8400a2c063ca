// ============================================================
// Layer 5 — Tokenizer Store
// ============================================================
// Loads the deployed tokenizer vocabulary. The same vocabulary
// the encoder was trained with MUST be used at inference time,
// which is why it ships inside the model directory rather than
// being built on the fly.

use anyhow::Result;
use std::path::PathBuf;
use tokenizers::Tokenizer;

const TOKENIZER_FILE: &str = "tokenizer.json";

pub struct TokenizerStore {
    dir: PathBuf,
}

impl TokenizerStore {
    pub fn new(dir: impl Into<String>) -> Self {
        Self { dir: PathBuf::from(dir.into()) }
    }

    /// Load the tokenizer from its HuggingFace-format JSON file.
    pub fn load(&self) -> Result<Tokenizer> {
        let path = self.dir.join(TOKENIZER_FILE);
        Tokenizer::from_file(&path)
            .map_err(|e| anyhow::anyhow!(
                "Cannot load tokenizer from '{}': {}", path.display(), e
            ))
    }
}
