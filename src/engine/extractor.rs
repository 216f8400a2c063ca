// ============================================================
// Layer 4 — Span Extractor
// ============================================================
// The real InferenceEngine. Construction loads the deployed
// artifacts (slow, disk-bound — the Model Cache makes sure it
// happens once); invocation is read-only and can run from a
// shared reference.
//
// Extraction pipeline per call:
//   1. Tokenise question and context separately so the context
//      encoding keeps its byte offsets into the original text
//   2. Build [CLS] question [SEP] context [SEP], truncated to
//      max_seq_len
//   3. Forward pass → per-token start/end logits → softmax
//   4. Search the best (start, end) pair inside the context
//      token range, capped at MAX_ANSWER_TOKENS
//   5. Map the token span back to byte offsets and slice the
//      answer verbatim out of the context string
//
// The verbatim slice in step 5 is what guarantees
// context[start..end] == answer for every result.

use anyhow::Result;
use burn::prelude::*;
use tokenizers::Tokenizer;

use crate::domain::answer::SpanPrediction;
use crate::domain::traits::InferenceEngine;
use crate::engine::encoder::QaEncoder;
use crate::infra::checkpoint::CheckpointStore;
use crate::infra::tokenizer_store::TokenizerStore;

type InferBackend = burn::backend::Wgpu;

const CLS_ID: u32 = 101;
const SEP_ID: u32 = 102;

// Answers longer than this many tokens are never real spans in
// extractive Q&A data; capping the search keeps it O(n * cap).
const MAX_ANSWER_TOKENS: usize = 30;

pub struct SpanExtractor {
    model:       QaEncoder<InferBackend>,
    tokenizer:   Tokenizer,
    max_seq_len: usize,
    device:      burn::backend::wgpu::WgpuDevice,
}

impl SpanExtractor {
    /// Load the deployed model artifacts from `dir`. Slow: reads
    /// weights, architecture config, and tokenizer vocabulary.
    pub fn load(dir: &str) -> Result<Self> {
        let device    = burn::backend::wgpu::WgpuDevice::default();
        let tokenizer = TokenizerStore::new(dir).load()?;

        let store   = CheckpointStore::new(dir);
        let mut cfg = store.load_config()?;
        // Dropout is a training-time regulariser; inference runs without it.
        cfg.dropout = 0.0;

        let model: QaEncoder<InferBackend> = cfg.init(&device);
        let model = store.load_weights(model, &device)?;
        tracing::info!("Engine loaded from '{}'", dir);

        Ok(Self { model, tokenizer, max_seq_len: cfg.max_seq_len, device })
    }
}

impl InferenceEngine for SpanExtractor {
    fn infer(&self, question: &str, context: &str) -> Result<SpanPrediction> {
        let q_enc = self.tokenizer.encode(question, false)
            .map_err(|e| anyhow::anyhow!("question tokenise: {e}"))?;
        let c_enc = self.tokenizer.encode(context, false)
            .map_err(|e| anyhow::anyhow!("context tokenise: {e}"))?;

        // Build [CLS] question [SEP] context [SEP]
        let mut input_ids: Vec<u32> = vec![CLS_ID];
        input_ids.extend_from_slice(q_enc.get_ids());
        input_ids.push(SEP_ID);
        let context_start = input_ids.len();
        input_ids.extend_from_slice(c_enc.get_ids());
        input_ids.push(SEP_ID);
        input_ids.truncate(self.max_seq_len);
        let seq_len = input_ids.len();

        // Context tokens occupy [context_start, ctx_end); anything
        // past max_seq_len was truncated away.
        let ctx_end = (context_start + c_enc.get_ids().len()).min(seq_len);
        if ctx_end <= context_start {
            // Empty context, or a question so long it crowded the
            // context out of the window entirely.
            anyhow::bail!("context produced no tokens to extract from");
        }

        while input_ids.len() < self.max_seq_len {
            input_ids.push(0);
        }

        // Forward pass
        let input_flat: Vec<i32> = input_ids.iter().map(|&x| x as i32).collect();
        let input_tensor = Tensor::<InferBackend, 1, Int>::from_ints(
            input_flat.as_slice(), &self.device,
        ).unsqueeze::<2>();

        let logits = self.model.forward(input_tensor);
        let start_logits = logits.start.squeeze::<1>(0).slice([0..seq_len]);
        let end_logits   = logits.end.squeeze::<1>(0).slice([0..seq_len]);

        let start_probs: Vec<f32> = burn::tensor::activation::softmax(
            start_logits.unsqueeze::<2>(), 1,
        ).squeeze::<1>(0).into_data().to_vec::<f32>()
            .map_err(|e| anyhow::anyhow!("read start probabilities: {e:?}"))?;

        let end_probs: Vec<f32> = burn::tensor::activation::softmax(
            end_logits.unsqueeze::<2>(), 1,
        ).squeeze::<1>(0).into_data().to_vec::<f32>()
            .map_err(|e| anyhow::anyhow!("read end probabilities: {e:?}"))?;

        let (best_start, best_end, score) =
            best_span(&start_probs, &end_probs, context_start, ctx_end, MAX_ANSWER_TOKENS)
                .ok_or_else(|| anyhow::anyhow!("no candidate span in context window"))?;

        // Token span → byte span in the original context string.
        let offsets = c_enc.get_offsets();
        let start = offsets[best_start - context_start].0;
        let end   = offsets[best_end - context_start].1;
        let answer = context[start..end].to_string();

        tracing::debug!("span tokens [{},{}] conf={:.4} answer='{}'",
            best_start, best_end, score, answer);

        Ok(SpanPrediction { answer, score, start, end })
    }
}

/// Find the (start, end) token pair maximising
/// start_probs[s] * end_probs[e] with lo <= s <= e < hi and
/// span length capped at max_len tokens. Returns None when the
/// range is empty.
fn best_span(
    start_probs: &[f32],
    end_probs:   &[f32],
    lo:          usize,
    hi:          usize,
    max_len:     usize,
) -> Option<(usize, usize, f32)> {
    let hi = hi.min(start_probs.len()).min(end_probs.len());
    let mut best: Option<(usize, usize, f32)> = None;

    for s in lo..hi {
        for e in s..(s + max_len).min(hi) {
            let score = start_probs[s] * end_probs[e];
            if best.map_or(true, |(_, _, b)| score > b) {
                best = Some((s, e, score));
            }
        }
    }
    best
}
