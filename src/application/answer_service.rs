// ============================================================
// Layer 2 — Answer Service
// ============================================================
// Executes one question/context extraction and shapes the
// output. Pure request/response: no state machine, no memory
// of prior calls, no retries, no partial results.
//
// Responsibilities:
//   1. Ensure the engine exists via the Model Cache
//   2. Invoke infer(question, context)
//   3. Normalize the raw prediction into an AnswerResult
//      (score rounded to 4 digits, offsets untouched)
//
// Deliberately NOT responsibilities:
//   - input validation: empty question or context is forwarded
//     to the engine, whose behaviour is the authoritative
//     outcome, not special-cased here
//   - error recovery: both failure kinds propagate to the
//     caller; an inference failure never invalidates the
//     cached engine

use crate::application::model_cache::ModelCache;
use crate::domain::answer::AnswerResult;
use crate::domain::error::QaError;
use crate::domain::traits::InferenceEngine;

/// Stateless extraction service over a cached engine.
pub struct AnswerService<E: InferenceEngine> {
    cache: ModelCache<E>,
}

impl<E: InferenceEngine> AnswerService<E> {
    /// The cache is injected, never reached through globals, so
    /// a test can wire in a stub engine.
    pub fn new(cache: ModelCache<E>) -> Self {
        Self { cache }
    }

    /// Answer one question against one context passage.
    pub fn answer(&self, question: &str, context: &str) -> Result<AnswerResult, QaError> {
        let engine = self.cache.get_engine()?;
        let prediction = engine
            .infer(question, context)
            .map_err(QaError::Inference)?;
        Ok(AnswerResult::from_prediction(prediction))
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::answer::SpanPrediction;
    use anyhow::Result;

    /// Deterministic stub: extracts a configured needle from
    /// the context verbatim, and fails the way a real engine
    /// does when the context holds no tokens to extract from.
    struct StubEngine {
        needle:    &'static str,
        raw_score: f32,
    }

    impl InferenceEngine for StubEngine {
        fn infer(&self, _question: &str, context: &str) -> Result<SpanPrediction> {
            if context.is_empty() {
                anyhow::bail!("context produced no tokens to extract from");
            }
            let start = context.find(self.needle).unwrap_or(0);
            let end = (start + self.needle.len()).min(context.len());
            Ok(SpanPrediction {
                answer: context[start..end].to_string(),
                score:  self.raw_score,
                start,
                end,
            })
        }
    }

    fn service_with(needle: &'static str, raw_score: f32) -> AnswerService<StubEngine> {
        let cache = ModelCache::new(move || Ok(StubEngine { needle, raw_score }));
        AnswerService::new(cache)
    }

    #[test]
    fn test_capital_of_france_scenario() {
        let service = service_with("Paris", 0.983_217_4);
        let result = service
            .answer(
                "What is the capital of France?",
                "Paris is the capital of France.",
            )
            .unwrap();

        assert_eq!(result.answer, "Paris");
        assert_eq!(result.start, 0);
        assert_eq!(result.end,   5);
        assert_eq!(result.score, 0.9832);
    }

    #[test]
    fn test_offsets_index_into_given_context() {
        let service = service_with("graduation", 0.5);
        let context = "The graduation ceremony is on 15 April.";
        let result = service.answer("When is it?", context).unwrap();

        assert!(result.start <= result.end);
        assert!(result.end <= context.len());
        assert_eq!(&context[result.start..result.end], result.answer);
    }

    #[test]
    fn test_score_is_rounded_to_four_digits() {
        let service = service_with("Paris", 0.123_456_78);
        let result = service.answer("q", "Paris").unwrap();
        assert_eq!(result.score, 0.1235);
    }

    #[test]
    fn test_repeated_calls_are_deterministic() {
        let service = service_with("Paris", 0.75);
        let a = service.answer("q", "Paris is the capital.").unwrap();
        let b = service.answer("q", "Paris is the capital.").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_context_surfaces_inference_failure() {
        // Documented contract: an empty context is forwarded to
        // the engine, which reports it as an inference failure.
        let service = service_with("Paris", 0.9);
        let err = service.answer("What is the capital?", "").unwrap_err();
        assert!(err.is_inference());
    }

    #[test]
    fn test_failure_does_not_poison_later_calls() {
        let service = service_with("Paris", 0.9);

        assert!(service.answer("q", "").is_err());
        // The cached engine survives the failed call.
        let result = service.answer("q", "Paris stands.").unwrap();
        assert_eq!(result.answer, "Paris");
    }

    #[test]
    fn test_empty_question_is_forwarded_not_rejected() {
        let service = service_with("Paris", 0.9);
        let result = service.answer("", "Paris is the capital.").unwrap();
        assert_eq!(result.answer, "Paris");
    }
}
