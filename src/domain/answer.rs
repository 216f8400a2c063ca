// ============================================================
// Layer 3 — Answer Span Types
// ============================================================
// Extractive Q&A produces an answer as a SPAN of the context,
// not generated text. The span is reported twice:
//   - as the extracted substring itself (`answer`)
//   - as byte offsets into the context (`start`, `end`)
// so that `context[start..end] == answer` whenever the engine
// extracts verbatim.
//
// Two types, one per side of the engine boundary:
//   SpanPrediction — what the engine hands back, untouched
//   AnswerResult   — what the service returns to the caller,
//                    with the score rounded for display
//
// Reference: Rust Book §5 (Structs)

use serde::{Deserialize, Serialize};

/// Raw output of a single engine invocation.
///
/// `start`/`end` are byte offsets into the exact context string
/// passed to that invocation. `score` is the engine's raw
/// confidence in [0, 1], unrounded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpanPrediction {
    pub answer: String,
    pub score:  f32,
    pub start:  usize,
    pub end:    usize,
}

/// The per-request result handed to the presentation shell.
///
/// Created fresh per call, owned by the caller, never cached.
/// Offsets pass through from the prediction unmodified; only
/// the score is reshaped (rounded to 4 decimal digits).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerResult {
    /// The extracted answer substring of the context
    pub answer: String,

    /// Confidence in [0, 1], rounded to 4 decimal digits
    pub score: f32,

    /// Byte offset of the first answer byte in the context
    pub start: usize,

    /// Byte offset one past the last answer byte (end >= start)
    pub end: usize,
}

impl AnswerResult {
    /// Shape a raw prediction into the stable result record.
    pub fn from_prediction(p: SpanPrediction) -> Self {
        Self {
            answer: p.answer,
            score:  round_score(p.score),
            start:  p.start,
            end:    p.end,
        }
    }

    /// Length of the answer span in bytes.
    pub fn span_length(&self) -> usize {
        self.end.saturating_sub(self.start)
    }
}

/// Round a confidence score to 4 decimal digits.
fn round_score(score: f32) -> f32 {
    (score * 10_000.0).round() / 10_000.0
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_rounded_to_four_digits() {
        let p = SpanPrediction {
            answer: "Paris".to_string(),
            score:  0.978_562_3,
            start:  0,
            end:    5,
        };
        let r = AnswerResult::from_prediction(p);
        assert_eq!(r.score, 0.9786);
    }

    #[test]
    fn test_offsets_pass_through_unmodified() {
        let p = SpanPrediction {
            answer: "span".to_string(),
            score:  0.5,
            start:  17,
            end:    21,
        };
        let r = AnswerResult::from_prediction(p);
        assert_eq!(r.start, 17);
        assert_eq!(r.end,   21);
    }

    #[test]
    fn test_span_length() {
        let r = AnswerResult {
            answer: "Paris".to_string(),
            score:  1.0,
            start:  0,
            end:    5,
        };
        assert_eq!(r.span_length(), 5);
    }

    #[test]
    fn test_zero_length_span() {
        // A degenerate empty span is representable (start == end)
        let r = AnswerResult {
            answer: String::new(),
            score:  0.0,
            start:  3,
            end:    3,
        };
        assert_eq!(r.span_length(), 0);
    }

    #[test]
    fn test_rounding_boundaries() {
        assert_eq!(super::round_score(0.0), 0.0);
        assert_eq!(super::round_score(1.0), 1.0);
        // Exactly representable 4-digit values survive unchanged
        assert_eq!(super::round_score(0.25), 0.25);
    }
}
