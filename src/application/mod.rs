// ============================================================
// Layer 2 — Application Layer
// ============================================================
// The serving core. Two components, strictly layered:
//
//   model_cache.rs    — holds at most one initialized engine
//                       per process; lazy, lock-guarded
//                       construction; fail-forward on error
//
//   answer_service.rs — one question/context extraction per
//                       call; shapes the engine output into
//                       the stable AnswerResult record
//
// Control flow:
//   shell → AnswerService::answer
//         → ModelCache::get_engine (constructs on first use)
//         → InferenceEngine::infer
//         → AnswerResult back to the shell
//
// The cache is passed to the service explicitly (constructor
// injection), never reached through ambient global state, so
// tests can wire in a stub engine.

/// Process-wide lazy singleton holding the inference engine
pub mod model_cache;

/// Stateless request/response extraction over the cached engine
pub mod answer_service;
