// ============================================================
// Layer 2 — Model Cache
// ============================================================
// Loading model weights is slow (disk- or network-bound), so
// the engine must be constructed exactly once per process and
// reused for every subsequent request.
//
// Design: a lock-protected lazy cell.
//   - The slot starts empty.
//   - The first get_engine() call runs the loader under the
//     lock; near-simultaneous callers block until it finishes
//     and then all observe the same Arc.
//   - A FAILED load leaves the slot empty (fail-forward, no
//     negative caching): the next call attempts construction
//     again, which may succeed if the cause was transient.
//   - Once filled, the slot is never invalidated or reloaded
//     for the life of the process. No hot-reload, no version
//     switching.
//
// The loader is injected at construction so the cache itself
// knows nothing about checkpoints or tokenizers, and tests can
// count constructions of a stub engine.
//
// Reference: Rust Book §16 (Shared-State Concurrency)

use std::sync::{Arc, Mutex};

use anyhow::Result;

use crate::domain::error::QaError;

type Loader<E> = Box<dyn Fn() -> Result<E> + Send + Sync>;

/// Holds at most one initialized engine for the process
/// lifetime. Cheap to share behind an Arc if the shell needs
/// its own handle.
pub struct ModelCache<E> {
    slot:   Mutex<Option<Arc<E>>>,
    loader: Loader<E>,
}

impl<E> ModelCache<E> {
    /// Create an empty cache around a loader. The loader is not
    /// invoked here — construction is deferred to first use.
    pub fn new(loader: impl Fn() -> Result<E> + Send + Sync + 'static) -> Self {
        Self {
            slot:   Mutex::new(None),
            loader: Box::new(loader),
        }
    }

    /// Return the process-wide engine, constructing it on first
    /// use. Every call after a successful construction returns
    /// the same instance without re-incurring load cost.
    pub fn get_engine(&self) -> Result<Arc<E>, QaError> {
        // Construction happens under the lock: concurrent first
        // callers block here and then take the fast path below.
        let mut slot = self
            .slot
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        if let Some(engine) = slot.as_ref() {
            return Ok(Arc::clone(engine));
        }

        let engine = Arc::new((self.loader)().map_err(QaError::Initialization)?);
        *slot = Some(Arc::clone(&engine));
        Ok(engine)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Stand-in engine: records how many times it was built.
    #[derive(Debug)]
    struct CountingEngine;

    fn counting_cache(builds: Arc<AtomicUsize>) -> ModelCache<CountingEngine> {
        ModelCache::new(move || {
            builds.fetch_add(1, Ordering::SeqCst);
            Ok(CountingEngine)
        })
    }

    #[test]
    fn test_construction_runs_exactly_once() {
        let builds = Arc::new(AtomicUsize::new(0));
        let cache = counting_cache(Arc::clone(&builds));

        for _ in 0..10 {
            cache.get_engine().unwrap();
        }
        assert_eq!(builds.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_all_callers_observe_same_instance() {
        let builds = Arc::new(AtomicUsize::new(0));
        let cache = counting_cache(builds);

        let first  = cache.get_engine().unwrap();
        let second = cache.get_engine().unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_failed_construction_is_not_cached() {
        // First attempt fails, second succeeds — the cache must
        // retry instead of replaying the failure.
        let attempts = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&attempts);
        let cache: ModelCache<CountingEngine> = ModelCache::new(move || {
            if counter.fetch_add(1, Ordering::SeqCst) == 0 {
                anyhow::bail!("weights file missing")
            }
            Ok(CountingEngine)
        });

        let err = cache.get_engine().unwrap_err();
        assert!(err.is_initialization());

        assert!(cache.get_engine().is_ok());
        assert_eq!(attempts.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_concurrent_first_access_constructs_once() {
        let builds = Arc::new(AtomicUsize::new(0));
        let cache = Arc::new(counting_cache(Arc::clone(&builds)));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let cache = Arc::clone(&cache);
                std::thread::spawn(move || cache.get_engine().unwrap())
            })
            .collect();

        let engines: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

        assert_eq!(builds.load(Ordering::SeqCst), 1);
        for pair in engines.windows(2) {
            assert!(Arc::ptr_eq(&pair[0], &pair[1]));
        }
    }
}
