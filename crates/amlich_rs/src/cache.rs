//! LRU memoization of lunar-year spans.

use std::num::NonZeroUsize;

use amlich_calendar::{LunarYearSpan, SpanSource};
use lru::LruCache;
use parking_lot::Mutex;
use tracing::debug;

/// A [`SpanSource`] that remembers recently computed spans.
///
/// Entries are keyed by anchor year for a single timezone. Requests for any
/// other offset are computed directly and not stored.
pub struct CachedSpans {
    tz_hours: f64,
    inner: Mutex<LruCache<i32, LunarYearSpan>>,
}

impl CachedSpans {
    pub fn new(capacity: NonZeroUsize, tz_hours: f64) -> Self {
        Self {
            tz_hours,
            inner: Mutex::new(LruCache::new(capacity)),
        }
    }

    pub fn tz_hours(&self) -> f64 {
        self.tz_hours
    }

    /// Number of cached spans.
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    pub fn clear(&self) {
        self.inner.lock().clear();
    }
}

impl SpanSource for CachedSpans {
    fn span(&self, anchor_year: i32, tz_hours: f64) -> LunarYearSpan {
        if tz_hours != self.tz_hours {
            return LunarYearSpan::compute(anchor_year, tz_hours);
        }
        if let Some(span) = self.inner.lock().get(&anchor_year) {
            return *span;
        }
        // Computed without the lock held; a racing thread may store the same value.
        debug!(anchor_year, "span cache miss");
        let span = LunarYearSpan::compute(anchor_year, tz_hours);
        self.inner.lock().put(anchor_year, span);
        span
    }
}

impl std::fmt::Debug for CachedSpans {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CachedSpans")
            .field("tz_hours", &self.tz_hours)
            .field("len", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cache(capacity: usize) -> CachedSpans {
        CachedSpans::new(NonZeroUsize::new(capacity).unwrap(), 7.0)
    }

    #[test]
    fn cached_span_matches_direct() {
        let c = cache(4);
        let first = c.span(2024, 7.0);
        let second = c.span(2024, 7.0);
        assert_eq!(first, LunarYearSpan::compute(2024, 7.0));
        assert_eq!(first, second);
        assert_eq!(c.len(), 1);
    }

    #[test]
    fn evicts_least_recently_used() {
        let c = cache(2);
        c.span(2020, 7.0);
        c.span(2021, 7.0);
        c.span(2020, 7.0);
        c.span(2022, 7.0);
        assert_eq!(c.len(), 2);
        assert!(c.inner.lock().contains(&2020));
        assert!(!c.inner.lock().contains(&2021));
    }

    #[test]
    fn other_timezone_bypasses_cache() {
        let c = cache(4);
        let span = c.span(2024, 8.0);
        assert_eq!(span, LunarYearSpan::compute(2024, 8.0));
        assert!(c.is_empty());
    }

    #[test]
    fn clear_empties() {
        let c = cache(4);
        c.span(2000, 7.0);
        c.clear();
        assert!(c.is_empty());
    }
}
