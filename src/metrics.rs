//! Operation counters for a single cache (feature `metrics`).
//!
//! Counters are plain integers: a cache has one owner, so every update
//! already happens under `&mut self`. Gauges (`len`, `capacity`) are
//! captured when the snapshot is taken.
//!
//! ## Example
//!
//! ```
//! use evictkit::LruCache;
//!
//! let mut cache = LruCache::with_capacity(1);
//! cache.put("a", 1);
//! cache.put("b", 2);
//! cache.get(&"a");
//! cache.get(&"b");
//!
//! let m = cache.metrics_snapshot();
//! assert_eq!(m.evictions, 1);
//! assert_eq!((m.get_hits, m.get_misses), (1, 1));
//! ```

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CacheMetricsSnapshot {
    pub get_calls: u64,
    pub get_hits: u64,
    pub get_misses: u64,

    pub put_calls: u64,
    pub put_new: u64,
    pub put_updates: u64,
    /// `put_opt` calls dropped for a missing key or value, plus puts
    /// rejected by a zero-capacity cache.
    pub put_ignored: u64,

    pub evictions: u64,

    // gauges captured at snapshot time
    pub len: usize,
    pub capacity: usize,
}

impl CacheMetricsSnapshot {
    /// Fraction of lookups that hit, or `0.0` before the first lookup.
    pub fn hit_ratio(&self) -> f64 {
        if self.get_calls == 0 {
            0.0
        } else {
            self.get_hits as f64 / self.get_calls as f64
        }
    }
}

#[derive(Debug, Default, Clone)]
pub(crate) struct CacheMetrics {
    get_hits: u64,
    get_misses: u64,
    put_new: u64,
    put_updates: u64,
    put_ignored: u64,
    evictions: u64,
}

impl CacheMetrics {
    #[inline]
    pub(crate) fn record_get(&mut self, hit: bool) {
        if hit {
            self.get_hits += 1;
        } else {
            self.get_misses += 1;
        }
    }

    #[inline]
    pub(crate) fn record_put(&mut self, is_new: bool) {
        if is_new {
            self.put_new += 1;
        } else {
            self.put_updates += 1;
        }
    }

    #[inline]
    pub(crate) fn record_put_ignored(&mut self) {
        self.put_ignored += 1;
    }

    #[inline]
    pub(crate) fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    pub(crate) fn snapshot(&self, len: usize, capacity: usize) -> CacheMetricsSnapshot {
        CacheMetricsSnapshot {
            get_calls: self.get_hits + self.get_misses,
            get_hits: self.get_hits,
            get_misses: self.get_misses,
            put_calls: self.put_new + self.put_updates + self.put_ignored,
            put_new: self.put_new,
            put_updates: self.put_updates,
            put_ignored: self.put_ignored,
            evictions: self.evictions,
            len,
            capacity,
        }
    }
}
