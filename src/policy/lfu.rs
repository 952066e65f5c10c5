//! LFU (Least Frequently Used) eviction policy.
//!
//! Evicts the entry with the lowest access count. Counts start at 1 when a
//! key is inserted and grow by one on every value update and every
//! successful lookup. Among keys sharing the lowest count, the one touched
//! least recently goes first.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────────┐
//! │                          LfuPolicy<K> Layout                                │
//! │                                                                             │
//! │   counts: FrequencyBuckets<K>                                               │
//! │                                                                             │
//! │   freq 1 ─► [C] ◄──► [D]          ◄── lowest bucket, head is the victim     │
//! │   freq 2 ─► [B]                                                             │
//! │   freq 4 ─► [A]                                                             │
//! │                                                                             │
//! │   Within a bucket keys are ordered by when they reached that count,         │
//! │   which is when they were last touched.                                     │
//! └─────────────────────────────────────────────────────────────────────────────┘
//!
//! Touch Flow
//! ──────────
//!
//!   get("B") or put("B", v) on a resident key:
//!     1. Unlink B from bucket 2 (drop the bucket if now empty)
//!     2. Append B to the tail of bucket 3
//!
//! Eviction Flow
//! ─────────────
//!
//!   select_victim():
//!     1. Take the lowest non-empty bucket
//!     2. Return its head
//! ```
//!
//! ## Operations
//!
//! | Operation       | Time     | Notes                                   |
//! |-----------------|----------|-----------------------------------------|
//! | `on_put` (new)  | O(log F) | Count starts at 1                       |
//! | `on_put` (upd.) | O(log F) | Count + 1                               |
//! | `on_get`        | O(log F) | Count + 1                               |
//! | `select_victim` | O(log F) | F = distinct counts, at most capacity   |
//!
//! ## Design Notes
//!
//! A fresh insert counts as one use. A newly inserted key therefore ties
//! with every other never-read key and, being the most recent of them,
//! loses every such tie.
//!
//! ## Example Usage
//!
//! ```
//! use evictkit::LfuCache;
//!
//! let mut cache = LfuCache::new();
//! for (k, v) in [("A", 1), ("B", 2), ("C", 3), ("D", 4)] {
//!     cache.put(k, v);
//! }
//! cache.get(&"A");
//! cache.get(&"B");
//! cache.get(&"D");
//!
//! // "C" is the only key still at count 1
//! cache.put("E", 5);
//! assert!(!cache.contains(&"C"));
//! assert_eq!(cache.policy().frequency(&"A"), Some(2));
//! ```

use std::hash::Hash;

use crate::ds::FrequencyBuckets;
use crate::traits::EvictionPolicy;

/// Frequency tracker with recency tie-breaking.
#[derive(Debug)]
pub struct LfuPolicy<K>
where
    K: Clone + Eq + Hash,
{
    counts: FrequencyBuckets<K>,
}

impl<K> LfuPolicy<K>
where
    K: Clone + Eq + Hash,
{
    /// Current access count of `key`.
    pub fn frequency(&self, key: &K) -> Option<u64> {
        self.counts.frequency(key)
    }

    /// Lowest access count among tracked keys.
    pub fn min_frequency(&self) -> Option<u64> {
        self.counts.min_frequency()
    }

    fn touch(&mut self, key: &K) {
        if self.counts.touch(key).is_none() {
            self.counts.insert(key.clone());
        }
    }
}

impl<K> EvictionPolicy<K> for LfuPolicy<K>
where
    K: Clone + Eq + Hash,
{
    fn with_capacity(capacity: usize) -> Self {
        Self {
            counts: FrequencyBuckets::with_capacity(capacity),
        }
    }

    fn name(&self) -> &'static str {
        "lfu"
    }

    #[inline]
    fn on_put(&mut self, key: &K, is_new: bool) {
        if is_new {
            self.counts.insert(key.clone());
        } else {
            self.touch(key);
        }
    }

    #[inline]
    fn on_get(&mut self, key: &K) {
        self.counts.touch(key);
    }

    #[inline]
    fn select_victim(&self) -> Option<&K> {
        self.counts.peek_min()
    }

    fn remove(&mut self, key: &K) -> bool {
        self.counts.remove(key).is_some()
    }

    fn contains(&self, key: &K) -> bool {
        self.counts.contains(key)
    }

    fn len(&self) -> usize {
        self.counts.len()
    }

    fn clear(&mut self) {
        self.counts.clear();
    }

    fn eviction_order(&self) -> Vec<&K> {
        self.counts.iter().map(|(key, _)| key).collect()
    }
}
