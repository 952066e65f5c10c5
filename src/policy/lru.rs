//! LRU (Least Recently Used) eviction policy.
//!
//! Evicts the entry that has gone longest without being written or read.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────────┐
//! │                          LruPolicy<K> Layout                                │
//! │                                                                             │
//! │   recency: KeyOrder<K>                                                      │
//! │                                                                             │
//! │   head (LRU - EVICT)                                     tail (MRU - keep)  │
//! │     ▼                                                            ▼          │
//! │    [B] ◄──► [C] ◄──► [D] ◄──► [A]                                           │
//! │                                                                             │
//! │   • New keys are appended at the tail                                       │
//! │   • put on an existing key moves it to the tail                             │
//! │   • get on a resident key moves it to the tail                              │
//! │   • The victim is always the head                                           │
//! └─────────────────────────────────────────────────────────────────────────────┘
//!
//! Walkthrough (capacity 4)
//! ────────────────────────
//!
//!   put A, put B, put C, put D    [A] [B] [C] [D]
//!   get A                         [B] [C] [D] [A]
//!   put E  → victim B             [C] [D] [A] [E]
//! ```
//!
//! ## Operations
//!
//! | Operation       | Time | Notes                          |
//! |-----------------|------|--------------------------------|
//! | `on_put`        | O(1) | Append or move to tail         |
//! | `on_get`        | O(1) | Move to tail                   |
//! | `select_victim` | O(1) | Head of the recency list       |
//! | `recency_rank`  | O(n) | Walks from the head            |
//!
//! ## When to Use
//!
//! **Use LRU when** recently touched data is likely to be touched again,
//! which is the common case for request and page caches.
//!
//! **Avoid LRU when** large sequential scans would flush the hot set; MRU
//! or FIFO behave better there.
//!
//! ## Example Usage
//!
//! ```
//! use evictkit::LruCache;
//!
//! let mut cache = LruCache::new();
//! cache.put("A", 1);
//! cache.put("B", 2);
//! cache.put("C", 3);
//! cache.put("D", 4);
//!
//! assert_eq!(cache.get(&"A"), Some(&1));
//! cache.put("E", 5);
//!
//! assert!(!cache.contains(&"B"));
//! assert!(cache.contains(&"A"));
//! ```

use std::hash::Hash;

use crate::ds::KeyOrder;
use crate::traits::EvictionPolicy;

/// Recency tracker: victim is the least recently used key.
///
/// # Example
///
/// ```
/// use evictkit::policy::lru::LruPolicy;
/// use evictkit::traits::EvictionPolicy;
///
/// let mut policy = LruPolicy::with_capacity(3);
/// policy.on_put(&1, true);
/// policy.on_put(&2, true);
/// policy.on_put(&3, true);
/// policy.on_get(&1);
///
/// assert_eq!(policy.select_victim(), Some(&2));
/// assert_eq!(policy.recency_rank(&1), Some(2));
/// ```
#[derive(Debug)]
pub struct LruPolicy<K>
where
    K: Clone + Eq + Hash,
{
    recency: KeyOrder<K>,
}

impl<K> LruPolicy<K>
where
    K: Clone + Eq + Hash,
{
    /// Zero-based position from the least recently used end.
    pub fn recency_rank(&self, key: &K) -> Option<usize> {
        self.recency.position(key)
    }

    fn touch(&mut self, key: &K) {
        if !self.recency.move_to_back(key) {
            self.recency.push_back(key.clone());
        }
    }
}

impl<K> EvictionPolicy<K> for LruPolicy<K>
where
    K: Clone + Eq + Hash,
{
    fn with_capacity(capacity: usize) -> Self {
        Self {
            recency: KeyOrder::with_capacity(capacity),
        }
    }

    fn name(&self) -> &'static str {
        "lru"
    }

    #[inline]
    fn on_put(&mut self, key: &K, _is_new: bool) {
        self.touch(key);
    }

    #[inline]
    fn on_get(&mut self, key: &K) {
        self.recency.move_to_back(key);
    }

    #[inline]
    fn select_victim(&self) -> Option<&K> {
        self.recency.front()
    }

    fn remove(&mut self, key: &K) -> bool {
        self.recency.remove(key)
    }

    fn contains(&self, key: &K) -> bool {
        self.recency.contains(key)
    }

    fn len(&self) -> usize {
        self.recency.len()
    }

    fn clear(&mut self) {
        self.recency.clear();
    }

    fn eviction_order(&self) -> Vec<&K> {
        self.recency.iter().collect()
    }
}
